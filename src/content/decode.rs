/// Upper bound on a decoded request path, in bytes.
pub const MAX_DECODED_LEN: usize = 1024;

fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'A'..=b'F' => b - b'A' + 10,
        b'a'..=b'f' => b - b'a' + 10,
        _ => 0,
    }
}

/// Decodes URL escapes in a path segment into raw bytes.
///
/// `%XX` becomes the byte value of the hex pair (hex digits are matched
/// case-insensitively, anything else counts as 0), `+` becomes a space,
/// and every other byte passes through unchanged. A `%` with fewer than
/// two bytes after it passes through literally. Output stops at `capacity`
/// bytes no matter how long the input is; running into the cap truncates,
/// it is not an error.
///
/// The result is not validated as UTF-8; callers treat it as opaque path
/// text.
pub fn percent_decode(src: &str, capacity: usize) -> Vec<u8> {
    let bytes = src.as_bytes();
    let mut out = Vec::with_capacity(bytes.len().min(capacity));
    let mut i = 0;

    while i < bytes.len() && out.len() < capacity {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                out.push(hex_value(bytes[i + 1]) * 16 + hex_value(bytes[i + 2]));
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    out
}
