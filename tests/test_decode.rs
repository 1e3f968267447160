use tinyhttp::content::decode::{MAX_DECODED_LEN, percent_decode};

#[test]
fn test_decode_hex_pairs() {
    assert_eq!(percent_decode("%41", 16), b"A");
    assert_eq!(percent_decode("%2Fetc", 16), b"/etc");
    assert_eq!(percent_decode("a%20b", 16), b"a b");
}

#[test]
fn test_decode_hex_case_insensitive() {
    assert_eq!(percent_decode("%2f", 16), percent_decode("%2F", 16));
    assert_eq!(percent_decode("%aB", 16), vec![0xab]);
}

#[test]
fn test_decode_invalid_hex_digits_become_nul() {
    // Non-hex digits contribute zero, so a fully invalid pair is NUL.
    assert_eq!(percent_decode("%zz", 16), vec![0]);
    // A half-valid pair keeps the valid nibble.
    assert_eq!(percent_decode("%4z", 16), vec![0x40]);
}

#[test]
fn test_decode_plus_is_space() {
    assert_eq!(percent_decode("a+b+c", 16), b"a b c");
}

#[test]
fn test_decode_passthrough() {
    assert_eq!(percent_decode("hello/world.txt", 64), b"hello/world.txt");
}

#[test]
fn test_decode_truncated_escape_passes_through() {
    // A % without two following bytes is literal, not an escape.
    assert_eq!(percent_decode("abc%", 16), b"abc%");
    assert_eq!(percent_decode("abc%4", 16), b"abc%4");
}

#[test]
fn test_decode_respects_capacity() {
    assert_eq!(percent_decode("abcdef", 3), b"abc");
    assert_eq!(percent_decode("%41%42%43", 2), b"AB");

    // Capacity holds no matter how long the input is.
    let long = "x".repeat(10 * MAX_DECODED_LEN);
    assert_eq!(percent_decode(&long, MAX_DECODED_LEN).len(), MAX_DECODED_LEN);
}

#[test]
fn test_decode_zero_capacity() {
    assert_eq!(percent_decode("anything", 0), b"");
}

#[test]
fn test_decode_round_trip() {
    // Encoding every byte as %XX and decoding reproduces the original.
    let original: Vec<u8> = (0u8..=255).collect();
    let encoded: String = original.iter().map(|b| format!("%{:02X}", b)).collect();

    assert_eq!(percent_decode(&encoded, 512), original);
}

#[test]
fn test_decode_round_trip_literal_bytes() {
    // Bytes outside % and + survive a literal pass untouched.
    let segment = "some file-name_(1).txt";
    assert_eq!(percent_decode(segment, 64), segment.as_bytes());
}
