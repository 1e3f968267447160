use crate::http::request::Request;

// Protocol-given token bounds. Methods and versions are short fixed
// vocabularies; the target shares the decoded-path limit.
const MAX_METHOD_LEN: usize = 15;
const MAX_TARGET_LEN: usize = 1023;
const MAX_VERSION_LEN: usize = 15;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    MissingToken,
    TokenTooLong,
    InvalidEncoding,
}

/// Parses the request line out of the first chunk received on a connection.
///
/// Only the bytes up to the first CR or LF are considered; anything after
/// (headers, body) is ignored. The line must contain three non-empty
/// tokens separated by blanks or tabs, each within its length bound.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let line_end = buf
        .iter()
        .position(|&b| b == b'\r' || b == b'\n')
        .unwrap_or(buf.len());

    let line = std::str::from_utf8(&buf[..line_end])
        .map_err(|_| ParseError::InvalidEncoding)?;

    let mut tokens = line.split([' ', '\t']).filter(|t| !t.is_empty());

    let method = tokens.next().ok_or(ParseError::MissingToken)?;
    let target = tokens.next().ok_or(ParseError::MissingToken)?;
    let version = tokens.next().ok_or(ParseError::MissingToken)?;

    if method.len() > MAX_METHOD_LEN
        || target.len() > MAX_TARGET_LEN
        || version.len() > MAX_VERSION_LEN
    {
        return Err(ParseError::TokenTooLong);
    }

    Ok(Request {
        method: method.to_string(),
        raw_path: target.to_string(),
        version: version.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_request_line(req).unwrap();

        assert_eq!(parsed.method, "GET");
        assert_eq!(parsed.raw_path, "/");
        assert_eq!(parsed.version, "HTTP/1.1");
    }
}
