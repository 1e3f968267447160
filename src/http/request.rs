/// Represents a parsed HTTP request line.
///
/// Only the request line carries information this server acts on; headers
/// and bodies in the incoming stream are ignored. All three fields are
/// non-empty when parsing succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method token, as received (e.g. "GET").
    pub method: String,
    /// The request target before percent-decoding (e.g. "/docs/a%20b.txt").
    pub raw_path: String,
    /// HTTP version token (typically "HTTP/1.1").
    pub version: String,
}

impl Request {
    /// The only method this server serves. Unknown methods are kept as
    /// opaque tokens so they can be answered rather than dropped at parse
    /// time.
    pub fn is_get(&self) -> bool {
        self.method == "GET"
    }
}
