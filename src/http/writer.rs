use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub async fn write_to_stream(
        &mut self,
        stream: &mut TcpStream,
    ) -> anyhow::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream
                .write(&self.buffer[self.written..])
                .await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Streams an open file to the client in `buf`-sized chunks.
///
/// The response header block must already have been written; the declared
/// Content-Length is the file size at open time.
pub async fn stream_file(
    stream: &mut TcpStream,
    file: &mut File,
    buf: &mut [u8],
) -> anyhow::Result<u64> {
    let mut total = 0u64;

    loop {
        let n = file.read(buf).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buf[..n]).await?;
        total += n as u64;
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::{ResponseBuilder, StatusCode};

    #[test]
    fn serialize_framing() {
        let resp = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", "text/plain")
            .body(b"hi".to_vec())
            .build();

        let bytes = serialize_response(&resp);
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        // Header block ends with an empty CRLF line, body follows.
        let (head, body) = text.split_once("\r\n\r\n").unwrap();
        assert_eq!(body, "hi");
        assert!(head.contains("Content-Type: text/plain"));
        assert!(head.contains("Content-Length: 2"));
        assert!(head.contains("Connection: close"));
    }
}
