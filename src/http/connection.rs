use std::path::Path;
use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::content::listing;
use crate::content::resolve::{PathResolver, TargetKind};
use crate::http::mime::MimeTable;
use crate::http::parser::parse_request_line;
use crate::http::request::Request;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::{ResponseWriter, stream_file};

const REQUEST_BUFFER_SIZE: usize = 8192;
const TRANSFER_BUFFER_SIZE: usize = 8192;

pub struct Connection {
    stream: TcpStream,
    request_buf: BytesMut,
    transfer_buf: Vec<u8>,
    state: ConnectionState,
    resolver: Arc<PathResolver>,
    mime: Arc<MimeTable>,
}

pub enum ConnectionState {
    Reading,
    Serving(Request),
    Rejected(Rejection),
    Closed,
}

pub enum Rejection {
    Malformed,
    UnsupportedMethod,
}

impl Connection {
    pub fn new(stream: TcpStream, resolver: Arc<PathResolver>, mime: Arc<MimeTable>) -> Self {
        Self {
            stream,
            request_buf: BytesMut::with_capacity(REQUEST_BUFFER_SIZE),
            transfer_buf: vec![0u8; TRANSFER_BUFFER_SIZE],
            state: ConnectionState::Reading,
            resolver,
            mime,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let result = self.handle().await;

        // Send side is shut down on every terminal path, even after a
        // failed write.
        let _ = self.stream.shutdown().await;

        result
    }

    async fn handle(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = self.read_request().await;
                }

                ConnectionState::Serving(req) => {
                    self.serve(&req).await?;
                }

                ConnectionState::Rejected(rejection) => {
                    self.reject(rejection).await?;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// One receive call decides the connection's fate: zero bytes or a
    /// receive error close it without a response, anything else goes to
    /// the parser. There is no second read for a request line split
    /// across packets.
    async fn read_request(&mut self) -> ConnectionState {
        match self.stream.read_buf(&mut self.request_buf).await {
            Ok(0) | Err(_) => ConnectionState::Closed,
            Ok(_) => match parse_request_line(&self.request_buf) {
                Ok(req) => {
                    tracing::debug!(method = %req.method, path = %req.raw_path, "request");
                    if req.is_get() {
                        ConnectionState::Serving(req)
                    } else {
                        ConnectionState::Rejected(Rejection::UnsupportedMethod)
                    }
                }
                Err(e) => {
                    tracing::debug!(error = ?e, "malformed request line");
                    ConnectionState::Rejected(Rejection::Malformed)
                }
            },
        }
    }

    async fn serve(&mut self, req: &Request) -> anyhow::Result<()> {
        let target = self.resolver.resolve(&req.raw_path).await;
        tracing::debug!(
            path = %req.raw_path,
            resolved = %target.path.display(),
            kind = ?target.kind,
            "resolved request target"
        );

        match target.kind {
            TargetKind::NotFound => self.write_response(&Response::not_found()).await,
            TargetKind::File => self.send_file(&target.path).await,
            TargetKind::Directory => self.send_listing(&target.path).await,
        }
    }

    async fn reject(&mut self, rejection: Rejection) -> anyhow::Result<()> {
        let response = match rejection {
            Rejection::Malformed => Response::not_found(),
            Rejection::UnsupportedMethod => Response::teapot(),
        };
        self.write_response(&response).await
    }

    async fn send_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let mut file = match tokio::fs::File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "file open failed");
                return self.write_response(&Response::not_found()).await;
            }
        };

        let len = file.metadata().await?.len();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let header = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", self.mime.content_type(&file_name))
            .header("Content-Length", len.to_string())
            .build();

        self.write_response(&header).await?;
        stream_file(&mut self.stream, &mut file, &mut self.transfer_buf).await?;

        Ok(())
    }

    async fn send_listing(&mut self, path: &Path) -> anyhow::Result<()> {
        let entries = match listing::collect_entries(path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "listing failed");
                return self.write_response(&Response::not_found()).await;
            }
        };

        let include_parent_link = path != self.resolver.root();
        let html = listing::render(&entries, include_parent_link);

        self.write_response(&Response::html(html)).await
    }

    async fn write_response(&mut self, response: &Response) -> anyhow::Result<()> {
        ResponseWriter::new(response)
            .write_to_stream(&mut self.stream)
            .await
    }
}
