use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::Semaphore;
use tracing::info;

use crate::config::Config;
use crate::content::resolve::PathResolver;
use crate::http::connection::Connection;
use crate::http::mime::MimeTable;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let root = prepare_root(&cfg.root_dir)?;

    let mime = match &cfg.mime_file {
        Some(path) => MimeTable::load(path),
        None => MimeTable::builtin(),
    };

    let listener = TcpListener::bind(cfg.listen_addr())
        .await
        .with_context(|| format!("failed to bind {}", cfg.listen_addr()))?;

    info!("Listening on {}", cfg.listen_addr());
    info!("Serving directory: {}", root.display());

    serve(
        listener,
        Arc::new(PathResolver::new(root)),
        Arc::new(mime),
        cfg.max_connections,
    )
    .await
}

/// Accepts connections and hands each to its own task.
///
/// Accepts are gated on a semaphore so the number of in-flight connection
/// tasks never exceeds `max_connections`; each task carries its permit and
/// releases it on completion. Per-connection errors are logged and never
/// reach the loop.
pub async fn serve(
    listener: TcpListener,
    resolver: Arc<PathResolver>,
    mime: Arc<MimeTable>,
    max_connections: usize,
) -> anyhow::Result<()> {
    let permits = Arc::new(Semaphore::new(max_connections));

    loop {
        let permit = Arc::clone(&permits).acquire_owned().await?;
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let resolver = Arc::clone(&resolver);
        let mime = Arc::clone(&mime);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, resolver, mime);
            if let Err(e) = conn.run().await {
                tracing::debug!("Connection error from {}: {}", peer, e);
            }
            drop(permit);
            tracing::debug!("Connection from {} closed", peer);
        });
    }
}

/// Creates the server root if it does not exist yet and canonicalizes it.
/// Failure here is fatal; without a root there is nothing to serve.
fn prepare_root(root_dir: &Path) -> anyhow::Result<PathBuf> {
    if !root_dir.is_dir() {
        std::fs::create_dir_all(root_dir)
            .with_context(|| format!("failed to create root directory {}", root_dir.display()))?;
    }

    root_dir
        .canonicalize()
        .with_context(|| format!("failed to resolve root directory {}", root_dir.display()))
}
