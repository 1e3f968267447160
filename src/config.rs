use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE: &str = "tinyhttp.yaml";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ROOT: &str = "www";
const DEFAULT_MIME_FILE: &str = "mime.txt";
const DEFAULT_MAX_CONNECTIONS: usize = 256;

/// Server configuration, read once at startup.
///
/// Loaded from `tinyhttp.yaml` in the working directory (override the
/// location with the `TINYHTTP_CONFIG` environment variable). A missing or
/// malformed file is not an error; every field has a default.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// TCP port to listen on.
    pub port: u16,
    /// Directory tree the server is permitted to expose.
    pub root_dir: PathBuf,
    /// Optional `extension=content-type` override file for the MIME table.
    pub mime_file: Option<PathBuf>,
    /// Upper bound on concurrently handled connections.
    pub max_connections: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root_dir: PathBuf::from(DEFAULT_ROOT),
            mime_file: Some(PathBuf::from(DEFAULT_MIME_FILE)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let path = std::env::var("TINYHTTP_CONFIG")
            .unwrap_or_else(|_| CONFIG_FILE.to_string());

        let cfg = match std::fs::read_to_string(&path) {
            Ok(text) => match Self::from_yaml(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Ignoring malformed config {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        };

        cfg.validated()
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Replaces out-of-range values with their defaults. Ports 0 and 65535
    /// are not usable listen ports.
    pub fn validated(mut self) -> Self {
        if !(1..=65534).contains(&self.port) {
            tracing::warn!("Port {} out of range, using {}", self.port, DEFAULT_PORT);
            self.port = DEFAULT_PORT;
        }
        if self.max_connections == 0 {
            self.max_connections = DEFAULT_MAX_CONNECTIONS;
        }
        self
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
