use std::path::{Path, PathBuf};

use crate::content::decode::{MAX_DECODED_LEN, percent_decode};

/// What the filesystem holds at a resolved location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    File,
    Directory,
    NotFound,
}

/// The filesystem location a request target resolves to.
///
/// `path` is always lexically within the server root; requests that would
/// escape it resolve to `NotFound` before the filesystem is consulted.
#[derive(Debug, Clone)]
pub struct ResolvedTarget {
    pub path: PathBuf,
    pub kind: TargetKind,
}

/// Turns decoded request targets into paths confined to the server root.
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a raw request target (the path token from the request
    /// line, starting with `/`) against the server root.
    ///
    /// The target is percent-decoded and then normalized segment by
    /// segment: empty segments and `.` collapse, `..` pops the previous
    /// segment, and a `..` with nothing left to pop is an escape attempt
    /// answered as `NotFound`. Only after the joined path passes the
    /// root-prefix check is the filesystem consulted.
    pub async fn resolve(&self, raw_path: &str) -> ResolvedTarget {
        let trimmed = raw_path.strip_prefix('/').unwrap_or(raw_path);
        let decoded = percent_decode(trimmed, MAX_DECODED_LEN);
        let decoded = String::from_utf8_lossy(&decoded);

        let mut segments: Vec<&str> = Vec::new();
        for segment in decoded.split('/') {
            match segment {
                "" | "." => continue,
                ".." => {
                    if segments.pop().is_none() {
                        return self.not_found(self.root.clone());
                    }
                }
                s => segments.push(s),
            }
        }

        let mut path = self.root.clone();
        for segment in &segments {
            path.push(segment);
        }

        if !path.starts_with(&self.root) {
            return self.not_found(path);
        }

        let kind = match tokio::fs::metadata(&path).await {
            Ok(md) if md.is_dir() => TargetKind::Directory,
            Ok(_) => TargetKind::File,
            Err(_) => TargetKind::NotFound,
        };

        ResolvedTarget { path, kind }
    }

    fn not_found(&self, path: PathBuf) -> ResolvedTarget {
        ResolvedTarget {
            path,
            kind: TargetKind::NotFound,
        }
    }
}
