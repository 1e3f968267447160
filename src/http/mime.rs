use std::collections::HashMap;
use std::path::Path;

/// Content type served when no table entry matches.
pub const FALLBACK_TYPE: &str = "application/octet-stream";

// Extensions the server knows without an override file.
static BUILTIN: &[(&str, &str)] = &[
    ("txt", "text/plain; charset=utf-8"),
    ("html", "text/html; charset=utf-8"),
    ("htm", "text/html; charset=utf-8"),
    ("css", "text/css; charset=utf-8"),
    ("js", "text/javascript; charset=utf-8"),
    ("json", "application/json; charset=utf-8"),
    ("xml", "text/xml; charset=utf-8"),
    ("csv", "text/csv; charset=utf-8"),
    ("md", "text/markdown; charset=utf-8"),
    ("log", "text/plain; charset=utf-8"),
    ("ini", "text/plain; charset=utf-8"),
    ("cfg", "text/plain; charset=utf-8"),
    ("conf", "text/plain; charset=utf-8"),
    ("c", "text/plain; charset=utf-8"),
    ("cpp", "text/plain; charset=utf-8"),
    ("h", "text/plain; charset=utf-8"),
    ("hpp", "text/plain; charset=utf-8"),
    ("py", "text/plain; charset=utf-8"),
    ("java", "text/plain; charset=utf-8"),
    ("php", "text/plain; charset=utf-8"),
    ("rb", "text/plain; charset=utf-8"),
    ("go", "text/plain; charset=utf-8"),
    ("rs", "text/plain; charset=utf-8"),
    ("sh", "text/plain; charset=utf-8"),
    ("bat", "text/plain; charset=utf-8"),
    ("ps1", "text/plain; charset=utf-8"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("ico", "image/x-icon"),
    ("webp", "image/webp"),
    ("mp3", "audio/mpeg"),
    ("wav", "audio/wav"),
    ("mp4", "video/mp4"),
    ("avi", "video/x-msvideo"),
    ("mov", "video/quicktime"),
    ("zip", "application/zip"),
    ("rar", "application/x-rar-compressed"),
    ("7z", "application/x-7z-compressed"),
    ("tar", "application/x-tar"),
    ("gz", "application/gzip"),
    ("pdf", "application/pdf"),
    ("doc", "application/msword"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
    ("xls", "application/vnd.ms-excel"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
];

/// Maps file extensions to content-type strings.
///
/// Built once at startup and shared read-only for the process lifetime.
/// Keys are case-insensitive; lookups for unknown or absent extensions
/// return [`FALLBACK_TYPE`].
#[derive(Debug, Clone)]
pub struct MimeTable {
    types: HashMap<String, String>,
}

impl MimeTable {
    /// The built-in table alone.
    pub fn builtin() -> Self {
        let types = BUILTIN
            .iter()
            .map(|&(ext, ty)| (ext.to_string(), ty.to_string()))
            .collect();
        Self { types }
    }

    /// The built-in table extended by an `extension=content-type` override
    /// file. A missing or unreadable file is not an error; the built-in
    /// table serves unchanged.
    pub fn load(path: &Path) -> Self {
        let mut table = Self::builtin();

        match std::fs::read_to_string(path) {
            Ok(text) => {
                let added = table.apply_overrides(&text);
                tracing::info!(
                    "Loaded {} MIME overrides from {}",
                    added,
                    path.display()
                );
            }
            Err(e) => {
                tracing::info!(
                    "No MIME override file at {} ({}), using built-in table",
                    path.display(),
                    e
                );
            }
        }

        table
    }

    fn apply_overrides(&mut self, text: &str) -> usize {
        let mut added = 0;

        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            let Some((ext, content_type)) = line.split_once('=') else {
                continue;
            };
            let ext = ext.trim();
            let content_type = content_type.trim();
            if ext.is_empty() || content_type.is_empty() {
                continue;
            }
            self.types
                .insert(ext.to_ascii_lowercase(), content_type.to_string());
            added += 1;
        }

        added
    }

    /// Returns the content type for a file name.
    ///
    /// The lookup key is the substring after the last `.`, matched
    /// case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttp::http::mime::MimeTable;
    /// let table = MimeTable::builtin();
    /// assert_eq!(table.content_type("index.html"), "text/html; charset=utf-8");
    /// assert_eq!(table.content_type("noext"), "application/octet-stream");
    /// ```
    pub fn content_type(&self, file_name: &str) -> &str {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return FALLBACK_TYPE;
        };

        self.types
            .get(&ext.to_ascii_lowercase())
            .map(String::as_str)
            .unwrap_or(FALLBACK_TYPE)
    }
}
