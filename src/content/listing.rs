use std::io;
use std::path::Path;

const HTML_START: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
\t<meta charset=\"utf-8\">\n\
\t<title>Directory Listing</title>\n\
\t<style>\n\
\t\tbody { margin: 40px; }\n\
\t\th1 { color: #333; }\n\
\t\ta { text-decoration: none; color: #0066cc; }\n\
\t\ta:hover { text-decoration: underline; }\n\
\t\t.file { margin: 5px 0; }\n\
\t\t.dir { font-weight: bold; }\n\
\t</style>\n\
</head>\n\
<body>\n\
\t<h1>Directory Listing</h1>\n\
\t<hr>\n";

const HTML_END: &str = "\t<hr>\n\
\t<p><em>tinyhttp</em></p>\n\
</body>\n\
</html>\n";

const PARENT_LINK: &str =
    "\t<div class=\"file\"><a href=\"../\">../</a> (Parent Directory)</div>\n";

/// One directory member, as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Enumerates a directory's members in filesystem order.
///
/// The self and parent pseudo-entries are never yielded; ordering is
/// whatever the filesystem returns, not sorted.
pub async fn collect_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut read_dir = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        let is_dir = entry
            .file_type()
            .await
            .map(|t| t.is_dir())
            .unwrap_or(false);

        entries.push(ListingEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
        });
    }

    Ok(entries)
}

/// Renders the listing HTML document.
///
/// The parent-directory link is included except when the listed directory
/// is the server root. Directory entries link with a trailing slash so
/// relative navigation keeps working.
pub fn render(entries: &[ListingEntry], include_parent_link: bool) -> String {
    let mut html =
        String::with_capacity(HTML_START.len() + HTML_END.len() + entries.len() * 64);

    html.push_str(HTML_START);

    if include_parent_link {
        html.push_str(PARENT_LINK);
    }

    for entry in entries {
        if entry.is_dir {
            html.push_str(&format!(
                "\t<div class=\"dir\"><a href=\"{0}/\">{0}/</a></div>\n",
                entry.name
            ));
        } else {
            html.push_str(&format!(
                "\t<div class=\"file\"><a href=\"{0}\">{0}</a></div>\n",
                entry.name
            ));
        }
    }

    html.push_str(HTML_END);
    html
}
