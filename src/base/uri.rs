//! File path ↔ `file://` URI conversion.
//!
//! The engine names files by path; the protocol names documents by URI.
//! Only absolute paths have a URI, so [`path_to_uri`] is fallible.

use std::path::Path;

use url::Url;

/// Convert an absolute file path to a `file://` URI.
///
/// Returns `None` for empty or relative paths.
pub fn path_to_uri(path: &str) -> Option<String> {
    let url = Url::from_file_path(Path::new(path)).ok()?;
    Some(url.into())
}

/// Convert a `file://` URI back into a file path.
pub fn uri_to_path(uri: &str) -> Option<String> {
    let url = Url::parse(uri).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    let path = url.to_file_path().ok()?;
    path.to_str().map(str::to_owned)
}
