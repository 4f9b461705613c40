//! File inspection and validation

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::convert::{load, ConvertOptions};
use crate::error::{Error, Result};
use crate::format::Format;
use crate::value::Value;

/// Summary of one document on disk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInfo {
    pub format: Format,
    pub size_bytes: u64,
    /// Whether the file loads as `format`
    pub valid: bool,
    /// Entries in the top-level mapping
    pub top_level_keys: usize,
    /// See [`Value::node_count`]
    pub node_count: usize,
    /// Load failure when `valid` is false
    pub error: Option<String>,
}

/// Inspect the file at `path`.
///
/// Only an unsupported extension or an unreadable file is an error; a
/// document that fails to parse is reported with `valid == false`.
pub fn inspect(path: &Path) -> Result<FileInfo> {
    inspect_with_options(path, &ConvertOptions::default())
}

/// Same as [`inspect`] with explicit conversion options
pub fn inspect_with_options(path: &Path, options: &ConvertOptions) -> Result<FileInfo> {
    let format = Format::from_path(path)?;
    let size_bytes = fs::metadata(path)
        .map_err(|err| Error::io(err, path))?
        .len();

    let info = match load(path, format, options) {
        Ok(document) => FileInfo {
            format,
            size_bytes,
            valid: true,
            top_level_keys: document.len(),
            node_count: Value::Object(document).node_count(),
            error: None,
        },
        Err(err) => {
            warn!(path = %path.display(), error = %err, "document failed to load");
            FileInfo {
                format,
                size_bytes,
                valid: false,
                top_level_keys: 0,
                node_count: 0,
                error: Some(err.to_string()),
            }
        }
    };
    Ok(info)
}

/// True when `path` has a supported extension and loads as that format
pub fn validate(path: &Path) -> bool {
    Format::from_path(path)
        .and_then(|format| load(path, format, &ConvertOptions::default()))
        .is_ok()
}
