//! Error types for zconv

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::format::Format;

/// Label used for documents that did not come from a file
pub const INLINE_DOCUMENT: &str = "<input>";

/// Error kind for matching without destructuring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Format,
    UnsupportedFormat,
    Conversion,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "not found",
            Self::PermissionDenied => "permission denied",
            Self::Format => "format error",
            Self::UnsupportedFormat => "unsupported format",
            Self::Conversion => "conversion error",
        };
        f.write_str(name)
    }
}

/// Main error type for zconv
#[derive(Error, Debug)]
pub enum Error {
    /// Source file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Read or write was denied
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// Source text does not parse as the detected format
    #[error("invalid {format} in {document}: {message}")]
    Format {
        format: Format,
        document: String,
        message: String,
    },

    /// Extension or requested format is not json, yaml or xml
    #[error("unsupported format: {name}")]
    UnsupportedFormat { name: String },

    /// Any other failure while moving between a document and a value
    #[error("conversion failed for {document}: {source}")]
    Conversion {
        document: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Copyable discriminant of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            Self::Format { .. } => ErrorKind::Format,
            Self::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Self::Conversion { .. } => ErrorKind::Conversion,
        }
    }

    /// Parse failure in an in-memory document
    pub fn format(format: Format, message: impl fmt::Display) -> Self {
        Self::Format {
            format,
            document: INLINE_DOCUMENT.to_string(),
            message: message.to_string(),
        }
    }

    /// Unknown format name or file extension
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Wrap any other failure as a conversion error
    pub fn conversion<E>(source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Conversion {
            document: INLINE_DOCUMENT.to_string(),
            source: source.into(),
        }
    }

    /// Map an I/O failure on `path` onto the taxonomy
    pub fn io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Conversion {
                document: path.display().to_string(),
                source: Box::new(err),
            },
        }
    }

    /// Attach the offending path to format and conversion errors
    #[must_use]
    pub fn in_document(self, path: &Path) -> Self {
        match self {
            Self::Format {
                format, message, ..
            } => Self::Format {
                format,
                document: path.display().to_string(),
                message,
            },
            Self::Conversion { source, .. } => Self::Conversion {
                document: path.display().to_string(),
                source,
            },
            other => other,
        }
    }
}

/// Result type alias for zconv
pub type Result<T> = std::result::Result<T, Error>;
