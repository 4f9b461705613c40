//! Supported document formats and extension detection

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl Format {
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Xml];

    /// Lowercase format name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Xml => "xml",
        }
    }

    /// Canonical file extension, without the dot
    pub const fn extension(self) -> &'static str {
        self.name()
    }

    /// Detect the format of `path` from its extension.
    ///
    /// Content is never sniffed: a file without a known extension is
    /// rejected even if it would parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path).ok_or_else(|| {
            let ext = path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()))
                .unwrap_or_else(|| path.display().to_string());
            Error::unsupported(ext)
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "xml" => Ok(Self::Xml),
            _ => Err(Error::unsupported(s)),
        }
    }
}

/// Map a file extension (case-insensitive) onto a format
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Option<Format> {
    let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(Format::Json),
        "yaml" | "yml" => Some(Format::Yaml),
        "xml" => Some(Format::Xml),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_str() {
        assert_eq!("json".parse::<Format>().ok(), Some(Format::Json));
        assert_eq!("YML".parse::<Format>().ok(), Some(Format::Yaml));
        assert_eq!("xml".parse::<Format>().ok(), Some(Format::Xml));
        assert!("toml".parse::<Format>().is_err());
    }

    #[test]
    fn test_from_path_reports_extension() {
        let err = Format::from_path("notes.txt").err();
        assert_eq!(err.as_ref().map(Error::kind), Some(ErrorKind::UnsupportedFormat));
        assert_eq!(
            err.map(|e| e.to_string()),
            Some("unsupported format: .txt".to_string())
        );
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.to_string().parse::<Format>().ok(), Some(format));
        }
    }
}
