//! Whole-file reads and all-or-nothing writes

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::Format;

/// Read a document of `format` as UTF-8.
///
/// Bytes that are not UTF-8 are a format error for `format`.
pub fn read_document(path: &Path, format: Format) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| Error::io(err, path))?;
    String::from_utf8(bytes).map_err(|err| {
        Error::format(format, format!("invalid utf-8: {}", err.utf8_error())).in_document(path)
    })
}

/// Replace `path` with `contents` atomically.
///
/// The bytes go to a temporary file next to the destination, which is then
/// renamed over it. On failure the destination is left untouched and the
/// temporary file is removed.
///
/// An existing destination keeps its permissions; a new one gets the same
/// mode a plain create would (`0o666` minus the umask on unix).
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut file = builder
        .tempfile_in(dir)
        .map_err(|err| Error::io(err, path))?;
    if let Ok(existing) = fs::metadata(path) {
        file.as_file()
            .set_permissions(existing.permissions())
            .map_err(|err| Error::io(err, path))?;
    }
    file.write_all(contents)
        .and_then(|()| file.flush())
        .map_err(|err| Error::io(err, path))?;
    debug!(temp = %file.path().display(), dest = %path.display(), "persisting output");
    file.persist(path).map_err(|err| Error::io(err.error, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_write_then_read() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.json");
        write_atomic(&path, b"{}\n")?;
        write_atomic(&path, b"[]\n")?;
        assert_eq!(read_document(&path, Format::Json)?, "[]\n");
        // only the destination remains; temp files were renamed away
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = read_document(Path::new("definitely/not/here.json"), Format::Json).err();
        assert_eq!(err.map(|e| e.kind()), Some(ErrorKind::NotFound));
    }

    #[test]
    fn test_write_into_missing_directory_fails_cleanly() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("out.json");
        assert!(write_atomic(&path, b"{}").is_err());
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_format_error() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("latin1.yaml");
        fs::write(&path, b"name: caf\xe9\n")?;

        let err = read_document(&path, Format::Yaml)
            .err()
            .ok_or("read should fail")?;
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(err.to_string().contains("invalid yaml"));
        assert!(err.to_string().contains("latin1.yaml"));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_mode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let plain = dir.path().join("plain.json");
        let atomic = dir.path().join("atomic.json");
        fs::write(&plain, b"{}")?;
        write_atomic(&atomic, b"{}")?;

        let mode = |path: &Path| fs::metadata(path).map(|m| m.permissions().mode() & 0o777);
        assert_eq!(mode(&atomic)?, mode(&plain)?);
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn test_existing_file_keeps_mode() -> std::result::Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.xml");
        fs::write(&path, b"<old/>")?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640))?;

        write_atomic(&path, b"<new/>")?;
        assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o640);
        assert_eq!(fs::read_to_string(&path)?, "<new/>");
        Ok(())
    }
}
