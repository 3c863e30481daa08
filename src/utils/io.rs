//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

fn file_error(path: &Path, operation: &str, err: std::io::Error) -> Error {
    Error::file_processing(path.display().to_string(), operation, err.to_string())
}

/// Read a whole file as UTF-8 text.
///
/// Missing files, permission problems and invalid UTF-8 all surface as
/// `file.processing_failed` with the I/O error text as the message.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| file_error(path, operation, e))
}

/// Overwrite a file in place.
pub fn write_file(path: &Path, content: &str, operation: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| file_error(path, operation, e))
}

/// Write content to file atomically (write to .tmp, then rename).
///
/// The rename is atomic on POSIX filesystems, so readers see either the old
/// content or the new content, never a partial write.
pub fn write_file_atomic(path: &Path, content: &str, operation: &str) -> Result<()> {
    let parent = path.parent().ok_or_else(|| {
        Error::file_processing(
            path.display().to_string(),
            operation,
            format!("Invalid path: {}", path.display()),
        )
    })?;

    let filename = path.file_name().ok_or_else(|| {
        Error::file_processing(
            path.display().to_string(),
            operation,
            format!("Invalid path: {}", path.display()),
        )
    })?;

    let tmp_path = parent.join(format!("{}.tmp", filename.to_string_lossy()));

    fs::write(&tmp_path, content)
        .map_err(|e| file_error(path, &format!("{} (write temp)", operation), e))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(file_error(path, &format!("{} (rename)", operation), e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.ts"), "read");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.processing_failed");
        assert_eq!(err.details["path"], "/nonexistent/path.ts");
    }

    #[test]
    fn read_file_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0x63, 0xff, 0xfe, 0x00]).unwrap();

        let err = read_file(temp.path(), "read").unwrap_err();
        assert_eq!(err.code.as_str(), "file.processing_failed");
    }

    #[test]
    fn write_file_succeeds_for_valid_path() {
        let temp = NamedTempFile::new().unwrap();
        write_file(temp.path(), "new content", "write").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let result = write_file(Path::new("/nonexistent/dir/file.ts"), "content", "write");
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "file.processing_failed");
    }

    #[test]
    fn write_file_atomic_replaces_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.ts");
        fs::write(&path, "old").unwrap();

        write_file_atomic(&path, "new", "write").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("a.ts.tmp").exists());
    }
}
