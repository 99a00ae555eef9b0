//! Destination directory and file writes.

use crate::error::FetchError;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Creates `dir` and any missing parents. Succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(dir).map_err(|source| FetchError::Storage {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `data` to `path`, truncating any existing file. The handle is closed
/// before returning, on success and on failure.
pub fn write_file(path: &Path, data: &[u8]) -> Result<(), FetchError> {
    let storage_err = |source| FetchError::Storage {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(storage_err)?;
    file.write_all(data).map_err(storage_err)?;
    file.flush().map_err(storage_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn ensure_dir_creates_nested_and_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("Fetched_Images");
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
        ensure_dir(&dir).unwrap();
    }

    #[test]
    fn ensure_dir_fails_when_a_file_is_in_the_way() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("Fetched_Images");
        fs::write(&blocker, b"not a dir").unwrap();
        let err = ensure_dir(&blocker).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn write_file_truncates_existing() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("cat.png");
        write_file(&path, b"a much longer first payload").unwrap();
        write_file(&path, b"short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn write_file_into_missing_dir_is_storage_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("cat.png");
        match write_file(&path, b"x").unwrap_err() {
            FetchError::Storage { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Storage, got {other:?}"),
        }
    }
}
