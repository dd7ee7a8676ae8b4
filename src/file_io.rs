//! Whole-file reads and writes relative to a base directory

use crate::error::{NumsortError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes files, resolving relative paths against `base_dir`.
#[derive(Debug, Clone)]
pub struct FileIo {
    base_dir: PathBuf,
}

impl FileIo {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Uses the directory the running executable lives in.
    ///
    /// Falls back to the current directory when the executable path
    /// cannot be determined.
    pub fn from_executable_dir() -> Self {
        let base_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Absolute paths are returned unchanged
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn read_to_string(&self, path: impl AsRef<Path>) -> Result<String> {
        let full_path = self.resolve(path);
        debug!("reading {}", full_path.display());
        fs::read_to_string(&full_path).map_err(|source| NumsortError::Read {
            path: full_path,
            source,
        })
    }

    /// Replaces the file's contents. Nothing is appended to `contents`.
    pub fn write(&self, path: impl AsRef<Path>, contents: &str) -> Result<PathBuf> {
        let full_path = self.resolve(path);
        debug!("writing {} bytes to {}", contents.len(), full_path.display());
        match fs::write(&full_path, contents) {
            Ok(()) => Ok(full_path),
            Err(source) => Err(NumsortError::Write {
                path: full_path,
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_relative_path() {
        let io = FileIo::new("/srv/numsort");
        assert_eq!(
            io.resolve("input.txt"),
            PathBuf::from("/srv/numsort/input.txt")
        );
    }

    #[test]
    fn test_resolve_absolute_path_unchanged() {
        let io = FileIo::new("/srv/numsort");
        assert_eq!(io.resolve("/tmp/data.txt"), PathBuf::from("/tmp/data.txt"));
    }

    #[test]
    fn test_read_from_base_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("input.txt"), "5, 3").unwrap();

        let io = FileIo::new(dir.path());
        assert_eq!(io.read_to_string("input.txt").unwrap(), "5, 3");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let io = FileIo::new(dir.path());

        let err = io.read_to_string("missing.txt").unwrap_err();
        match err {
            NumsortError::Read { path, .. } => assert_eq!(path, dir.path().join("missing.txt")),
            other => panic!("expected read error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("output.txt");
        fs::write(&target, "old contents that are longer").unwrap();

        let io = FileIo::new(dir.path());
        let written = io.write("output.txt", "1, 2").unwrap();

        assert_eq!(written, target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "1, 2");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let io = FileIo::new(dir.path().join("does-not-exist"));

        let err = io.write("output.txt", "1").unwrap_err();
        assert!(matches!(err, NumsortError::Write { .. }));
        assert!(err.to_string().starts_with("Error writing output file"));
    }

    #[test]
    fn test_executable_dir_is_a_directory() {
        let io = FileIo::from_executable_dir();
        assert!(io.base_dir().is_dir());
    }
}
