use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// A text file held in memory for one read-patch-write round trip.
///
/// A missing file reads as empty. Saving replaces the whole file at once:
/// existing files are rewritten through a sibling temp file and a rename,
/// so an interrupted write never leaves half a document behind.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    original: Option<String>,
    content: String,
}

impl SourceFile {
    /// Read a file, treating a missing file as empty.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let original = match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(Error::read(path, e)),
        };
        let content = original.clone().unwrap_or_default();
        tracing::debug!(path = %path.display(), exists = original.is_some(), "opened source file");

        Ok(Self {
            path,
            original,
            content,
        })
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current (possibly patched) content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the file existed when it was opened
    pub fn existed(&self) -> bool {
        self.original.is_some()
    }

    /// Replace the in-memory content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }

    /// Whether the content differs from what is on disk.
    pub fn is_changed(&self) -> bool {
        self.original.as_deref() != Some(self.content.as_str())
    }

    /// Write the content back if it changed.
    pub fn save(&self) -> Result<WriteResult> {
        if !self.is_changed() {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

/// Write a whole file, creating parent directories.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(parent).map_err(|e| Error::write(path, e))?;

    let existing = match fs::metadata(path) {
        Ok(meta) => Some(meta),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => return Err(Error::write(path, e)),
    };

    let Some(meta) = existing else {
        return fs::write(path, content).map_err(|e| Error::write(path, e));
    };

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::write(path, e))?;
    tmp.as_file()
        .set_permissions(meta.permissions())
        .map_err(|e| Error::write(path, e))?;
    tmp.persist(path).map_err(|e| Error::write(path, e.error))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// Content was already up to date
    Unchanged,
    /// File was skipped (already exists)
    Skipped,
}

/// A skeleton file, created only when nothing exists at its path yet
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file unless it already exists.
    pub fn write(&self) -> Result<WriteResult> {
        if self.exists() {
            return Ok(WriteResult::Skipped);
        }
        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::StorageAction;

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let file = SourceFile::open(temp.path().join("models.py")).unwrap();

        assert!(!file.existed());
        assert_eq!(file.content(), "");
    }

    #[test]
    fn test_open_directory_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let err = SourceFile::open(temp.path()).unwrap_err();

        assert!(matches!(*err, Error::Storage { .. }));
    }

    #[test]
    fn test_save_unchanged_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("admin.py");
        fs::write(&path, "from django.contrib import admin\n").unwrap();

        let file = SourceFile::open(&path).unwrap();
        assert_eq!(file.save().unwrap(), WriteResult::Unchanged);
    }

    #[test]
    fn test_save_replaces_whole_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("views.py");
        fs::write(&path, "old\n").unwrap();

        let mut file = SourceFile::open(&path).unwrap();
        file.set_content("new\n".to_string());

        assert!(file.is_changed());
        assert_eq!(file.save().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_save_empty_new_file_is_written() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pkg").join("__init__.py");

        let file = SourceFile::open(&path).unwrap();
        assert_eq!(file.save().unwrap(), WriteResult::Written);
        assert!(path.exists());
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("test.py");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_under_regular_file_is_storage_error() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("shop");
        fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("models.py");

        let err = write_file(&path, "class Order:\n    pass\n").unwrap_err();

        match *err {
            Error::Storage {
                action,
                path: failed,
                ..
            } => {
                assert_eq!(action, StorageAction::Write);
                assert_eq!(failed, path);
            }
            other => panic!("expected storage error, got {other:?}"),
        }
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn test_file_write_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apps.py");
        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "should not write").write().unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_file_write_creates_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shop").join("apps.py");

        let result = File::new(&path, "from django.apps import AppConfig\n").write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "from django.apps import AppConfig\n"
        );
    }
}
