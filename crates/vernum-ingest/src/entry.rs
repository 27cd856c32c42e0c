//! Directory entries and the listing collaborator.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;

use crate::error::{IngestError, Result};

/// A file-system entry as reported by a [`DirectoryLister`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FileEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// Final path component, used for version parsing.
    pub name: String,
    /// Whether the entry is a directory.
    pub is_dir: bool,
    /// Size in bytes (0 when unknown).
    pub len: u64,
    /// Last modification time, when the platform reports one.
    pub modified: Option<SystemTime>,
}

impl FileEntry {
    /// Build an entry from a path alone, with empty metadata.
    #[must_use]
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            is_dir: false,
            len: 0,
            modified: None,
        }
    }
}

/// Supplies the entries contained in a directory.
///
/// Implemented for [`FsLister`] and for any
/// `Fn(&Path) -> Result<Vec<FileEntry>>` closure.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<FileEntry>>;
}

impl<F> DirectoryLister for F
where
    F: Fn(&Path) -> Result<Vec<FileEntry>>,
{
    fn list(&self, dir: &Path) -> Result<Vec<FileEntry>> {
        self(dir)
    }
}

/// Lists directories through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, dir: &Path) -> Result<Vec<FileEntry>> {
        if !dir.is_dir() {
            return Err(IngestError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut files = Vec::new();
        for entry_result in entries {
            let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e,
            })?;

            let metadata = entry.metadata().map_err(|e| IngestError::DirectoryRead {
                path: entry.path(),
                source: e,
            })?;

            files.push(FileEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: metadata.is_dir(),
                len: metadata.len(),
                modified: metadata.modified().ok(),
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_path() {
        let entry = FileEntry::from_path("/srv/releases/app-1.0.0.tar.gz");
        assert_eq!(entry.name, "app-1.0.0.tar.gz");
        assert!(!entry.is_dir);
    }

    #[test]
    fn test_fs_lister_reads_entries() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a-1.0.0.txt"), "hello").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let mut entries = FsLister.list(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "a-1.0.0.txt");
        assert_eq!(entries[0].len, 5);
        assert!(!entries[0].is_dir);
        assert!(entries[1].is_dir);
    }

    #[test]
    fn test_fs_lister_not_a_directory() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("file.txt");
        std::fs::write(&file_path, "data").unwrap();

        let result = FsLister.list(&file_path);
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }

    #[test]
    fn test_closure_lister() {
        let lister =
            |dir: &Path| -> Result<Vec<FileEntry>> { Ok(vec![FileEntry::from_path(dir.join("x.txt"))]) };
        let entries = lister.list(Path::new("/data")).unwrap();
        assert_eq!(entries[0].path, PathBuf::from("/data/x.txt"));
    }
}
