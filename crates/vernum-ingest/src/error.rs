//! Error types for directory scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while listing a directory.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::DirectoryNotFound {
            path: PathBuf::from("/path/to/releases"),
        };
        assert_eq!(err.to_string(), "directory not found: /path/to/releases");
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;

        let err = IngestError::DirectoryRead {
            path: PathBuf::from("/tmp"),
            source: std::io::Error::other("denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to read directory /tmp"));
    }
}
