//! Filenames ranked by the version they carry.

use std::cmp::Ordering;
use std::fmt;

use crate::filename::FilenameParts;
use crate::version::VersionNumber;

/// A filename together with its decomposition and original name.
///
/// Sorting puts versioned names first, newest version first, followed by
/// unversioned names in original-name order. Names that tie on all of that
/// are ordered by the raw filename, so distinct filenames never compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionedFilename {
    parts: FilenameParts,
    original_name: String,
}

impl VersionedFilename {
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        let parts = FilenameParts::new(filename);
        let original_name = parts.original_name();
        Self {
            parts,
            original_name,
        }
    }

    #[must_use]
    pub fn parts(&self) -> &FilenameParts {
        &self.parts
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        self.parts.filename()
    }

    /// The name shared by every version of this file.
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    #[must_use]
    pub fn version(&self) -> Option<&VersionNumber> {
        self.parts.version()
    }

    /// True when the filename carries no version segment.
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.parts.version().is_none()
    }

    /// Whether both names belong to the same version family.
    #[must_use]
    pub fn is_same_family(&self, other: &Self) -> bool {
        self.original_name == other.original_name
    }
}

impl PartialOrd for VersionedFilename {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionedFilename {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank = match (self.version(), other.version()) {
            // Newest first
            (Some(a), Some(b)) => b.cmp(a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.original_name.cmp(&other.original_name),
        };
        rank.then_with(|| self.filename().cmp(other.filename()))
    }
}

impl fmt::Display for VersionedFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_name_strips_version() {
        let name = VersionedFilename::new("doc-1.4.0.txt");
        assert_eq!(name.original_name(), "doc.txt");
        assert!(!name.is_original());

        let name = VersionedFilename::new("doc.txt");
        assert_eq!(name.original_name(), "doc.txt");
        assert!(name.is_original());
    }

    #[test]
    fn test_same_family() {
        let a = VersionedFilename::new("doc-1.0.0.txt");
        let b = VersionedFilename::new("doc-2.0.0.txt");
        let c = VersionedFilename::new("doc-2.0.0.md");
        assert!(a.is_same_family(&b));
        assert!(!a.is_same_family(&c));
    }

    #[test]
    fn test_newest_version_sorts_first() {
        let mut names = vec![
            VersionedFilename::new("doc-1.0.0.txt"),
            VersionedFilename::new("doc-1.10.0.txt"),
            VersionedFilename::new("doc-1.2.0.txt"),
        ];
        names.sort();
        let order: Vec<&str> = names.iter().map(VersionedFilename::filename).collect();
        assert_eq!(order, ["doc-1.10.0.txt", "doc-1.2.0.txt", "doc-1.0.0.txt"]);
    }

    #[test]
    fn test_unversioned_sorts_after_versioned() {
        let original = VersionedFilename::new("doc.txt");
        let versioned = VersionedFilename::new("doc-0.0.1.txt");
        assert_eq!(versioned.cmp(&original), Ordering::Less);
        assert_eq!(original.cmp(&versioned), Ordering::Greater);
    }

    #[test]
    fn test_unversioned_compare_by_original_name() {
        let a = VersionedFilename::new("alpha.txt");
        let b = VersionedFilename::new("beta.txt");
        assert!(a < b);
    }

    #[test]
    fn test_equal_versions_tie_break_on_filename() {
        let a = VersionedFilename::new("DOC-1.0.0.txt");
        let b = VersionedFilename::new("doc-1.0.0.txt");
        assert_ne!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }
}
