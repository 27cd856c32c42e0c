//! Version families: sibling files that share an original name.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use vernum_model::{VersionNumber, VersionedFilename};

use crate::entry::FileEntry;
use crate::options::CaseSensitivity;

/// A directory entry with its parsed filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionedFile {
    name: VersionedFilename,
    entry: FileEntry,
}

impl VersionedFile {
    #[must_use]
    pub fn new(entry: FileEntry) -> Self {
        Self {
            name: VersionedFilename::new(entry.name.as_str()),
            entry,
        }
    }

    #[must_use]
    pub fn name(&self) -> &VersionedFilename {
        &self.name
    }

    /// The underlying directory entry.
    #[must_use]
    pub fn entry(&self) -> &FileEntry {
        &self.entry
    }

    #[must_use]
    pub fn original_name(&self) -> &str {
        self.name.original_name()
    }

    #[must_use]
    pub fn version(&self) -> Option<&VersionNumber> {
        self.name.version()
    }

    #[must_use]
    pub fn is_original(&self) -> bool {
        self.name.is_original()
    }
}

impl PartialOrd for VersionedFile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionedFile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.entry.path.cmp(&other.entry.path))
    }
}

/// All versions of one logical file, newest first.
///
/// Every member has the same original name under the family's
/// [`CaseSensitivity`]. Families compare by original name.
#[derive(Debug, Clone)]
pub struct VersionedFiles {
    base_name: String,
    ext: String,
    original_name: String,
    case_sensitivity: CaseSensitivity,
    files: BTreeSet<VersionedFile>,
}

impl VersionedFiles {
    /// Start a family from its first member.
    #[must_use]
    pub fn new(seed: VersionedFile, case_sensitivity: CaseSensitivity) -> Self {
        let parts = seed.name().parts();
        let base_name = parts.base_name().to_string();
        let ext = parts.extensions().to_string();
        let original_name = seed.original_name().to_string();

        let mut files = BTreeSet::new();
        files.insert(seed);
        Self {
            base_name,
            ext,
            original_name,
            case_sensitivity,
            files,
        }
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extensions of the seed file (`tar.gz` for `app.tar.gz`).
    #[must_use]
    pub fn ext(&self) -> &str {
        &self.ext
    }

    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    #[must_use]
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Whether `file` belongs to this family.
    #[must_use]
    pub fn accepts(&self, file: &VersionedFile) -> bool {
        self.case_sensitivity
            .names_equal(&self.original_name, file.original_name())
    }

    /// Add `file` when its original name matches; otherwise leave the
    /// family untouched and return `false`.
    pub fn add_if_same_original(&mut self, file: VersionedFile) -> bool {
        if !self.accepts(&file) {
            return false;
        }
        self.files.insert(file);
        true
    }

    /// The newest member.
    #[must_use]
    pub fn latest(&self) -> Option<&VersionedFile> {
        self.files.first()
    }

    #[must_use]
    pub fn latest_version(&self) -> Option<&VersionNumber> {
        self.latest().and_then(VersionedFile::version)
    }

    #[must_use]
    pub fn latest_file(&self) -> Option<&FileEntry> {
        self.latest().map(VersionedFile::entry)
    }

    /// True when the newest member carries no version, i.e. the family
    /// only contains unversioned files.
    #[must_use]
    pub fn is_original(&self) -> bool {
        self.latest().is_some_and(VersionedFile::is_original)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Members, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &VersionedFile> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a VersionedFiles {
    type Item = &'a VersionedFile;
    type IntoIter = std::collections::btree_set::Iter<'a, VersionedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl PartialEq for VersionedFiles {
    fn eq(&self, other: &Self) -> bool {
        self.original_name == other.original_name
    }
}

impl Eq for VersionedFiles {}

impl PartialOrd for VersionedFiles {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionedFiles {
    fn cmp(&self, other: &Self) -> Ordering {
        self.original_name.cmp(&other.original_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> VersionedFile {
        VersionedFile::new(FileEntry::from_path(format!("/data/{name}")))
    }

    fn family(seed: &str) -> VersionedFiles {
        VersionedFiles::new(file(seed), CaseSensitivity::Sensitive)
    }

    #[test]
    fn test_seed_fields() {
        let family = family("app-1.2.0.tar.gz");
        assert_eq!(family.base_name(), "app");
        assert_eq!(family.ext(), "tar.gz");
        assert_eq!(family.original_name(), "app.tar.gz");
        assert_eq!(family.len(), 1);
    }

    #[test]
    fn test_add_same_original() {
        let mut family = family("doc-1.0.0.txt");
        assert!(family.add_if_same_original(file("doc-1.1.0.txt")));
        assert!(family.add_if_same_original(file("doc.txt")));
        assert_eq!(family.len(), 3);
        assert_eq!(family.latest().unwrap().name().filename(), "doc-1.1.0.txt");
        assert_eq!(
            family.latest_version(),
            Some(&VersionNumber::with_revision(1, 1, 0))
        );
        assert_eq!(
            family.latest_file().unwrap().path,
            std::path::PathBuf::from("/data/doc-1.1.0.txt")
        );
    }

    #[test]
    fn test_rejects_other_original() {
        let mut family = family("doc-1.0.0.txt");
        assert!(!family.add_if_same_original(file("doc-1.1.0.md")));
        assert!(!family.add_if_same_original(file("DOC-1.1.0.txt")));
        assert_eq!(family.len(), 1);
    }

    #[test]
    fn test_case_insensitive_family() {
        let mut family = VersionedFiles::new(file("doc-1.0.0.txt"), CaseSensitivity::Insensitive);
        assert!(family.add_if_same_original(file("DOC-2.0.0.TXT")));
        assert!(!family.add_if_same_original(file("doc-3.0.0.md")));
        assert_eq!(family.latest().unwrap().name().filename(), "DOC-2.0.0.TXT");
    }

    #[test]
    fn test_is_original() {
        let mut family = family("doc.txt");
        assert!(family.is_original());
        assert_eq!(family.latest_version(), None);
        family.add_if_same_original(file("doc-0.1.0.txt"));
        assert!(!family.is_original());
    }

    #[test]
    fn test_iter_newest_first() {
        let mut family = family("doc-1.0.0.txt");
        for name in ["doc.txt", "doc-2.0.0.txt", "doc-1.5.0.txt"] {
            family.add_if_same_original(file(name));
        }
        let names: Vec<&str> = family.iter().map(|f| f.name().filename()).collect();
        assert_eq!(
            names,
            ["doc-2.0.0.txt", "doc-1.5.0.txt", "doc-1.0.0.txt", "doc.txt"]
        );
    }

    #[test]
    fn test_families_order_by_original_name() {
        let a = family("alpha-1.0.0.txt");
        let b = family("beta.txt");
        assert!(a < b);
        assert_eq!(family("alpha.txt"), a);
    }
}
