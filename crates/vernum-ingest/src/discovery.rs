//! Directory scanning and grouping into version families.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use crate::entry::{DirectoryLister, FileEntry, FsLister};
use crate::error::Result;
use crate::family::{VersionedFile, VersionedFiles};
use crate::options::{CaseSensitivity, GroupingOptions};

/// Version families keyed by original name.
pub type FamilyMap = BTreeMap<String, VersionedFiles>;

/// Group the entries of `dir` into version families.
pub fn list_directory_grouped<L>(dir: &Path, lister: &L, options: &GroupingOptions) -> Result<FamilyMap>
where
    L: DirectoryLister + ?Sized,
{
    list_directory_grouped_with(dir, lister, options, |_, _| true)
}

/// Group the entries of `dir`, keeping only those whose original name is
/// accepted by `filter(dir, original_name)`.
pub fn list_directory_grouped_with<L, F>(
    dir: &Path,
    lister: &L,
    options: &GroupingOptions,
    filter: F,
) -> Result<FamilyMap>
where
    L: DirectoryLister + ?Sized,
    F: Fn(&Path, &str) -> bool,
{
    let entries = lister.list(dir)?;
    let entry_count = entries.len();

    let files = entries.into_iter().map(VersionedFile::new).filter(|file| {
        let keep = filter(dir, file.original_name());
        if !keep {
            debug!(
                filename = %file.name(),
                original_name = file.original_name(),
                "entry filtered out"
            );
        }
        keep
    });
    let families = group_files(files, options);

    info!(
        dir = %dir.display(),
        entry_count,
        family_count = families.len(),
        "directory grouped"
    );
    Ok(families)
}

/// Group `dir` from the file system with the platform's default options.
pub fn list_dir(dir: &Path) -> Result<FamilyMap> {
    list_directory_grouped(dir, &FsLister, &GroupingOptions::default())
}

/// Group already-parsed files into families.
///
/// Files are processed in filename order, so the result does not depend on
/// the order of the input.
pub fn group_files<I>(files: I, options: &GroupingOptions) -> FamilyMap
where
    I: IntoIterator<Item = VersionedFile>,
{
    let mut files: Vec<VersionedFile> = files.into_iter().collect();
    files.sort_by(|a, b| {
        a.entry()
            .name
            .cmp(&b.entry().name)
            .then_with(|| a.entry().path.cmp(&b.entry().path))
    });

    let mut families = FamilyMap::new();
    for file in files {
        add_to_families(&mut families, file, options.case_sensitivity);
    }
    families
}

/// Group bare entries, e.g. from a listing that was fetched elsewhere.
pub fn group_entries<I>(entries: I, options: &GroupingOptions) -> FamilyMap
where
    I: IntoIterator<Item = FileEntry>,
{
    group_files(entries.into_iter().map(VersionedFile::new), options)
}

fn add_to_families(families: &mut FamilyMap, file: VersionedFile, case_sensitivity: CaseSensitivity) {
    let key = find_family(families, &file, case_sensitivity);

    if let Some(family) = key.and_then(|key| families.get_mut(&key)) {
        debug!(
            filename = %file.name(),
            family = family.original_name(),
            "entry joined family"
        );
        family.add_if_same_original(file);
        return;
    }

    debug!(
        filename = %file.name(),
        original_name = file.original_name(),
        "new family"
    );
    let original_name = file.original_name().to_string();
    families.insert(original_name, VersionedFiles::new(file, case_sensitivity));
}

/// Key of the family that accepts `file`, if any.
fn find_family(
    families: &FamilyMap,
    file: &VersionedFile,
    case_sensitivity: CaseSensitivity,
) -> Option<String> {
    if let Some(family) = families.get(file.original_name())
        && family.accepts(file)
    {
        return Some(file.original_name().to_string());
    }
    if case_sensitivity == CaseSensitivity::Sensitive {
        return None;
    }
    families
        .iter()
        .find(|(_, family)| family.accepts(file))
        .map(|(key, _)| key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entries(names: &[&str]) -> Vec<FileEntry> {
        names
            .iter()
            .map(|name| FileEntry::from_path(PathBuf::from("/data").join(name)))
            .collect()
    }

    fn sensitive() -> GroupingOptions {
        GroupingOptions::new().with_case_sensitivity(CaseSensitivity::Sensitive)
    }

    #[test]
    fn test_group_single_family() {
        let families = group_entries(
            entries(&["doc-1.0.0.txt", "doc-1.1.0.txt", "doc.txt"]),
            &sensitive(),
        );
        assert_eq!(families.len(), 1);
        let doc = families.get("doc.txt").unwrap();
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.latest().unwrap().name().filename(), "doc-1.1.0.txt");
    }

    #[test]
    fn test_group_multiple_families() {
        let families = group_entries(
            entries(&["a-1.0.0.txt", "b-2.0.0.txt", "a-0.9.0.txt", "a.md", "README"]),
            &sensitive(),
        );
        let keys: Vec<&str> = families.keys().map(String::as_str).collect();
        assert_eq!(keys, ["README", "a.md", "a.txt", "b.txt"]);
        assert_eq!(families["a.txt"].len(), 2);
        assert!(families["README"].is_original());
    }

    #[test]
    fn test_case_sensitive_keeps_case_variants_apart() {
        let families = group_entries(entries(&["doc-1.0.0.txt", "DOC-2.0.0.txt"]), &sensitive());
        assert_eq!(families.len(), 2);
    }

    #[test]
    fn test_case_insensitive_merges_case_variants() {
        let options = GroupingOptions::new().with_case_sensitivity(CaseSensitivity::Insensitive);
        let families = group_entries(entries(&["doc-1.0.0.txt", "DOC-2.0.0.txt"]), &options);
        assert_eq!(families.len(), 1);
        // "DOC-2.0.0.txt" sorts first by name, so it seeds the family key
        let family = families.get("DOC.txt").unwrap();
        assert_eq!(family.len(), 2);
        assert_eq!(family.latest().unwrap().name().filename(), "DOC-2.0.0.txt");
    }

    #[test]
    fn test_empty_input() {
        let families = group_entries(Vec::new(), &sensitive());
        assert!(families.is_empty());
    }

    #[test]
    fn test_filter_receives_original_name() {
        let lister = |_: &Path| -> Result<Vec<FileEntry>> {
            Ok(entries(&["keep-1.0.0.txt", "drop-1.0.0.txt", "keep.txt"]))
        };
        let families = list_directory_grouped_with(
            Path::new("/data"),
            &lister,
            &sensitive(),
            |dir, original| {
                assert_eq!(dir, Path::new("/data"));
                original.starts_with("keep")
            },
        )
        .unwrap();
        assert_eq!(families.len(), 1);
        assert_eq!(families["keep.txt"].len(), 2);
    }
}
