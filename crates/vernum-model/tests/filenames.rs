//! Tests for filename decomposition through the public API.

use vernum_model::{FilenameParts, VersionError, VersionNumber, VersionedFilename};

#[test]
fn test_decomposes_versioned_report() {
    let parts = FilenameParts::new("report-2.3.1.csv");
    assert_eq!(parts.filename(), "report-2.3.1.csv");
    assert_eq!(parts.base_name(), "report");
    assert_eq!(parts.version().map(ToString::to_string).as_deref(), Some("2.3.1"));
    assert_eq!(parts.extensions(), "csv");
    assert_eq!(parts.extension(), "csv");
}

#[test]
fn test_decomposes_plain_archive() {
    let parts = FilenameParts::new("archive.tar.gz");
    assert_eq!(parts.base_name(), "archive");
    assert_eq!(parts.extensions(), "tar.gz");
    assert_eq!(parts.extension(), "gz");
    assert_eq!(parts.version(), None);
}

#[test]
fn test_decomposes_name_without_extension() {
    let parts = FilenameParts::new("noext");
    assert_eq!(parts.base_name(), "noext");
    assert_eq!(parts.extensions(), "");
    assert_eq!(parts.version(), None);
}

#[test]
fn test_versioned_and_plain_share_original_name() {
    let cases = [
        ("report-2.3.1.csv", "report.csv"),
        ("bundle-0.1.0.tar.gz", "bundle.tar.gz"),
        ("my.app-3.0.0.cfg", "my.app.cfg"),
    ];
    for (versioned, plain) in cases {
        let a = VersionedFilename::new(versioned);
        let b = VersionedFilename::new(plain);
        assert_eq!(a.original_name(), plain, "{versioned}");
        assert!(a.is_same_family(&b), "{versioned} vs {plain}");
    }
}

#[test]
fn test_latest_of_sorted_names_is_newest() {
    let mut names: Vec<VersionedFilename> = ["doc.txt", "doc-1.0.0.txt", "doc-1.1.0.txt"]
        .into_iter()
        .map(VersionedFilename::new)
        .collect();
    names.sort();
    assert_eq!(names[0].filename(), "doc-1.1.0.txt");
    assert_eq!(names[2].filename(), "doc.txt");
}

#[test]
fn test_prev_revision_of_zero_underflows() {
    let zero = VersionNumber::parse("0.0.0").unwrap();
    let err = zero.prev_revision().unwrap_err();
    assert!(matches!(err, VersionError::VersionUnderflow { .. }));
}
