//! Command implementations, independent of argument parsing and output.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use vernum_ingest::{FsLister, GroupingOptions, list_directory_grouped_with};
use vernum_model::{FilenameParts, VersionNumber};

use crate::report::{FamilyReport, FilenameReport, VersionReport};

/// Which neighbouring version to compute, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionStep {
    #[default]
    Current,
    Next,
    Prev,
}

/// Filters applied to `list`.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Keep families whose original name contains this text.
    pub contains: Option<String>,
    /// Keep only families without any versioned member.
    pub originals_only: bool,
}

pub fn parse_filenames<S: AsRef<str>>(filenames: &[S]) -> Vec<FilenameReport> {
    filenames
        .iter()
        .map(|name| FilenameReport::from(&FilenameParts::new(name.as_ref())))
        .collect()
}

pub fn parse_version(input: &str, separator: char, step: VersionStep) -> Result<VersionReport> {
    let version = VersionNumber::parse_with_separator(input, separator)
        .with_context(|| format!("parse version '{input}'"))?;
    let version = match step {
        VersionStep::Current => version,
        VersionStep::Next => version
            .next_revision()
            .with_context(|| format!("next version of '{input}'"))?,
        VersionStep::Prev => version
            .prev_revision()
            .with_context(|| format!("previous version of '{input}'"))?,
    };
    Ok(VersionReport::new(input, &version))
}

pub fn list_families(
    dir: &Path,
    options: &GroupingOptions,
    filter: &ListFilter,
) -> Result<Vec<FamilyReport>> {
    let span = info_span!("list", dir = %dir.display(), case = %options.case_sensitivity);
    let _guard = span.enter();

    let families = list_directory_grouped_with(dir, &FsLister, options, |_, original| {
        filter
            .contains
            .as_deref()
            .is_none_or(|needle| original.contains(needle))
    })
    .with_context(|| format!("group {}", dir.display()))?;

    let reports: Vec<FamilyReport> = families
        .values()
        .filter(|family| !filter.originals_only || family.is_original())
        .map(FamilyReport::from)
        .collect();
    debug!(family_count = reports.len(), "families selected");
    Ok(reports)
}

/// The family named `original_name`, matched under the configured case rule.
pub fn find_latest(
    dir: &Path,
    original_name: &str,
    options: &GroupingOptions,
) -> Result<Option<FamilyReport>> {
    let families = list_directory_grouped_with(dir, &FsLister, options, |_, original| {
        options.case_sensitivity.names_equal(original, original_name)
    })
    .with_context(|| format!("group {}", dir.display()))?;

    Ok(families.values().next().map(FamilyReport::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_steps() {
        let next = parse_version("1.2.3", '.', VersionStep::Next).unwrap();
        assert_eq!(next.version, "1.2.4");

        let prev = parse_version("1.0", '.', VersionStep::Prev).unwrap();
        assert_eq!(prev.version, "0.0");

        let custom = parse_version("4_2", '_', VersionStep::Current).unwrap();
        assert_eq!(custom.version, "4.2");
    }

    #[test]
    fn test_parse_version_errors() {
        assert!(parse_version("", '.', VersionStep::Current).is_err());
        let err = parse_version("0.0.0", '.', VersionStep::Prev).unwrap_err();
        assert!(err.to_string().contains("previous version"));
        let err = parse_version("1.4294967295", '.', VersionStep::Next).unwrap_err();
        assert!(format!("{err:#}").contains("cannot step above"));
    }

    #[test]
    fn test_parse_filenames() {
        let reports = parse_filenames(&["report-2.3.1.csv", "archive.tar.gz"]);
        assert_eq!(reports[0].version.as_deref(), Some("2.3.1"));
        assert_eq!(reports[1].extensions, "tar.gz");
    }
}
