//! Serializable views of parsed filenames, versions and families.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use vernum_ingest::VersionedFiles;
use vernum_model::{FilenameParts, VersionNumber};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilenameReport {
    pub filename: String,
    pub base_name: String,
    pub version: Option<String>,
    pub extensions: String,
    pub extension: String,
    pub original_name: String,
}

impl From<&FilenameParts> for FilenameReport {
    fn from(parts: &FilenameParts) -> Self {
        Self {
            filename: parts.filename().to_string(),
            base_name: parts.base_name().to_string(),
            version: parts.version().map(ToString::to_string),
            extensions: parts.extensions().to_string(),
            extension: parts.extension().to_string(),
            original_name: parts.original_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionReport {
    pub input: String,
    pub version: String,
    pub major: u32,
    pub minor: u32,
    pub revision: Option<u32>,
    pub suffix: Option<String>,
}

impl VersionReport {
    pub fn new(input: &str, version: &VersionNumber) -> Self {
        Self {
            input: input.to_string(),
            version: version.to_string(),
            major: version.major(),
            minor: version.minor(),
            revision: version.revision(),
            suffix: version.suffix().map(str::to_string),
        }
    }
}

/// One version family, newest member first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyReport {
    pub original_name: String,
    pub base_name: String,
    pub ext: String,
    pub latest: Option<String>,
    pub latest_path: Option<PathBuf>,
    pub latest_version: Option<String>,
    pub latest_modified: Option<DateTime<Utc>>,
    pub members: Vec<String>,
}

impl FamilyReport {
    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn is_original(&self) -> bool {
        self.latest_version.is_none()
    }
}

impl From<&VersionedFiles> for FamilyReport {
    fn from(family: &VersionedFiles) -> Self {
        let latest = family.latest_file();
        Self {
            original_name: family.original_name().to_string(),
            base_name: family.base_name().to_string(),
            ext: family.ext().to_string(),
            latest: latest.map(|entry| entry.name.clone()),
            latest_path: latest.map(|entry| entry.path.clone()),
            latest_version: family.latest_version().map(ToString::to_string),
            latest_modified: latest.and_then(|entry| entry.modified).map(DateTime::<Utc>::from),
            members: family.iter().map(|file| file.entry().name.clone()).collect(),
        }
    }
}
