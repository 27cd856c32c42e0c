//! Decomposition of filenames into base name, version and extensions.
//!
//! A versioned filename looks like `report-2.3.1.csv` or
//! `bundle-1.0.12.tar.gz`: a base name, a hyphen, a strict three-part
//! numeric version and zero or more short extensions. Anything else is
//! decomposed with the plain path heuristics below and carries no version.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::version::VersionNumber;

/// Separator between a name and its extension.
pub const EXTENSION_SEPARATOR: char = '.';
const UNIX_SEPARATOR: char = '/';
const WINDOWS_SEPARATOR: char = '\\';

/// `<base>-<major>.<minor>.<revision>(.<ext>)*`, where each extension is a
/// letter followed by up to nine letters or digits.
pub const VERSIONED_FILENAME_PATTERN: &str =
    r"^(.*)(-([0-9]+\.[0-9]+\.[0-9]+))((\.[a-zA-Z][a-zA-Z0-9]{0,9})*)$";

static VERSIONED_FILENAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(VERSIONED_FILENAME_PATTERN).expect("Invalid versioned filename regex")
});

/// A filename split into its components.
///
/// Two values are equal when they were built from the same raw filename.
#[derive(Debug, Clone)]
pub struct FilenameParts {
    filename: String,
    base_name: String,
    version: Option<VersionNumber>,
    extension: String,
    extensions: String,
}

impl FilenameParts {
    /// Decompose `filename`. Never fails: names that do not carry a
    /// version fall back to path-based splitting.
    #[must_use]
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        match Decomposed::of(&filename) {
            Decomposed::Versioned {
                base_name,
                version,
                extensions,
            } => {
                let extension = last_segment(&extensions).to_string();
                Self {
                    base_name,
                    version: Some(version),
                    extension,
                    extensions,
                    filename,
                }
            }
            Decomposed::Plain {
                base_name,
                extension,
                extensions,
            } => Self {
                base_name,
                version: None,
                extension,
                extensions,
                filename,
            },
        }
    }

    /// The raw input this value was built from.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    #[must_use]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    #[must_use]
    pub fn version(&self) -> Option<&VersionNumber> {
        self.version.as_ref()
    }

    /// The last extension segment (`gz` for `a.tar.gz`).
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Everything after the base name (`tar.gz` for `a.tar.gz`).
    #[must_use]
    pub fn extensions(&self) -> &str {
        &self.extensions
    }

    #[must_use]
    pub fn is_versioned(&self) -> bool {
        self.version.is_some()
    }

    /// The filename with the version segment removed.
    #[must_use]
    pub fn original_name(&self) -> String {
        if self.extensions.is_empty() {
            self.base_name.clone()
        } else {
            format!("{}{EXTENSION_SEPARATOR}{}", self.base_name, self.extensions)
        }
    }
}

impl PartialEq for FilenameParts {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename
    }
}

impl Eq for FilenameParts {}

impl Hash for FilenameParts {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.filename.hash(state);
    }
}

impl fmt::Display for FilenameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.filename)
    }
}

/// Outcome of the single structural match attempt.
enum Decomposed {
    Versioned {
        base_name: String,
        version: VersionNumber,
        extensions: String,
    },
    Plain {
        base_name: String,
        extension: String,
        extensions: String,
    },
}

impl Decomposed {
    fn of(filename: &str) -> Self {
        Self::versioned(filename).unwrap_or_else(|| Self::plain(filename))
    }

    fn versioned(filename: &str) -> Option<Self> {
        let captures = VERSIONED_FILENAME_REGEX.captures(filename)?;
        // The pattern guarantees digits, but a segment may still overflow u32
        let version = VersionNumber::parse(captures.get(3)?.as_str()).ok()?;
        let extensions = captures.get(4).map_or("", |m| m.as_str());
        Some(Self::Versioned {
            base_name: captures.get(1).map_or("", |m| m.as_str()).to_string(),
            version,
            extensions: extensions
                .strip_prefix(EXTENSION_SEPARATOR)
                .unwrap_or(extensions)
                .to_string(),
        })
    }

    fn plain(filename: &str) -> Self {
        trace!(filename, "no version segment, using path heuristics");
        let base = base_name(filename);
        let extension = extension_of(filename).to_string();

        match base.split_once(EXTENSION_SEPARATOR) {
            Some((head, inner)) => Self::Plain {
                base_name: head.to_string(),
                extensions: format!("{inner}{EXTENSION_SEPARATOR}{extension}"),
                extension,
            },
            None => Self::Plain {
                base_name: base.to_string(),
                extensions: extension.clone(),
                extension,
            },
        }
    }
}

/// The part of `extensions` after its last dot, or all of it.
fn last_segment(extensions: &str) -> &str {
    match extensions.rfind(EXTENSION_SEPARATOR) {
        Some(index) => &extensions[index + 1..],
        None => extensions,
    }
}

/// Index of the last `/` or `\`, whichever comes later.
#[must_use]
pub fn last_separator_index(path: &str) -> Option<usize> {
    let unix = path.rfind(UNIX_SEPARATOR);
    let windows = path.rfind(WINDOWS_SEPARATOR);
    unix.max(windows)
}

/// Index of the last dot, provided no directory separator follows it.
#[must_use]
pub fn extension_separator_index(path: &str) -> Option<usize> {
    let dot = path.rfind(EXTENSION_SEPARATOR)?;
    match last_separator_index(path) {
        Some(separator) if separator > dot => None,
        _ => Some(dot),
    }
}

/// Remove the final extension.
///
/// ```text
/// foo.txt    -> foo
/// a\b\c.jpg  -> a\b\c
/// a.b\c      -> a.b\c
/// ```
#[must_use]
pub fn strip_extension(path: &str) -> &str {
    match extension_separator_index(path) {
        Some(index) => &path[..index],
        None => path,
    }
}

/// The name after the last directory separator (empty for `a/b/`).
#[must_use]
pub fn file_name(path: &str) -> &str {
    match last_separator_index(path) {
        Some(index) => &path[index + 1..],
        None => path,
    }
}

/// The file name without directory and final extension.
///
/// ```text
/// a/b/c.txt -> c
/// a/b/c     -> c
/// a/b/c/    -> ""
/// ```
#[must_use]
pub fn base_name(path: &str) -> &str {
    strip_extension(file_name(path))
}

/// The text after the last dot, or empty when there is none.
///
/// ```text
/// a/b/c.jpg  -> jpg
/// a/b.txt/c  -> ""
/// ```
#[must_use]
pub fn extension_of(path: &str) -> &str {
    match extension_separator_index(path) {
        Some(index) => &path[index + 1..],
        None => "",
    }
}
