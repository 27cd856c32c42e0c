//! Version numbers of the form `major.minor[.revision][suffix]`.
//!
//! Parsing is deliberately lenient about the third segment: the leading run
//! of digits becomes the revision and whatever follows becomes a free-form
//! suffix (e.g. `"1.4.2beta"` or `"2.0.7-rc1"`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VersionError};

/// Default separator between version segments.
pub const DEFAULT_SEPARATOR: char = '.';

/// An immutable version number.
///
/// Ordering compares `major`, then `minor`, then `revision`, then `suffix`.
/// A present revision sorts above an absent one, and a present suffix sorts
/// above an absent one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionNumber {
    major: u32,
    minor: u32,
    revision: Option<u32>,
    suffix: Option<String>,
}

impl VersionNumber {
    /// Create a version from its components.
    ///
    /// An empty suffix is treated as no suffix.
    #[must_use]
    pub fn new(major: u32, minor: u32, revision: Option<u32>, suffix: Option<String>) -> Self {
        Self {
            major,
            minor,
            revision,
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Shorthand for a plain `major.minor.revision` version.
    #[must_use]
    pub const fn with_revision(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision: Some(revision),
            suffix: None,
        }
    }

    /// Parse a version using the default `.` separator.
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_separator(text, DEFAULT_SEPARATOR)
    }

    /// Parse a version whose segments are split by `separator`.
    ///
    /// At most three segments are taken; the third keeps any further
    /// separators as part of the suffix. Missing minor defaults to `0`,
    /// a missing third segment leaves the revision unset, and an empty
    /// third segment means revision `0`.
    pub fn parse_with_separator(text: &str, separator: char) -> Result<Self> {
        if text.is_empty() {
            return Err(VersionError::malformed(text, "empty version"));
        }

        let mut segments = text.splitn(3, separator);
        let major = parse_number(text, "major", segments.next().unwrap_or_default())?;
        let minor = match segments.next() {
            Some(segment) => parse_number(text, "minor", segment)?,
            None => 0,
        };
        let (revision, suffix) = match segments.next() {
            Some(rest) => split_revision(text, rest)?,
            None => (None, None),
        };

        Ok(Self {
            major,
            minor,
            revision,
            suffix,
        })
    }

    /// Parse text that may legitimately carry no version at all.
    ///
    /// The input is trimmed first. Blank input and the literal `null` yield
    /// `Ok(None)`; anything else must be a well-formed version.
    pub fn parse_optional(text: &str) -> Result<Option<Self>> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Ok(None);
        }
        Self::parse(trimmed).map(Some)
    }

    /// Tolerant parse: malformed input is logged and reported as `None`.
    #[must_use]
    pub fn try_parse(text: &str) -> Option<Self> {
        match Self::parse_optional(text) {
            Ok(version) => version,
            Err(error) => {
                warn!(input = %text, %error, "unknown version");
                None
            }
        }
    }

    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    #[must_use]
    pub const fn revision(&self) -> Option<u32> {
        self.revision
    }

    #[must_use]
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// The next version: bumps the revision when present, otherwise the
    /// minor number. The suffix is carried over.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::VersionOverflow`] when the bumped component is
    /// already `u32::MAX`.
    pub fn next_revision(&self) -> Result<Self> {
        let overflow = || VersionError::VersionOverflow {
            version: self.to_string(),
        };
        match self.revision {
            Some(revision) => Ok(Self {
                revision: Some(revision.checked_add(1).ok_or_else(overflow)?),
                ..self.clone()
            }),
            None => Ok(Self {
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                ..self.clone()
            }),
        }
    }

    /// The previous version, taken from the most specific non-zero
    /// component (revision, then minor, then major).
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::VersionUnderflow`] for `0.0` and `0.0.0`.
    pub fn prev_revision(&self) -> Result<Self> {
        match self.revision {
            Some(revision) if revision > 0 => Ok(Self {
                revision: Some(revision - 1),
                ..self.clone()
            }),
            _ if self.minor > 0 => Ok(Self {
                minor: self.minor - 1,
                ..self.clone()
            }),
            _ if self.major > 0 => Ok(Self {
                major: self.major - 1,
                ..self.clone()
            }),
            _ => Err(VersionError::VersionUnderflow {
                version: self.to_string(),
            }),
        }
    }

    /// Render with a custom segment separator.
    #[must_use]
    pub fn to_string_with_separator(&self, separator: char) -> String {
        let mut out = format!("{}{separator}{}", self.major, self.minor);
        if let Some(revision) = self.revision {
            out.push(separator);
            out.push_str(&revision.to_string());
        }
        if let Some(suffix) = &self.suffix {
            out.push_str(suffix);
        }
        out
    }
}

fn parse_number(input: &str, segment: &str, text: &str) -> Result<u32> {
    if !is_digits(text) {
        return Err(VersionError::malformed(
            input,
            format!("invalid {segment} segment '{text}'"),
        ));
    }
    text.parse()
        .map_err(|e| VersionError::malformed(input, format!("invalid {segment} segment '{text}' ({e})")))
}

/// Non-empty and ASCII digits only; `u32::from_str` alone also takes a `+`.
fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Split the third segment into a numeric revision and a trailing suffix.
fn split_revision(input: &str, rest: &str) -> Result<(Option<u32>, Option<String>)> {
    if rest.is_empty() {
        return Ok((Some(0), None));
    }

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    let revision = if digits > 0 {
        Some(parse_number(input, "revision", &rest[..digits])?)
    } else {
        None
    };
    let suffix = (digits < rest.len()).then(|| rest[digits..].to_string());
    Ok((revision, suffix))
}

impl FromStr for VersionNumber {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for VersionNumber {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<VersionNumber> for String {
    fn from(version: VersionNumber) -> Self {
        version.to_string()
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if let Some(revision) = self.revision {
            write!(f, ".{revision}")?;
        }
        if let Some(ref suffix) = self.suffix {
            f.write_str(suffix)?;
        }
        Ok(())
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.major.cmp(&other.major) {
            Ordering::Equal => {}
            other => return other,
        }
        match self.minor.cmp(&other.minor) {
            Ordering::Equal => {}
            other => return other,
        }

        // A present revision outranks a missing one, e.g. 1.2.0 > 1.2
        match (self.revision, other.revision) {
            (Some(a), Some(b)) if a != b => return a.cmp(&b),
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            _ => {}
        }

        match (&self.suffix, &other.suffix) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}
