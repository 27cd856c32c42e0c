//! Options controlling how files are grouped into version families.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How original names are compared when deciding family membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSensitivity {
    /// Names must match exactly.
    Sensitive,
    /// Names match regardless of letter case.
    Insensitive,
}

impl CaseSensitivity {
    /// The convention of the platform this binary was built for:
    /// insensitive on Windows and macOS, sensitive elsewhere.
    #[must_use]
    pub const fn system_default() -> Self {
        if cfg!(any(windows, target_os = "macos")) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Compare two names under this rule.
    #[must_use]
    pub fn names_equal(self, a: &str, b: &str) -> bool {
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a
                .chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase)),
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sensitive => "case-sensitive",
            Self::Insensitive => "case-insensitive",
        }
    }
}

impl Default for CaseSensitivity {
    fn default() -> Self {
        Self::system_default()
    }
}

impl fmt::Display for CaseSensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Settings for [`list_directory_grouped`](crate::list_directory_grouped).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroupingOptions {
    /// Rule used to decide whether two original names are the same.
    #[serde(default)]
    pub case_sensitivity: CaseSensitivity,
}

impl GroupingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_case_sensitivity(mut self, case_sensitivity: CaseSensitivity) -> Self {
        self.case_sensitivity = case_sensitivity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_equal() {
        assert!(CaseSensitivity::Sensitive.names_equal("doc.txt", "doc.txt"));
        assert!(!CaseSensitivity::Sensitive.names_equal("doc.txt", "DOC.txt"));
        assert!(CaseSensitivity::Insensitive.names_equal("doc.txt", "DOC.TXT"));
        assert!(CaseSensitivity::Insensitive.names_equal("Überblick.md", "überblick.MD"));
        assert!(!CaseSensitivity::Insensitive.names_equal("doc.txt", "doc.md"));
        assert!(!CaseSensitivity::Insensitive.names_equal("doc", "doc.txt"));
    }

    #[test]
    fn test_system_default() {
        let expected = if cfg!(any(windows, target_os = "macos")) {
            CaseSensitivity::Insensitive
        } else {
            CaseSensitivity::Sensitive
        };
        assert_eq!(CaseSensitivity::system_default(), expected);
        assert_eq!(GroupingOptions::default().case_sensitivity, expected);
    }

    #[test]
    fn test_options_deserialize() {
        let options: GroupingOptions =
            serde_json::from_str(r#"{"case_sensitivity":"insensitive"}"#).unwrap();
        assert_eq!(options.case_sensitivity, CaseSensitivity::Insensitive);

        let options: GroupingOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, GroupingOptions::default());
    }
}
