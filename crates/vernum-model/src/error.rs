//! Error types for version parsing.

use thiserror::Error;

/// Errors raised by [`VersionNumber`](crate::VersionNumber) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VersionError {
    /// The text could not be parsed as `major.minor[.revision][suffix]`.
    #[error("malformed version '{input}': {reason}")]
    MalformedVersion {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// A previous revision was requested for a version already at `0.0[.0]`.
    #[error("cannot step below version {version}")]
    VersionUnderflow {
        /// Display form of the version that could not be decremented.
        version: String,
    },

    /// The next revision was requested for a component already at `u32::MAX`.
    #[error("cannot step above version {version}")]
    VersionOverflow {
        /// Display form of the version that could not be incremented.
        version: String,
    },
}

impl VersionError {
    pub(crate) fn malformed(input: &str, reason: impl Into<String>) -> Self {
        Self::MalformedVersion {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for version operations.
pub type Result<T> = std::result::Result<T, VersionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionError::malformed("x.1", "invalid major segment 'x'");
        assert_eq!(
            err.to_string(),
            "malformed version 'x.1': invalid major segment 'x'"
        );

        let err = VersionError::VersionUnderflow {
            version: "0.0.0".to_string(),
        };
        assert_eq!(err.to_string(), "cannot step below version 0.0.0");

        let err = VersionError::VersionOverflow {
            version: "1.4294967295".to_string(),
        };
        assert_eq!(err.to_string(), "cannot step above version 1.4294967295");
    }
}
