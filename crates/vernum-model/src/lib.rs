//! Version numbers and versioned filenames.
//!
//! This crate holds the pure value types: parsing and comparing
//! `major.minor[.revision][suffix]` versions, and splitting filenames such as
//! `report-2.3.1.csv` into base name, version and extensions.
//!
//! # Example
//!
//! ```
//! use vernum_model::{VersionNumber, VersionedFilename};
//!
//! let name = VersionedFilename::new("report-2.3.1.csv");
//! assert_eq!(name.original_name(), "report.csv");
//! assert_eq!(name.version(), Some(&VersionNumber::with_revision(2, 3, 1)));
//! ```

mod error;
mod filename;
mod version;
mod versioned;

// === Error Types ===
pub use error::{Result, VersionError};

// === Versions ===
pub use version::{DEFAULT_SEPARATOR, VersionNumber};

// === Filenames ===
pub use filename::{
    EXTENSION_SEPARATOR, FilenameParts, VERSIONED_FILENAME_PATTERN, base_name,
    extension_of, extension_separator_index, file_name, last_separator_index, strip_extension,
};
pub use versioned::VersionedFilename;
