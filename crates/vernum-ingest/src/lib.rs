//! Grouping of versioned files into version families.
//!
//! A directory holding `doc-1.0.0.txt`, `doc-1.1.0.txt` and `doc.txt` has
//! one family, `doc.txt`, whose latest member is `doc-1.1.0.txt`.
//!
//! # Features
//!
//! - **Listing**: a [`DirectoryLister`] supplies entries; [`FsLister`] reads
//!   them from disk
//! - **Grouping**: entries are parsed and grouped by original name into
//!   [`VersionedFiles`], newest version first
//! - **Case rules**: [`CaseSensitivity`] decides whether `DOC.txt` and
//!   `doc.txt` are the same family
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use vernum_ingest::list_dir;
//!
//! let families = list_dir(Path::new("releases"))?;
//! if let Some(latest) = families.get("app.tar.gz").and_then(|f| f.latest_file()) {
//!     println!("{}", latest.path.display());
//! }
//! ```

mod discovery;
mod entry;
mod error;
mod family;
mod options;

// === Error Types ===
pub use error::{IngestError, Result};

// === Directory Entries ===
pub use entry::{DirectoryLister, FileEntry, FsLister};

// === Version Families ===
pub use family::{VersionedFile, VersionedFiles};

// === Grouping ===
pub use discovery::{
    FamilyMap, group_entries, group_files, list_dir, list_directory_grouped,
    list_directory_grouped_with,
};
pub use options::{CaseSensitivity, GroupingOptions};
