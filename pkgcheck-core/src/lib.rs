//! Shared data model for the package catalog checker.
//!
//! Holds the catalog schema, the issue records produced by inspection and
//! the job-matrix shape they are emitted in. Nothing here touches the network.

pub mod catalog;
pub mod error;
pub mod issue;
pub mod util;

pub use catalog::{Catalog, DEFAULT_CATALOG_PATH, DownloadEntry, Game};
pub use error::CatalogError;
pub use issue::{EntryRef, IssueKind, IssueRecord, Matrix};
pub use util::combine_url_and_file;
