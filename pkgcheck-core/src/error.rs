use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the package catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file is missing or unreadable
    #[error("Failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not well-formed JSON or does not match the schema
    #[error("Failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogError {
    /// Path of the catalog file that failed to load.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
