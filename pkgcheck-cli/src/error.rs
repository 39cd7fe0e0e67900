use thiserror::Error;

use pkgcheck_core::CatalogError;
use pkgcheck_lib::{ReleaseError, RulesError};

/// Fatal errors that abort a run.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to load rules: {0}")]
    Rules(#[from] RulesError),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] ReleaseError),

    #[error("Failed to encode matrix: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
