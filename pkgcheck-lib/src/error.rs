use thiserror::Error;

/// A download location could not be formed from an entry's `url` and `file`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("entry has no file")]
    MissingFile,

    #[error("{url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Looking up the latest release of a repository failed.
///
/// These are never reported as issues; the release check is skipped instead.
#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors loading an exemption rules file.
#[derive(Debug, Error)]
pub enum RulesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rules file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid rule: {0}")]
    Invalid(String),
}

impl RulesError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
