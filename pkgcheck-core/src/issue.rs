//! Issue records and the job-matrix output.

use serde::Serialize;

use crate::catalog::{DownloadEntry, Game};

/// Identifies which catalog entry an issue belongs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRef {
    pub download_name: Option<String>,
    pub game_name: Option<String>,
    pub game_app_id: serde_json::Value,
}

impl EntryRef {
    pub fn new(game: &Game, entry: &DownloadEntry) -> Self {
        Self {
            download_name: entry.name.clone(),
            game_name: game.game_name.clone(),
            game_app_id: game.app_id.clone(),
        }
    }
}

/// What was wrong with an entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IssueKind {
    /// The download could not be fetched.
    ///
    /// `download_status` is `None` when no HTTP response was obtained
    /// (transport failure or an unresolvable URL). `full_url` is `None`
    /// only when the URL itself could not be resolved.
    NetworkError {
        download_status: Option<u16>,
        download_status_text: String,
        full_url: Option<String>,
    },

    /// The entry is pinned to a release tag older than the latest release.
    NewRelease {
        new_version: String,
        current_release: String,
        current_url: String,
    },
}

/// One finding, serialized as a flat object with a `type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRecord {
    #[serde(flatten)]
    pub entry: EntryRef,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl IssueRecord {
    pub fn network_error(
        entry: EntryRef,
        status: Option<u16>,
        status_text: impl Into<String>,
        full_url: Option<String>,
    ) -> Self {
        Self {
            entry,
            kind: IssueKind::NetworkError {
                download_status: status,
                download_status_text: status_text.into(),
                full_url,
            },
        }
    }

    pub fn new_release(
        entry: EntryRef,
        new_version: impl Into<String>,
        current_release: impl Into<String>,
        current_url: impl Into<String>,
    ) -> Self {
        Self {
            entry,
            kind: IssueKind::NewRelease {
                new_version: new_version.into(),
                current_release: current_release.into(),
                current_url: current_url.into(),
            },
        }
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self.kind, IssueKind::NetworkError { .. })
    }

    pub fn is_new_release(&self) -> bool {
        matches!(self.kind, IssueKind::NewRelease { .. })
    }
}

/// Job-matrix value handed to the downstream workflow.
///
/// Serializes as `{"include":[...]}`, or `{}` when there are no issues.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Matrix {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<IssueRecord>,
}

impl Matrix {
    pub fn new(include: Vec<IssueRecord>) -> Self {
        Self { include }
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Compact JSON encoding, suitable for a single-line workflow output.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
