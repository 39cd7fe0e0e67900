//! Catalog schema and loader.
//!
//! The catalog is the `packagessniper_v2.json` document: a list of games,
//! each with a list of downloadable assets, plus a `default_engine` record
//! shaped like a game. Unknown fields are ignored and `null` is treated the
//! same as a missing field.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CatalogError;

/// Location of the catalog relative to the repository root.
pub const DEFAULT_CATALOG_PATH: &str = "metadata/packagessniper_v2.json";

/// Root document of the package catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, deserialize_with = "nullable")]
    pub games: Vec<Game>,

    /// Engine package used when a game does not name its own. Checked like
    /// any other game, after all entries in `games`.
    #[serde(default)]
    pub default_engine: Option<Game>,
}

/// A game (or the default engine) and its downloadable assets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub game_name: Option<String>,

    /// Opaque identifier, carried through to reports untouched. The catalog
    /// uses strings for Steam app ids but nothing here depends on that.
    #[serde(default)]
    pub app_id: serde_json::Value,

    #[serde(default, deserialize_with = "nullable")]
    pub download: Vec<DownloadEntry>,
}

/// One downloadable asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownloadEntry {
    #[serde(default)]
    pub name: Option<String>,

    /// Base URL; `file` is appended to it to form the download location.
    #[serde(default, deserialize_with = "nullable")]
    pub url: String,

    #[serde(default)]
    pub file: Option<String>,

    /// Skip every check for this entry.
    #[serde(default, deserialize_with = "nullable")]
    pub ignore_all_checks: bool,

    /// Skip the release-drift check but still probe availability.
    #[serde(default, deserialize_with = "nullable")]
    pub ignore_updates: bool,
}

impl DownloadEntry {
    /// Display name, or an empty string when the entry has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Catalog {
    /// Load and parse the catalog at `path`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every download entry paired with its owning game, in traversal order:
    /// games in catalog order, then the default engine.
    pub fn downloads(&self) -> impl Iterator<Item = (&Game, &DownloadEntry)> {
        self.games
            .iter()
            .chain(self.default_engine.iter())
            .flat_map(|game| game.download.iter().map(move |entry| (game, entry)))
    }
}

/// Deserialize `null` as the type's default value.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
