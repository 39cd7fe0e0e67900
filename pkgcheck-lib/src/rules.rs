//! Exemption tables for the availability and release-drift checks.
//!
//! The tables are plain data so new packages can be exempted without touching
//! the inspection code. A TOML file may override any table; tables it leaves
//! out keep their built-in values.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pkgcheck_core::DownloadEntry;

use crate::error::RulesError;

/// Our own package storage. Entries served from here are neither probed nor
/// checked for new releases.
pub const TRUSTED_PREFIX: &str = "https://github.com/luxtorpeda-dev/packages";

/// Entry names containing any of these are not versioned GitHub releases.
const NAME_KEYWORDS: &[&str] = &[
    "openjdk",
    "soundfont",
    "soundtrack",
    "catalogue",
    "music",
    "rvgl",
];

/// Entry names matched exactly (after lowercasing).
const EXACT_NAMES: &[&str] = &["eawpats"];

/// Hosts and paths that are not GitHub releases or need special handling.
const URL_FRAGMENTS: &[&str] = &[
    "quaddicted",
    "ioquake3.org",
    "icculus.org",
    "slashbunny",
    "unreal-archive-files",
    "nwjs.io",
    "playmorepromode.com",
    "daikatana/tree",
    "ezquake",
];

/// A latest tag containing any of these is a pre-release and never reported.
const PRERELEASE_MARKERS: &[&str] = &["-rc"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The full set of exemption tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// URL prefix of the trusted artifact host. Empty disables it.
    pub trusted_prefix: String,
    /// Case-insensitive substrings of the entry name.
    pub name_keywords: Vec<String>,
    /// Case-insensitive exact entry names.
    pub exact_names: Vec<String>,
    /// Substrings of the entry URL.
    pub url_fragments: Vec<String>,
    /// Substrings marking a latest tag as a pre-release.
    pub prerelease_markers: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            trusted_prefix: TRUSTED_PREFIX.to_string(),
            name_keywords: to_strings(NAME_KEYWORDS),
            exact_names: to_strings(EXACT_NAMES),
            url_fragments: to_strings(URL_FRAGMENTS),
            prerelease_markers: to_strings(PRERELEASE_MARKERS),
        }
    }
}

/// Why an entry is exempt from the release-drift check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exemption {
    TrustedHost,
    NameKeyword(String),
    ExactName(String),
    UrlFragment(String),
}

impl fmt::Display for Exemption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrustedHost => write!(f, "served from trusted host"),
            Self::NameKeyword(k) => write!(f, "name contains \"{}\"", k),
            Self::ExactName(n) => write!(f, "name is \"{}\"", n),
            Self::UrlFragment(u) => write!(f, "URL contains \"{}\"", u),
        }
    }
}

impl RuleSet {
    /// Load rules from a TOML file, filling omitted tables with defaults.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, RulesError> {
        let mut rules: RuleSet = toml::from_str(contents)?;
        rules.normalize()?;
        Ok(rules)
    }

    /// Lowercase the name tables and reject empty patterns, which would
    /// otherwise match every entry.
    fn normalize(&mut self) -> Result<(), RulesError> {
        for (table, items, lowercase) in [
            ("name_keywords", &mut self.name_keywords, true),
            ("exact_names", &mut self.exact_names, true),
            ("url_fragments", &mut self.url_fragments, false),
            ("prerelease_markers", &mut self.prerelease_markers, false),
        ] {
            if items.iter().any(|s| s.is_empty()) {
                return Err(RulesError::invalid(format!("empty pattern in {}", table)));
            }
            if lowercase {
                for item in items.iter_mut() {
                    *item = item.to_lowercase();
                }
            }
        }
        Ok(())
    }

    /// True if `url` is served from the trusted artifact host.
    pub fn is_trusted(&self, url: &str) -> bool {
        !self.trusted_prefix.is_empty() && url.contains(&self.trusted_prefix)
    }

    /// The first rule exempting `entry` from the release-drift check, if any.
    pub fn drift_exemption(&self, entry: &DownloadEntry) -> Option<Exemption> {
        if self.is_trusted(&entry.url) {
            return Some(Exemption::TrustedHost);
        }

        let name = entry.display_name().to_lowercase();
        if let Some(k) = self.name_keywords.iter().find(|k| name.contains(k.as_str())) {
            return Some(Exemption::NameKeyword(k.clone()));
        }
        if let Some(n) = self.exact_names.iter().find(|n| **n == name) {
            return Some(Exemption::ExactName(n.clone()));
        }
        self.url_fragments
            .iter()
            .find(|u| entry.url.contains(u.as_str()))
            .map(|u| Exemption::UrlFragment(u.clone()))
    }

    /// True if `tag` looks like a release candidate or other pre-release.
    pub fn is_prerelease(&self, tag: &str) -> bool {
        self.prerelease_markers
            .iter()
            .any(|m| tag.contains(m.as_str()))
    }
}
