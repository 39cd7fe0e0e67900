//! Per-entry inspection.
//!
//! Each entry moves through the same fixed sequence and never revisits a
//! step:
//!
//! 1. `ignore_all_checks` set: done, nothing reported.
//! 2. Availability: unless the URL is on the trusted host, resolve the full
//!    URL and HEAD it. Anything but a 200 (or no response at all) is a
//!    network error.
//! 3. `ignore_updates` set: done.
//! 4. Release drift: unless an exemption rule matches, compare the tag pinned
//!    in a GitHub release URL against the repository's latest release.
//!
//! Entries are processed one at a time in catalog order, so the issue order
//! is reproducible.

use pkgcheck_core::{Catalog, DownloadEntry, EntryRef, Game, IssueRecord};

use crate::error::ReleaseError;
use crate::github::{DEFAULT_API_BASE, GithubClient, ReleaseSource};
use crate::issues::IssueLog;
use crate::probe::{HttpProber, ProbeOutcome, Prober};
use crate::resolve::{ReleaseAsset, resolve_download_url};
use crate::rules::RuleSet;

/// Runtime configuration for building an [`Inspector`] over real HTTP.
#[derive(Debug, Clone)]
pub struct InspectOptions {
    pub rules: RuleSet,
    /// Base URL of the GitHub REST API.
    pub github_api: String,
    /// Optional token for the latest-release query.
    pub github_token: Option<String>,
    /// Disable TLS certificate verification on availability probes.
    pub insecure: bool,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            github_api: DEFAULT_API_BASE.to_string(),
            github_token: None,
            insecure: false,
        }
    }
}

impl InspectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn github_api(mut self, url: impl Into<String>) -> Self {
        self.github_api = url.into();
        self
    }

    pub fn github_token(mut self, token: Option<String>) -> Self {
        self.github_token = token;
        self
    }

    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}

/// Runs the availability and release-drift checks.
pub struct Inspector<P, R> {
    prober: P,
    releases: R,
    rules: RuleSet,
}

impl Inspector<HttpProber, GithubClient> {
    /// Build an inspector that talks to the network.
    pub fn from_options(options: InspectOptions) -> Result<Self, ReleaseError> {
        let prober = HttpProber::new(options.insecure)?;
        let releases = GithubClient::new(options.github_api)?.with_token(options.github_token);
        Ok(Self::new(prober, releases, options.rules))
    }
}

impl<P: Prober, R: ReleaseSource> Inspector<P, R> {
    pub fn new(prober: P, releases: R, rules: RuleSet) -> Self {
        Self {
            prober,
            releases,
            rules,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Inspect every download entry of the catalog, games first and the
    /// default engine last.
    pub async fn inspect_catalog(&self, catalog: &Catalog) -> IssueLog {
        let mut found = IssueLog::new();
        for (game, entry) in catalog.downloads() {
            if entry.ignore_all_checks {
                log::debug!("Skipping {}: all checks ignored", entry.display_name());
                continue;
            }
            found.record_checked();
            found.extend(self.inspect_entry(game, entry).await);
        }
        found
    }

    /// Inspect one entry and return the issues found, in check order.
    pub async fn inspect_entry(&self, game: &Game, entry: &DownloadEntry) -> Vec<IssueRecord> {
        let mut issues = Vec::new();
        if entry.ignore_all_checks {
            return issues;
        }

        if !self.rules.is_trusted(&entry.url) {
            if let Some(issue) = self.check_availability(game, entry).await {
                issues.push(issue);
            }
        }

        if entry.ignore_updates {
            return issues;
        }

        if let Some(issue) = self.check_release(game, entry).await {
            issues.push(issue);
        }
        issues
    }

    async fn check_availability(&self, game: &Game, entry: &DownloadEntry) -> Option<IssueRecord> {
        log::info!("Processing network check: {}", describe(entry));

        let full_url = match resolve_download_url(entry) {
            Ok(url) => url,
            Err(e) => {
                return Some(IssueRecord::network_error(
                    EntryRef::new(game, entry),
                    None,
                    format!("Invalid URL: {}", e),
                    None,
                ));
            }
        };

        match self.prober.head(&full_url).await {
            ProbeOutcome::Status { code: 200, .. } => {
                log::info!("Network check succeeded for {}", entry.display_name());
                None
            }
            ProbeOutcome::Status { code, reason } => Some(IssueRecord::network_error(
                EntryRef::new(game, entry),
                Some(code),
                reason,
                Some(full_url),
            )),
            ProbeOutcome::Transport(message) => Some(IssueRecord::network_error(
                EntryRef::new(game, entry),
                None,
                message,
                Some(full_url),
            )),
        }
    }

    async fn check_release(&self, game: &Game, entry: &DownloadEntry) -> Option<IssueRecord> {
        if let Some(exemption) = self.rules.drift_exemption(entry) {
            log::debug!(
                "Skipping release check for {}: {}",
                entry.display_name(),
                exemption
            );
            return None;
        }

        let asset = ReleaseAsset::parse(&entry.url)?;
        log::info!("Processing new release check: {}", describe(entry));

        let current_url = match resolve_download_url(entry) {
            Ok(url) => url,
            Err(e) => {
                log::debug!(
                    "Skipping release check for {}: {}",
                    entry.display_name(),
                    e
                );
                return None;
            }
        };

        let latest = match self.releases.latest_tag(&asset.owner, &asset.repo).await {
            Ok(tag) => tag,
            Err(e) => {
                log::debug!(
                    "Latest release lookup failed for {}/{}: {}",
                    asset.owner,
                    asset.repo,
                    e
                );
                return None;
            }
        };

        if latest == asset.tag || self.rules.is_prerelease(&latest) {
            return None;
        }
        Some(IssueRecord::new_release(
            EntryRef::new(game, entry),
            latest,
            asset.tag,
            current_url,
        ))
    }
}

/// Entry as one line of JSON for progress logs.
fn describe(entry: &DownloadEntry) -> String {
    serde_json::to_string(entry).unwrap_or_else(|_| entry.display_name().to_string())
}

#[cfg(test)]
#[path = "tests/inspect_tests.rs"]
mod tests;
