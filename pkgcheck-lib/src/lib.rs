//! Download availability and release-drift checks for the package catalog.
//!
//! The [`Inspector`] walks every download entry of a [`Catalog`], probes its
//! URL with a HEAD request and, for GitHub release assets, compares the pinned
//! tag to the repository's latest release. Findings are collected into an
//! [`IssueLog`] in catalog order.
//!
//! Network access goes through the [`Prober`] and [`ReleaseSource`] traits so
//! the inspection logic can be driven without a network.

pub mod error;
pub mod github;
pub mod inspect;
pub mod issues;
pub mod probe;
pub mod resolve;
pub mod rules;

pub use error::{ReleaseError, ResolveError, RulesError};
pub use github::{DEFAULT_API_BASE, GithubClient, ReleaseSource};
pub use inspect::{InspectOptions, Inspector};
pub use issues::{IssueLog, IssueSummary};
pub use probe::{HttpProber, ProbeOutcome, Prober};
pub use resolve::{ReleaseAsset, resolve_download_url};
pub use rules::{Exemption, RuleSet};

pub use pkgcheck_core::{Catalog, DownloadEntry, Game, IssueKind, IssueRecord, Matrix};

/// User-Agent sent with every request. The GitHub API rejects requests
/// without one.
pub const USER_AGENT: &str = concat!("pkgcheck/", env!("CARGO_PKG_VERSION"));
