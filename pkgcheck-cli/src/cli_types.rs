//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

use pkgcheck_core::DEFAULT_CATALOG_PATH;
use pkgcheck_lib::DEFAULT_API_BASE;

#[derive(Parser, Debug)]
#[command(name = "pkgcheck")]
#[command(
    about = "Check package catalog downloads for broken links and newer GitHub releases",
    long_about = None
)]
pub(crate) struct Cli {
    /// Catalog file to check
    #[arg(long, default_value = DEFAULT_CATALOG_PATH)]
    pub catalog: PathBuf,

    /// TOML file overriding the built-in exemption tables
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Base URL of the GitHub REST API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub github_api: String,

    /// Token for the latest-release lookups (unauthenticated when unset)
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// UNSAFE: skip TLS certificate verification on availability probes
    #[arg(long)]
    pub insecure: bool,

    /// File to append `matrix=<json>` to (prints to stdout when unset)
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write a human-readable report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
