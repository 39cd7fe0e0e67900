//! pkgcheck CLI
//!
//! Audits the package catalog for download URLs that no longer resolve and
//! GitHub release pins that have fallen behind, and publishes the findings
//! as a job matrix for the follow-up workflow.

mod cli_types;
mod error;
mod logging;
mod output;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use pkgcheck_core::Catalog;
use pkgcheck_lib::{InspectOptions, Inspector, IssueLog, RuleSet};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stderr, |t| t.red()),
            e
        );
        println!("{}", output::failure_annotation(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    log::info!("Starting.");

    let catalog = Catalog::load(&cli.catalog)?;
    let rules = match cli.rules {
        Some(ref path) => RuleSet::load(path)?,
        None => RuleSet::default(),
    };

    let options = InspectOptions::new()
        .rules(rules)
        .github_api(cli.github_api.clone())
        .github_token(cli.github_token.clone())
        .insecure(cli.insecure);
    let inspector = Inspector::from_options(options)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    let issues = rt.block_on(inspector.inspect_catalog(&catalog));

    if let Some(ref path) = cli.report {
        issues.write_to_file(path)?;
        log::info!("Report written to {}", path.display());
    }
    print_summary(&issues);

    log::info!("Issues Found: {}", serde_json::to_string(issues.entries())?);
    let matrix = issues.into_matrix();
    output::set_output(cli.output.as_deref(), &matrix.to_json()?)?;
    Ok(())
}

fn print_summary(issues: &IssueLog) {
    let summary = issues.summary();
    if summary.total() == 0 {
        log::info!(
            "{} {} entries checked, no issues",
            "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            summary.entries_checked,
        );
    } else {
        log::warn!(
            "{} {} entries checked: {} network errors, {} new releases",
            "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
            summary.entries_checked,
            summary.network_errors,
            summary.new_releases,
        );
    }
}
