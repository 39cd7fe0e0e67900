use std::path::Path;

use pkgcheck_core::{IssueKind, IssueRecord, Matrix};

/// Issues collected over one run, in the order they were found.
#[derive(Debug, Default)]
pub struct IssueLog {
    entries: Vec<IssueRecord>,
    checked: usize,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: IssueRecord) {
        self.entries.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = IssueRecord>) {
        self.entries.extend(issues);
    }

    /// Count an entry that went through inspection.
    pub fn record_checked(&mut self) {
        self.checked += 1;
    }

    pub fn entries(&self) -> &[IssueRecord] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> IssueSummary {
        let mut summary = IssueSummary {
            entries_checked: self.checked,
            ..Default::default()
        };
        for issue in &self.entries {
            match issue.kind {
                IssueKind::NetworkError { .. } => summary.network_errors += 1,
                IssueKind::NewRelease { .. } => summary.new_releases += 1,
            }
        }
        summary
    }

    pub fn into_matrix(self) -> Matrix {
        Matrix::new(self.entries)
    }

    /// Write a human-readable report.
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        use std::io::Write;

        let mut file = std::fs::File::create(path)?;
        let summary = self.summary();

        writeln!(file, "=== Package Check Report ===")?;
        writeln!(
            file,
            "Date: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(file)?;
        writeln!(file, "--- Summary ---")?;
        writeln!(file, "Entries checked: {}", summary.entries_checked)?;
        writeln!(file, "Network errors: {}", summary.network_errors)?;
        writeln!(file, "New releases: {}", summary.new_releases)?;
        writeln!(file)?;
        writeln!(file, "--- Details ---")?;
        writeln!(file)?;

        for issue in &self.entries {
            let game = issue.entry.game_name.as_deref().unwrap_or("?");
            let download = issue.entry.download_name.as_deref().unwrap_or("?");
            match &issue.kind {
                IssueKind::NetworkError {
                    download_status,
                    download_status_text,
                    full_url,
                } => {
                    let status = download_status
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "no response".to_string());
                    writeln!(
                        file,
                        "[NETWORK] {} / {}: {} {}",
                        game, download, status, download_status_text
                    )?;
                    if let Some(url) = full_url {
                        writeln!(file, "     URL: {}", url)?;
                    }
                }
                IssueKind::NewRelease {
                    new_version,
                    current_release,
                    current_url,
                } => {
                    writeln!(
                        file,
                        "[RELEASE] {} / {}: {} -> {}",
                        game, download, current_release, new_version
                    )?;
                    writeln!(file, "     URL: {}", current_url)?;
                }
            }
        }

        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IssueSummary {
    pub entries_checked: usize,
    pub network_errors: usize,
    pub new_releases: usize,
}

impl IssueSummary {
    pub fn total(&self) -> usize {
        self.network_errors + self.new_releases
    }
}
