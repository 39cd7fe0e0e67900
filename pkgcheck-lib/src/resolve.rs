//! Download URL resolution and GitHub release-asset parsing.

use reqwest::Url;

use pkgcheck_core::{DownloadEntry, combine_url_and_file};

use crate::error::ResolveError;

/// Join an entry's `url` and `file` into the full download location.
///
/// The joined string is returned as written (not re-serialized by the URL
/// parser) so reports show exactly what the catalog produces.
pub fn resolve_download_url(entry: &DownloadEntry) -> Result<String, ResolveError> {
    let file = entry.file.as_deref().ok_or(ResolveError::MissingFile)?;
    let full = combine_url_and_file(&entry.url, file);
    Url::parse(&full).map_err(|e| ResolveError::InvalidUrl {
        url: full.clone(),
        reason: e.to_string(),
    })?;
    Ok(full)
}

/// A GitHub release-asset URL of the form
/// `https://github.com/{owner}/{repo}/releases/download/{tag}/...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub owner: String,
    pub repo: String,
    pub tag: String,
}

impl ReleaseAsset {
    /// Parse the owner, repository and tag out of a release URL.
    ///
    /// Returns `None` for anything that is not a GitHub release URL or has
    /// fewer than five non-empty path segments.
    pub fn parse(url: &str) -> Option<Self> {
        if !url.contains("github.com") || !url.contains("/releases/") {
            return None;
        }
        let parsed = Url::parse(url).ok()?;
        let parts: Vec<&str> = parsed.path_segments()?.filter(|s| !s.is_empty()).collect();
        if parts.len() < 5 {
            return None;
        }
        Some(Self {
            owner: parts[0].to_string(),
            repo: parts[1].to_string(),
            tag: parts[4].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, file: Option<&str>) -> DownloadEntry {
        DownloadEntry {
            name: Some("demo patch".to_string()),
            url: url.to_string(),
            file: file.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_resolve_joins_with_single_slash() {
        let e = entry("https://host.example/files/", Some("/patch.zip"));
        assert_eq!(
            resolve_download_url(&e).unwrap(),
            "https://host.example/files/patch.zip"
        );
    }

    #[test]
    fn test_resolve_missing_file() {
        let e = entry("https://host.example/files/", None);
        assert!(matches!(
            resolve_download_url(&e),
            Err(ResolveError::MissingFile)
        ));
    }

    #[test]
    fn test_resolve_invalid_url() {
        let e = entry("", Some("patch.zip"));
        let err = resolve_download_url(&e).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidUrl { .. }));
        assert!(err.to_string().starts_with("/patch.zip"));
    }

    #[test]
    fn test_parse_release_asset() {
        let asset = ReleaseAsset::parse(
            "https://github.com/dhewm/dhewm3/releases/download/1.5.2/",
        )
        .unwrap();
        assert_eq!(
            asset,
            ReleaseAsset {
                owner: "dhewm".to_string(),
                repo: "dhewm3".to_string(),
                tag: "1.5.2".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ignores_empty_segments() {
        let asset =
            ReleaseAsset::parse("https://github.com//owner/repo/releases/download//v1/").unwrap();
        assert_eq!(asset.owner, "owner");
        assert_eq!(asset.tag, "v1");
    }

    #[test]
    fn test_parse_rejects_short_or_foreign_urls() {
        assert!(ReleaseAsset::parse("https://github.com/owner/releases/v1").is_none());
        assert!(ReleaseAsset::parse("https://example.com/owner/repo/releases/download/v1/").is_none());
        assert!(ReleaseAsset::parse("https://github.com/owner/repo/archive/v1.zip").is_none());
    }
}
