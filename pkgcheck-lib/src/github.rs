//! GitHub latest-release lookup.

use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::error::ReleaseError;

/// Public GitHub REST API.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Source of "latest published release" information for a repository.
#[allow(async_fn_in_trait)]
pub trait ReleaseSource {
    /// Tag name of the latest stable release of `owner/repo`.
    async fn latest_tag(&self, owner: &str, repo: &str) -> Result<String, ReleaseError>;
}

#[derive(Debug, Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// [`ReleaseSource`] backed by the GitHub REST API.
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create an unauthenticated client for `api_base`.
    pub fn new(api_base: impl Into<String>) -> Result<Self, ReleaseError> {
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.into(),
            token: None,
        })
    }

    /// Send `token` as a bearer token on every request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    fn latest_url(&self, owner: &str, repo: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_base.trim_end_matches('/'),
            owner,
            repo
        )
    }
}

impl ReleaseSource for GithubClient {
    async fn latest_tag(&self, owner: &str, repo: &str) -> Result<String, ReleaseError> {
        let mut req = self
            .http
            .get(self.latest_url(owner, repo))
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReleaseError::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let text = resp.text().await?;
        let release: LatestRelease = serde_json::from_str(&text)?;
        Ok(release.tag_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_url() {
        let client = GithubClient::new("https://api.github.example/").unwrap();
        assert_eq!(
            client.latest_url("dhewm", "dhewm3"),
            "https://api.github.example/repos/dhewm/dhewm3/releases/latest"
        );
    }

    #[test]
    fn test_empty_token_is_ignored() {
        let client = GithubClient::new(DEFAULT_API_BASE)
            .unwrap()
            .with_token(Some(String::new()));
        assert!(client.token.is_none());
    }

    #[test]
    fn test_release_body_requires_tag_name() {
        let release: LatestRelease =
            serde_json::from_str(r#"{"tag_name":"v1.2.3","name":"Release"}"#).unwrap();
        assert_eq!(release.tag_name, "v1.2.3");
        assert!(serde_json::from_str::<LatestRelease>(r#"{"message":"Not Found"}"#).is_err());
    }
}
