//! Availability probing.

use std::error::Error as _;

/// Result of a HEAD request against a download URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered. `reason` is the status reason phrase.
    Status { code: u16, reason: String },
    /// No HTTP response was obtained (DNS, TLS, timeout, connection reset).
    Transport(String),
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Status { code: 200, .. })
    }
}

/// Something that can check whether a URL serves content.
#[allow(async_fn_in_trait)]
pub trait Prober {
    async fn head(&self, url: &str) -> ProbeOutcome;
}

/// [`Prober`] backed by a `reqwest` client. Redirects are followed.
pub struct HttpProber {
    http: reqwest::Client,
}

impl HttpProber {
    /// Build a prober. `insecure` disables TLS certificate verification for
    /// this client only; it must stay off unless a host is known to serve a
    /// broken certificate.
    pub fn new(insecure: bool) -> Result<Self, reqwest::Error> {
        if insecure {
            log::warn!("TLS certificate verification is disabled for availability probes");
        }
        let http = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(Self { http })
    }
}

impl Prober for HttpProber {
    async fn head(&self, url: &str) -> ProbeOutcome {
        match self.http.head(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                ProbeOutcome::Status {
                    code: status.as_u16(),
                    reason: status.canonical_reason().unwrap_or_default().to_string(),
                }
            }
            Err(e) => ProbeOutcome::Transport(error_chain(&e)),
        }
    }
}

/// Render an error with its sources, e.g.
/// `error sending request: dns error: failed to lookup address`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
