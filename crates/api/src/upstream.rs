//! HTTP client for the public movie search API.
//!
//! Wraps `GET {base}/justwatch?q=...` using [`reqwest`]. Responses are relayed
//! as untyped JSON; the proxy never reshapes them.

use std::time::Duration;

use serde_json::Value;

/// Errors from the upstream search API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, bad JSON).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream returned a non-2xx status code.
    #[error("Upstream returned HTTP {status}: {body}")]
    Status {
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Client bound to one upstream base URL.
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    source: String,
}

impl UpstreamClient {
    /// Build a client with a per-request `timeout`.
    ///
    /// * `base_url` - e.g. `https://imdb.iamidiotareyoutoo.com`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, UpstreamError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let source = source_name(&base_url);

        Ok(Self {
            client,
            base_url,
            source,
        })
    }

    /// Host name reported as `source` in proxied responses.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run a search and return the upstream JSON body unchanged.
    pub async fn search(&self, query: &str) -> Result<Value, UpstreamError> {
        let response = self
            .client
            .get(format!("{}/justwatch", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Host part of `base_url`, falling back to the whole string.
fn source_name(base_url: &str) -> String {
    reqwest::Url::parse(base_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string())
}
