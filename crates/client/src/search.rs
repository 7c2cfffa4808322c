//! Search client built on [`reqwest`].

use std::time::Duration;

use reelmock_core::normalize::{normalize_results, MovieSummary};
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::RequestBuilder;
use serde_json::Value;

use crate::config::{ApiMode, ClientConfig};
use crate::error::ClientError;

/// Query sent to the generator when the user has not typed anything.
pub const DEFAULT_GENERATION_QUERY: &str = "dynamic";

/// HTTP client for the movie search and generator endpoints.
pub struct SearchClient {
    client: reqwest::Client,
    api_base_url: String,
    generator_base_url: String,
    mode: ApiMode,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            generator_base_url: config
                .mock_generator_base_url
                .trim_end_matches('/')
                .to_string(),
            mode: config.mode,
        })
    }

    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    /// Search for `query` and return the normalized hits.
    ///
    /// A blank query returns nothing without touching the network. Failures
    /// are logged and also yield an empty list.
    pub async fn search(&self, query: &str) -> Vec<MovieSummary> {
        let q = query.trim();
        if q.is_empty() {
            return Vec::new();
        }

        match self.fetch_movies(q).await {
            Ok(body) => {
                let results = normalize_results(&body);
                tracing::info!(
                    mode = self.mode.as_str(),
                    q,
                    count = results.len(),
                    "Fetched movies",
                );
                results
            }
            Err(e) => {
                tracing::error!(mode = self.mode.as_str(), q, error = %e, "Error fetching movies");
                Vec::new()
            }
        }
    }

    /// Raw `GET {api_base_url}/movies?q=...` body.
    ///
    /// In real mode the request carries a `_ts` cache-buster and no-cache
    /// headers; mock mode sends only `q`.
    pub async fn fetch_movies(&self, q: &str) -> Result<Value, ClientError> {
        let mut request = self
            .client
            .get(format!("{}/movies", self.api_base_url))
            .query(&[("q", q)]);

        if self.mode == ApiMode::Real {
            request = cache_busted(request);
        }

        read_json(request.send().await?).await
    }

    /// Whether the generator answers its health check with a 2xx.
    pub async fn generator_available(&self) -> bool {
        let request = self
            .client
            .get(format!("{}/health", self.generator_base_url));

        match cache_busted(request).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Generator health probe failed");
                false
            }
        }
    }

    /// Ask the generator to write fresh mock data for `query`.
    ///
    /// A blank query is sent as [`DEFAULT_GENERATION_QUERY`].
    pub async fn trigger_generation(&self, query: &str) -> Result<(), ClientError> {
        let q = match query.trim() {
            "" => DEFAULT_GENERATION_QUERY,
            trimmed => trimmed,
        };

        tracing::info!(q, "Calling mock generator");
        match self.request_generation(q).await {
            Ok(_) => {
                tracing::info!(q, "Mock generator call completed");
                Ok(())
            }
            Err(e) => {
                tracing::error!(q, error = %e, "Mock generator call failed");
                Err(e)
            }
        }
    }

    async fn request_generation(&self, q: &str) -> Result<Value, ClientError> {
        let request = self
            .client
            .get(format!("{}/api/movies", self.generator_base_url))
            .query(&[("q", q)]);

        read_json(cache_busted(request).send().await?).await
    }
}

/// Add a `_ts` millisecond timestamp and no-cache headers.
fn cache_busted(request: RequestBuilder) -> RequestBuilder {
    request
        .query(&[("_ts", chrono::Utc::now().timestamp_millis())])
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
}

async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
