//! HTTP transport for the Wikimedia REST API.

use std::time::Instant;

use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Result, WikiError};

/// Public anonymous API origin.
pub(crate) const BASE_URL: &str = "https://api.wikimedia.org";

const USER_AGENT: &str = concat!("wikimedia-client/", env!("CARGO_PKG_VERSION"));

/// One outbound GET per call: fixed origin, query parameters in, typed JSON out.
///
/// Connection pooling, proxy configuration, and timeouts are reqwest's; this
/// layer adds no retries and no policy of its own.
#[derive(Clone)]
pub(crate) struct Transport {
    client: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Perform a single GET against `base_url + path` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let start = Instant::now();
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "Wikimedia request failed");
                WikiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(path, status = %status, "Wikimedia API error");
            return Err(WikiError::api(status.as_u16(), body));
        }

        let value = response
            .json()
            .await
            .map_err(|e| WikiError::Parse(e.to_string()))?;

        debug!(
            path,
            duration_ms = start.elapsed().as_millis() as u64,
            "Wikimedia GET"
        );

        Ok(value)
    }
}
