//! Artist List Client
//!
//! HTTP client for the chat service's REST API. Failures are typed here;
//! the caller decides how quiet to be about them (the chat UI shows an
//! empty artist list rather than an error, matching the service's page).

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// HTTP client for the chat service API
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str, request_timeout_ms: u64) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the artist display labels
    ///
    /// GET `{base}/api/artists`, response `{"artists": [..]}`. The labels
    /// are opaque text; order is whatever the service returned.
    pub async fn fetch_artists(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/artists", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else if e.is_connect() {
                ApiError::Unavailable
            } else {
                ApiError::Request(e)
            }
        })?;

        if response.status().is_success() {
            let body: ArtistsResponse = response.json().await.map_err(ApiError::Request)?;
            Ok(body.artists)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ApiError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArtistsResponse {
    #[serde(default)]
    artists: Vec<String>,
}

/// Errors from the chat service API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Chat service unavailable")]
    Unavailable,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,
}
