//! HTTP client for the pick contest API.

pub mod leaderboard;
pub mod picks;
pub mod results;

use picker_core::contest::ErrorResponse;
use reqwest::Url;

use crate::error::{ClientError, Result};

/// HTTP client for the pick contest API.
#[derive(Debug, Clone)]
pub struct PickerClient {
    client: reqwest::Client,
    base_url: String,
}

impl PickerClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a URL ending in a percent-encoded week segment.
    fn week_url(&self, path: &str, week: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url(path))
            .map_err(|e| ClientError::InvalidInput(format!("Invalid base URL: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidInput(format!("Invalid base URL: {}", self.base_url)))?
            .push(week);
        Ok(url)
    }

    /// Handle error responses.
    ///
    /// The server's `{success: false, error}` envelope becomes the message of
    /// a [`ClientError::ServerError`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// Extract the message from an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => envelope.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.to_string(),
    }
}
