//! Error type for calls to the REST backend.
//!
//! Three outcomes are distinguished: the request never completed
//! (`Transport`), the backend answered with a non-2xx status (`Backend`,
//! optionally with its `detail` message), or a 2xx body could not be decoded
//! (`Decode`).

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no details"))]
    Backend { status: u16, detail: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a backend error from a status code and the raw response body
    pub fn from_response_text(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message());
        ApiError::Backend { status, detail }
    }

    /// Message reported by the backend, if it sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Backend { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show to the user: the backend's detail verbatim, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Check the status of `response` and decode its JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::warn!("{} answered HTTP {}: {}", response.url(), status, body);
        return Err(ApiError::from_response_text(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
