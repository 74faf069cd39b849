//! HTTP Response Utilities
//!
//! Status handling shared by every vendor provider. The caller picks the
//! error constructor so a failing vendor surfaces with its own error kind.

use reposeek_domain::error::{Error, Result};
use reqwest::Response;

/// Maps a message to the error kind of the calling provider
pub type ErrorFactory = fn(String) -> Error;

/// Utilities for processing HTTP responses
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Check response status and parse JSON
    ///
    /// Non-success statuses become `make_error` errors naming the provider,
    /// the failure class (401, 429, 5xx, other) and the response body.
    pub async fn check_and_parse(
        response: Response,
        provider_name: &str,
        make_error: ErrorFactory,
    ) -> Result<serde_json::Value> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let code = status.as_u16();

            let context = match code {
                401 => "authentication failed".to_string(),
                429 => "rate limit exceeded".to_string(),
                500..=599 => format!("server error ({code})"),
                _ => format!("request failed ({code})"),
            };
            return Err(make_error(format!("{provider_name} {context}: {error_text}")));
        }

        response.json().await.map_err(|e| {
            make_error(format!("{provider_name} response parse failed: {e}"))
        })
    }

    /// Map a transport failure, calling out timeouts
    pub fn request_error(
        provider_name: &str,
        error: &reqwest::Error,
        make_error: ErrorFactory,
    ) -> Error {
        if error.is_timeout() {
            make_error(format!(
                "{provider_name} {}: {error}",
                crate::constants::ERROR_MSG_REQUEST_TIMEOUT
            ))
        } else {
            make_error(format!("{provider_name} HTTP request failed: {error}"))
        }
    }
}
