//! Common helpers for vendor providers

/// Constructor normalization shared by the HTTP providers
pub mod constructor {
    /// Trim surrounding whitespace from an API key
    pub fn validate_api_key(api_key: &str) -> String {
        api_key.trim().to_string()
    }

    /// Trim a URL and drop trailing slashes
    pub fn validate_url(url: Option<String>) -> Option<String> {
        url.map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
    }

    /// Base URL with `https://` added when no scheme is present
    pub fn with_scheme(url: &str) -> String {
        let url = url.trim().trim_end_matches('/');
        if url.contains("://") {
            url.to_string()
        } else {
            format!("https://{url}")
        }
    }
}
