//! HTTP Client Configuration
//!
//! Every vendor provider receives an already-built `reqwest::Client`; this
//! module owns how that client is configured.
//!
//! - `HttpClientConfig` - pooling, timeouts and user agent
//! - `HttpResponseUtils` - response status handling (re-exported from utils)

pub mod provider;

pub use provider::HttpClientConfig;
pub use crate::utils::HttpResponseUtils;
