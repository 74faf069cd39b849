//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for reposeek:
//!
//! - [`config`] - figment-based configuration loading and validation
//! - [`logging`] - tracing subscriber setup
//! - [`error_ext`] - context helpers for foreign errors
//! - [`factory`] - provider selection from configuration
//! - [`bootstrap`] - service graph assembly

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod factory;
pub mod logging;

pub use bootstrap::{AppContext, Providers};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
