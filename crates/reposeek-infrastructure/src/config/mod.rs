//! Configuration management
//!
//! [`AppConfig`] holds every tunable; [`ConfigLoader`] merges defaults, the
//! TOML file and the environment into it and validates the result.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, ChatProviderConfig, EmbeddingProviderConfig, IndexingConfig, LoggingConfig,
    ProvidersConfig, SearchConfig, VectorStoreProviderConfig,
};
