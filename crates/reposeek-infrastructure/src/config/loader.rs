//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use std::env;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use reposeek_domain::error::{Error, Result};

use crate::config::AppConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    ENV_OPENAI_API_KEY, ENV_PINECONE_API_KEY, ENV_PINECONE_ENVIRONMENT, ENV_PINECONE_HOST,
    ENV_PINECONE_INDEX_NAME, USER_CONFIG_DIR, chat_providers, embedding_providers,
    vector_store_providers,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};

/// Vendor variables of existing deployments and the keys they fill
const VENDOR_ENV_KEYS: &[(&str, &str)] = &[
    (ENV_OPENAI_API_KEY, "providers.embedding.api_key"),
    (ENV_OPENAI_API_KEY, "providers.chat.api_key"),
    (ENV_PINECONE_API_KEY, "providers.vector_store.api_key"),
    (ENV_PINECONE_ENVIRONMENT, "providers.vector_store.environment"),
    (ENV_PINECONE_INDEX_NAME, "providers.vector_store.index_name"),
    (ENV_PINECONE_HOST, "providers.vector_store.host"),
];

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default
    ///    location that exists)
    /// 3. Prefixed environment variables, `__` separating nested keys
    ///    (`REPOSEEK_INDEXING__MAX_CHUNK_CHARS`)
    /// 4. Vendor variables (`OPENAI_API_KEY`, `PINECONE_*`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        for &(variable, key) in VENDOR_ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[variable]).map(move |_| key.into()));
        }

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Write `config` as TOML to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context(format!(
            "Failed to write config file {}",
            path.as_ref().display()
        ))?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the default configuration locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{USER_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_provider_config(config)?;
    validate_indexing_config(config)?;
    validate_search_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn has_value(value: Option<&String>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn validate_provider_config(config: &AppConfig) -> Result<()> {
    let providers = &config.providers;

    match providers.embedding.provider.to_lowercase().as_str() {
        embedding_providers::NULL => {}
        embedding_providers::OPENAI => {
            if !has_value(providers.embedding.api_key.as_ref()) {
                return Err(Error::config(
                    "OpenAI embedding provider requires an API key (OPENAI_API_KEY)",
                ));
            }
        }
        other => {
            return Err(Error::config(format!("Unknown embedding provider: {other}")));
        }
    }

    match providers.vector_store.provider.to_lowercase().as_str() {
        vector_store_providers::IN_MEMORY | vector_store_providers::MEMORY => {}
        vector_store_providers::PINECONE => {
            if !has_value(providers.vector_store.api_key.as_ref()) {
                return Err(Error::config(
                    "Pinecone vector store requires an API key (PINECONE_API_KEY)",
                ));
            }
            if !has_value(providers.vector_store.host.as_ref()) {
                return Err(Error::config(
                    "Pinecone vector store requires an index host (PINECONE_HOST)",
                ));
            }
        }
        other => {
            return Err(Error::config(format!("Unknown vector store provider: {other}")));
        }
    }

    match providers.chat.provider.to_lowercase().as_str() {
        chat_providers::NULL => {}
        chat_providers::OPENAI => {
            if !has_value(providers.chat.api_key.as_ref()) {
                return Err(Error::config(
                    "OpenAI chat provider requires an API key (OPENAI_API_KEY)",
                ));
            }
        }
        other => {
            return Err(Error::config(format!("Unknown chat provider: {other}")));
        }
    }

    Ok(())
}

fn validate_indexing_config(config: &AppConfig) -> Result<()> {
    let indexing = &config.indexing;
    if indexing.max_chunk_chars == 0 {
        return Err(Error::config("indexing.max_chunk_chars cannot be 0"));
    }
    if indexing.max_file_size == 0 {
        return Err(Error::config("indexing.max_file_size cannot be 0"));
    }
    if indexing.binary_sniff_len == 0 {
        return Err(Error::config("indexing.binary_sniff_len cannot be 0"));
    }
    Ok(())
}

fn validate_search_config(config: &AppConfig) -> Result<()> {
    let search = &config.search;
    if search.default_limit == 0 {
        return Err(Error::config("search.default_limit cannot be 0"));
    }
    if search.summary_top_k == 0 {
        return Err(Error::config("search.summary_top_k cannot be 0"));
    }
    if search.max_tokens == 0 {
        return Err(Error::config("search.max_tokens cannot be 0"));
    }
    if !(0.0..=2.0).contains(&search.temperature) {
        return Err(Error::config(format!(
            "search.temperature must be between 0 and 2, got {}",
            search.temperature
        )));
    }
    Ok(())
}
