//! Provider Factory
//!
//! Builds the port implementations named in the configuration. All
//! implementations come from `reposeek-providers`; this module only wires
//! configuration values into their constructors.

use std::sync::Arc;

use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::{
    ChatCompletionProvider, EmbeddingProvider, RepositoryCloner, VectorStoreProvider,
};
use reposeek_providers::{
    GitCliCloner, HttpClientConfig, InMemoryVectorStoreProvider, NullChatProvider,
    NullEmbeddingProvider, OpenAIChatProvider, OpenAIEmbeddingProvider, PineconeVectorStore,
};
use reqwest::Client;

use crate::config::{ChatProviderConfig, EmbeddingProviderConfig, VectorStoreProviderConfig};
use crate::constants::{chat_providers, embedding_providers, vector_store_providers};

fn require(value: Option<&String>, what: &str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::config(format!("{what} is required")))
}

/// Factory for creating embedding providers
pub struct EmbeddingProviderFactory;

impl EmbeddingProviderFactory {
    /// Create an embedding provider based on configuration
    pub fn create(
        config: &EmbeddingProviderConfig,
        http_client: Client,
    ) -> Result<Arc<dyn EmbeddingProvider>> {
        match config.provider.to_lowercase().as_str() {
            embedding_providers::NULL => Ok(Arc::new(NullEmbeddingProvider::new())),
            embedding_providers::OPENAI => {
                let api_key = require(config.api_key.as_ref(), "OpenAI API key")?;
                Ok(Arc::new(OpenAIEmbeddingProvider::new(
                    api_key,
                    config.base_url.clone(),
                    config.model.clone(),
                    config.timeout(),
                    http_client,
                )))
            }
            _ => Err(Error::config(format!(
                "Unknown embedding provider: {}",
                config.provider
            ))),
        }
    }
}

/// Factory for creating vector store providers
pub struct VectorStoreProviderFactory;

impl VectorStoreProviderFactory {
    /// Create a vector store provider based on configuration
    pub fn create(
        config: &VectorStoreProviderConfig,
        http_client: Client,
    ) -> Result<Arc<dyn VectorStoreProvider>> {
        match config.provider.to_lowercase().as_str() {
            vector_store_providers::IN_MEMORY | vector_store_providers::MEMORY => {
                Ok(Arc::new(InMemoryVectorStoreProvider::new()))
            }
            vector_store_providers::PINECONE => {
                let api_key = require(config.api_key.as_ref(), "Pinecone API key")?;
                let host = require(config.host.as_ref(), "Pinecone host")?;
                Ok(Arc::new(PineconeVectorStore::new(
                    api_key,
                    &host,
                    config.index_name.clone().unwrap_or_default(),
                    config.timeout(),
                    http_client,
                )))
            }
            _ => Err(Error::config(format!(
                "Unknown vector store provider: {}",
                config.provider
            ))),
        }
    }
}

/// Factory for creating chat completion providers
pub struct ChatProviderFactory;

impl ChatProviderFactory {
    /// Create a chat completion provider based on configuration
    pub fn create(
        config: &ChatProviderConfig,
        http_client: Client,
    ) -> Result<Arc<dyn ChatCompletionProvider>> {
        match config.provider.to_lowercase().as_str() {
            chat_providers::NULL => Ok(Arc::new(NullChatProvider::new())),
            chat_providers::OPENAI => {
                let api_key = require(config.api_key.as_ref(), "OpenAI API key")?;
                Ok(Arc::new(OpenAIChatProvider::new(
                    api_key,
                    config.base_url.clone(),
                    config.model.clone(),
                    config.timeout(),
                    http_client,
                )))
            }
            _ => Err(Error::config(format!(
                "Unknown chat provider: {}",
                config.provider
            ))),
        }
    }
}

/// Shared pooled HTTP client for every vendor provider
pub fn create_http_client() -> Result<Client> {
    HttpClientConfig::default().build_client()
}

/// Repository cloner backed by the `git` command line
pub fn create_cloner() -> Arc<dyn RepositoryCloner> {
    Arc::new(GitCliCloner::new())
}
