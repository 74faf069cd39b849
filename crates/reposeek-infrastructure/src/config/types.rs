//! Configuration types
//!
//! Every section deserializes with defaults, so a TOML file only needs the
//! keys it changes.

use std::path::PathBuf;
use std::time::Duration;

use reposeek_application::{IndexingOptions, SearchOptions, SummaryOptions};
use reposeek_domain::constants::{
    DEFAULT_SEARCH_LIMIT, INDEXING_BINARY_SNIFF_LEN, INDEXING_MAX_CHUNK_CHARS,
    INDEXING_MAX_FILE_SIZE, INDEXING_TEMP_DIR_PREFIX, SUMMARY_MAX_TOKENS,
    SUMMARY_MIN_CONTENT_CHARS, SUMMARY_SYSTEM_PROMPT, SUMMARY_TEMPERATURE, SUMMARY_TOP_K,
};
use reposeek_providers::constants::{OPENAI_DEFAULT_CHAT_MODEL, OPENAI_DEFAULT_EMBEDDING_MODEL};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_LOG_LEVEL, DEFAULT_PROVIDER_TIMEOUT_SECS, chat_providers, embedding_providers,
    vector_store_providers,
};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Vendor provider selection and credentials
    pub providers: ProvidersConfig,
    /// Ingestion thresholds
    pub indexing: IndexingConfig,
    /// Retrieval and summary settings
    pub search: SearchConfig,
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Provider configurations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// Embedding provider
    pub embedding: EmbeddingProviderConfig,
    /// Vector store provider
    pub vector_store: VectorStoreProviderConfig,
    /// Chat completion provider used for summaries
    pub chat: ChatProviderConfig,
}

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingProviderConfig {
    /// Provider name (`openai`, `null`)
    pub provider: String,
    /// Model name
    pub model: String,
    /// API key
    pub api_key: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingProviderConfig {
    fn default() -> Self {
        Self {
            provider: embedding_providers::OPENAI.to_string(),
            model: OPENAI_DEFAULT_EMBEDDING_MODEL.to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl EmbeddingProviderConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Vector store provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorStoreProviderConfig {
    /// Provider name (`pinecone`, `in_memory`)
    pub provider: String,
    /// API key
    pub api_key: Option<String>,
    /// Index host (`my-index-abc123.svc.us-east-1.pinecone.io`)
    pub host: Option<String>,
    /// Index name, used in logs
    pub index_name: Option<String>,
    /// Project environment
    pub environment: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for VectorStoreProviderConfig {
    fn default() -> Self {
        Self {
            provider: vector_store_providers::PINECONE.to_string(),
            api_key: None,
            host: None,
            index_name: None,
            environment: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl VectorStoreProviderConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Chat completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatProviderConfig {
    /// Provider name (`openai`, `null`)
    pub provider: String,
    /// Model name
    pub model: String,
    /// API key
    pub api_key: Option<String>,
    /// Base URL override
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ChatProviderConfig {
    fn default() -> Self {
        Self {
            provider: chat_providers::OPENAI.to_string(),
            model: OPENAI_DEFAULT_CHAT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl ChatProviderConfig {
    /// Request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Ingestion thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexingConfig {
    /// Character budget of one chunk
    pub max_chunk_chars: usize,
    /// Largest file, in bytes, that is indexed
    pub max_file_size: u64,
    /// Leading bytes inspected for binary content
    pub binary_sniff_len: usize,
    /// Prefix of the temporary clone directory
    pub temp_dir_prefix: String,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: INDEXING_MAX_CHUNK_CHARS,
            max_file_size: INDEXING_MAX_FILE_SIZE,
            binary_sniff_len: INDEXING_BINARY_SNIFF_LEN,
            temp_dir_prefix: INDEXING_TEMP_DIR_PREFIX.to_string(),
        }
    }
}

impl IndexingConfig {
    /// Options consumed by the indexing service
    pub fn to_options(&self) -> IndexingOptions {
        IndexingOptions {
            max_chunk_chars: self.max_chunk_chars,
            max_file_size: self.max_file_size,
            binary_sniff_len: self.binary_sniff_len,
            temp_dir_prefix: self.temp_dir_prefix.clone(),
        }
    }
}

/// Retrieval and summary settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result count when a request has no limit
    pub default_limit: usize,
    /// Chunks forwarded to the language model
    pub summary_top_k: usize,
    /// Minimum trimmed length of a forwarded chunk
    pub min_summary_content_chars: usize,
    /// Sampling temperature of the summary request
    pub temperature: f32,
    /// Token ceiling of the summary reply
    pub max_tokens: u32,
    /// System instruction of the summary request
    pub system_prompt: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            summary_top_k: SUMMARY_TOP_K,
            min_summary_content_chars: SUMMARY_MIN_CONTENT_CHARS,
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
            system_prompt: SUMMARY_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl SearchConfig {
    /// Options consumed by the search service
    pub fn to_options(&self) -> SearchOptions {
        SearchOptions {
            default_limit: self.default_limit,
            summary: SummaryOptions {
                top_k: self.summary_top_k,
                min_content_chars: self.min_summary_content_chars,
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                system_prompt: self.system_prompt.clone(),
            },
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable JSON output format
    pub json_format: bool,
    /// Log to a daily-rolling file in addition to stderr
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
