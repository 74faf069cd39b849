//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Prefix of reposeek environment variables (`REPOSEEK_SEARCH__DEFAULT_LIMIT`)
pub const CONFIG_ENV_PREFIX: &str = "REPOSEEK";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file name looked up in the default locations
pub const DEFAULT_CONFIG_FILENAME: &str = "reposeek.toml";

/// Project-local configuration directory
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Per-user configuration directory name
pub const USER_CONFIG_DIR: &str = "reposeek";

// ============================================================================
// VENDOR ENVIRONMENT VARIABLES
// ============================================================================

/// OpenAI key, used by the embedding and chat providers
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Pinecone key
pub const ENV_PINECONE_API_KEY: &str = "PINECONE_API_KEY";

/// Pinecone project environment
pub const ENV_PINECONE_ENVIRONMENT: &str = "PINECONE_ENVIRONMENT";

/// Pinecone index name
pub const ENV_PINECONE_INDEX_NAME: &str = "PINECONE_INDEX_NAME";

/// Pinecone index host
pub const ENV_PINECONE_HOST: &str = "PINECONE_HOST";

// ============================================================================
// PROVIDERS
// ============================================================================

/// Provider request timeout in seconds
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Known embedding provider names
pub mod embedding_providers {
    pub const OPENAI: &str = "openai";
    pub const NULL: &str = "null";
}

/// Known vector store provider names
pub mod vector_store_providers {
    pub const PINECONE: &str = "pinecone";
    pub const IN_MEMORY: &str = "in_memory";
    pub const MEMORY: &str = "memory";
}

/// Known chat provider names
pub mod chat_providers {
    pub const OPENAI: &str = "openai";
    pub const NULL: &str = "null";
}

// ============================================================================
// LOGGING
// ============================================================================

/// Level used when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "REPOSEEK_LOG";

/// File name stem of the rolling log file when the path has none
pub const LOG_FILE_STEM: &str = "reposeek";
