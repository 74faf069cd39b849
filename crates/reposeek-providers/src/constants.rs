//! Provider constants

// ============================================================================
// EMBEDDING DIMENSIONS
// ============================================================================

/// Null provider vector dimensionality
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// OpenAI text-embedding-3-small dimensionality
pub const EMBEDDING_DIMENSION_OPENAI_SMALL: usize = 1536;

/// OpenAI text-embedding-3-large dimensionality
pub const EMBEDDING_DIMENSION_OPENAI_LARGE: usize = 3072;

/// OpenAI text-embedding-ada-002 dimensionality
pub const EMBEDDING_DIMENSION_OPENAI_ADA: usize = 1536;

// ============================================================================
// OPENAI
// ============================================================================

/// Public OpenAI API base URL
pub const OPENAI_DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Embedding model used when none is configured
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Chat model used when none is configured
pub const OPENAI_DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

// ============================================================================
// PINECONE
// ============================================================================

/// Header carrying the Pinecone API key
pub const PINECONE_API_KEY_HEADER: &str = "Api-Key";

/// Longest vector id sent as-is; longer keys are hashed
pub const PINECONE_VECTOR_ID_MAX_LEN: usize = 100;

// ============================================================================
// NULL PROVIDERS
// ============================================================================

/// Reply of the null chat provider
pub const NULL_CHAT_REPLY: &str = "No chat provider is configured; summary unavailable.";

// ============================================================================
// HTTP
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Default request timeout in seconds
pub const HTTP_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum idle connections per host
pub const HTTP_MAX_IDLE_PER_HOST: usize = 10;

/// Idle connection timeout in seconds
pub const HTTP_CLIENT_IDLE_TIMEOUT_SECS: u64 = 90;

/// TCP keep-alive in seconds
pub const HTTP_KEEPALIVE_SECS: u64 = 60;

/// Prefix of timeout error messages
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "request timed out";
