//! Domain layer constants
//!
//! Defaults shared by the application and infrastructure layers. Every
//! threshold here can be overridden through configuration.

// ============================================================================
// REQUEST DEFAULTS
// ============================================================================

/// Branch used when a request does not name one
pub const DEFAULT_BRANCH: &str = "main";

/// Number of matches requested from the vector store when no limit is given
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

// ============================================================================
// INDEXING DOMAIN CONSTANTS
// ============================================================================

/// Maximum characters per chunk (line lengths, newlines excluded)
pub const INDEXING_MAX_CHUNK_CHARS: usize = 1000;

/// Files larger than this many bytes are never indexed
pub const INDEXING_MAX_FILE_SIZE: u64 = 100_000;

/// Number of leading bytes inspected by the binary content sniffer
pub const INDEXING_BINARY_SNIFF_LEN: usize = 1000;

/// Prefix of the temporary directory a repository is cloned into
pub const INDEXING_TEMP_DIR_PREFIX: &str = "repo-";

/// Progress is logged every time this many files have been processed
pub const INDEXING_PROGRESS_INTERVAL: usize = 10;

// ============================================================================
// SEARCH DOMAIN CONSTANTS
// ============================================================================

/// Maximum number of chunks forwarded to the summarizer
pub const SUMMARY_TOP_K: usize = 3;

/// Chunks whose trimmed content is shorter than this are not summarized
pub const SUMMARY_MIN_CONTENT_CHARS: usize = 10;

/// Sampling temperature for summary requests
pub const SUMMARY_TEMPERATURE: f32 = 0.3;

/// Token ceiling for summary responses
pub const SUMMARY_MAX_TOKENS: u32 = 200;

/// System instruction sent with every summary request
pub const SUMMARY_SYSTEM_PROMPT: &str = "You are a technical expert. Provide ONLY direct answers to queries about code repositories.
- Answer the specific question asked
- Be concise and to the point
- Do not include additional context unless specifically asked
- If the answer is found, just state it directly";

/// Label used when a file extension maps to no known language
pub const UNKNOWN_LANGUAGE: &str = "Unknown";
