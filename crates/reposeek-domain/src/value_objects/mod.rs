//! Domain Value Objects
//!
//! Immutable values without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Embedding`] | Vector representation of text for semantic search |
//! | [`SearchQuery`] | Validated search parameters |
//! | [`SummaryResponse`] | Chunks plus the language model's answer |
//! | [`IndexJob`] | Validated ingestion parameters |
//! | [`IndexingResult`] | Counters reported by a repository walk |
//! | [`ChatRequest`] | Prompt forwarded to a chat completion vendor |

/// Chat completion request value object
pub mod chat;
/// Semantic embedding value objects
pub mod embedding;
/// Ingestion value objects
pub mod indexing;
/// Search-related value objects
pub mod search;

pub use chat::ChatRequest;
pub use embedding::Embedding;
pub use indexing::{IndexJob, IndexingResult};
pub use search::{SearchQuery, SummaryResponse};
