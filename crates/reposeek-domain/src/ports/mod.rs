//! Domain Port Interfaces
//!
//! Boundary contracts implemented by the provider layer and consumed by the
//! application layer.
//!
//! ## Organization
//!
//! - **providers/** - vendor capabilities (embeddings, vector storage, chat completion)
//! - **infrastructure/** - local system capabilities (repository cloning)

/// Infrastructure service ports
pub mod infrastructure;
/// External service provider ports
pub mod providers;

pub use infrastructure::RepositoryCloner;
pub use providers::{ChatCompletionProvider, EmbeddingProvider, VectorStoreProvider};
