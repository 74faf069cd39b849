//! External Service Provider Ports

/// Chat completion port
pub mod chat;
/// Embedding port
pub mod embedding;
/// Vector store port
pub mod vector_store;

pub use chat::ChatCompletionProvider;
pub use embedding::EmbeddingProvider;
pub use vector_store::VectorStoreProvider;
