//! # reposeek - Provider Implementations
//!
//! Concrete implementations of the ports defined in `reposeek-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Embedding | `EmbeddingProvider` | OpenAI, Null |
//! | Vector Store | `VectorStoreProvider` | Pinecone, InMemory |
//! | Chat | `ChatCompletionProvider` | OpenAI, Null |
//! | Cloning | `RepositoryCloner` | git CLI |
//!
//! ## Usage
//!
//! ```ignore
//! use reposeek_providers::embedding::OpenAIEmbeddingProvider;
//! use reposeek_providers::vector_store::PineconeVectorStore;
//! ```

pub use reposeek_domain::error::{Error, Result};
pub use reposeek_domain::ports::{
    ChatCompletionProvider, EmbeddingProvider, RepositoryCloner, VectorStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Shared utilities for provider implementations
pub mod utils;

/// HTTP client configuration shared by vendor providers
pub mod http;

/// Embedding provider implementations
pub mod embedding;

/// Chat completion provider implementations
pub mod chat;

/// Vector store provider implementations
pub mod vector_store;

/// Repository cloning via the git command line
pub mod git;

pub use chat::{NullChatProvider, OpenAIChatProvider};
pub use embedding::{NullEmbeddingProvider, OpenAIEmbeddingProvider};
pub use git::GitCliCloner;
pub use http::HttpClientConfig;
pub use vector_store::{InMemoryVectorStoreProvider, PineconeVectorStore};
