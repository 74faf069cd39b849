//! # reposeek
//!
//! Semantic search over code repositories: clone a repository, chunk and
//! embed its text files into a vector store, then answer natural-language
//! queries with ranked chunks and an optional language-model summary.
//!
//! ## Example
//!
//! ```ignore
//! use reposeek::infrastructure::{AppContext, ConfigLoader};
//! use reposeek::{SearchRequest, ToolRequest};
//!
//! let config = ConfigLoader::new().load()?;
//! let context = AppContext::from_config(&config)?;
//! let response = context
//!     .dispatcher
//!     .dispatch(ToolRequest::VectorSearch(SearchRequest::new("auth flow", "acme/api")))
//!     .await;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, requests, errors and port traits
//! - `application` - ingestion, ranking and the use-case services
//! - `providers` - OpenAI, Pinecone, in-memory and git implementations
//! - `infrastructure` - configuration, logging and wiring
//! - [`cli`] - the command line front end

pub mod cli;

/// Domain layer - core types and ports
pub mod domain {
    pub use reposeek_domain::*;
}

/// Application layer - ingestion logic and services
pub mod application {
    pub use reposeek_application::*;
}

/// Provider implementations
pub mod providers {
    pub use reposeek_providers::*;
}

/// Infrastructure layer - config, logging and wiring
pub mod infrastructure {
    pub use reposeek_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;
