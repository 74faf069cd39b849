//! Use Cases
//!
//! | Service | Operation |
//! |---------|-----------|
//! | [`IndexingService`] | Clone a repository into a temporary directory and index it |
//! | [`SearchService`] | Ranked similarity search, optionally summarized |
//! | [`ToolDispatcher`] | Route a [`reposeek_domain::ToolRequest`] to the services above |

/// Tool request routing
pub mod dispatcher;
/// Repository ingestion use case
pub mod indexing_service;
/// Search use case
pub mod search_service;

pub use dispatcher::ToolDispatcher;
pub use indexing_service::IndexingService;
pub use search_service::{SearchOptions, SearchService};
