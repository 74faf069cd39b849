//! Application Layer - reposeek
//!
//! Use cases and the pure ingestion and ranking logic behind them.
//!
//! ## Architecture
//!
//! - [`indexing`] - file classification, chunking, language tagging and the
//!   repository walk
//! - [`search`] - result ranking, the summary filter and prompt rendering
//! - [`use_cases`] - services composing the above with the domain ports
//!
//! Vendors are reached only through the port traits in
//! `reposeek_domain::ports`; this crate never talks HTTP.

pub mod indexing;
pub mod search;
pub mod use_cases;

pub use indexing::{
    Classification, FileClassifier, IndexingOptions, RepositoryWalker, SkipReason,
    language_for_extension, language_for_path, split_into_chunks,
};
pub use search::{SummaryOptions, SummaryPrompt, filter_for_summary, rank_by_importance};
pub use use_cases::{IndexingService, SearchOptions, SearchService, ToolDispatcher};
