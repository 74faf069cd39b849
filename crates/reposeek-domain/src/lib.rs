//! # reposeek - Domain Layer
//!
//! Core types shared by every layer of the repository search backend:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`CodeChunk`], [`RepositoryId`] |
//! | [`value_objects`] | Embeddings, validated queries, indexing results, chat requests |
//! | [`api`] | Wire request/response shapes and the [`ToolRequest`] tagged union |
//! | [`ports`] | Capability traits implemented by providers |
//! | [`error`] | The domain [`Error`] enum and [`Result`] alias |
//!
//! This crate has no knowledge of vendors, HTTP, or the filesystem.

pub mod api;
pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use api::{ApiResponse, IndexRepositoryRequest, SearchRequest, ToolRequest};
pub use entities::{CodeChunk, RepositoryId};
pub use error::{Error, ErrorKind, Result};
pub use value_objects::{
    ChatRequest, Embedding, IndexJob, IndexingResult, SearchQuery, SummaryResponse,
};
