//! Search-Related Value Objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::CodeChunk;

/// Value Object: Validated Search Query
///
/// Produced by [`crate::SearchRequest::validate`]. All fields are guaranteed
/// non-empty and `limit` is positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Natural-language query text
    pub query: String,
    /// Canonical `owner/name` repository to search
    pub repository: String,
    /// Branch to search
    pub branch: String,
    /// Maximum number of chunks to return
    pub limit: usize,
}

/// Value Object: Search With Summary Response
///
/// `chunks` holds exactly the chunks that were shown to the language model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Chunks forwarded to the summarizer, in ranked order
    pub chunks: Vec<CodeChunk>,
    /// The language model's answer, verbatim
    pub summary: String,
    /// `repository`, `branch` and `query` of the originating request
    pub metadata: BTreeMap<String, String>,
}
