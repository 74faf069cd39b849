//! Ingestion value objects

use serde::{Deserialize, Serialize};

use crate::entities::RepositoryId;

/// Value Object: Validated Ingestion Job
///
/// Produced by [`crate::IndexRepositoryRequest::validate`]; the repository
/// identity is derived exactly once, here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexJob {
    /// Clone URL as supplied by the caller
    pub url: String,
    /// Identity derived from `url`
    pub repository: RepositoryId,
    /// Branch to index
    pub branch: String,
}

/// Value Object: Repository Walk Counters
///
/// Informational only. `entries_seen` counts every filesystem entry visited
/// below the root, directories included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexingResult {
    /// Entries visited below the root
    pub entries_seen: usize,
    /// Entries rejected by the classifier or skipped after a failure
    pub entries_skipped: usize,
    /// Files whose chunks were all stored
    pub files_processed: usize,
    /// Chunks persisted to the vector store
    pub chunks_stored: usize,
    /// Human-readable description of every recovered failure
    pub errors: Vec<String>,
}
