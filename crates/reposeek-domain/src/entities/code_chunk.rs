//! Code Chunk Entity

use serde::{Deserialize, Serialize};

/// Entity: Indexed Code Chunk
///
/// One contiguous, non-overlapping run of lines from a repository file.
/// Chunks are created during ingestion, handed to the vector store, and
/// never mutated afterwards.
///
/// ## Business Rules
///
/// - `content` is non-empty text that passed the binary filters
/// - `file_path` is repository-relative and slash-separated
/// - `repository` is the canonical `owner/name` string
/// - `embedding` is populated for chunks being stored and left empty on
///   search results
///
/// ## Example
///
/// ```rust
/// use reposeek_domain::CodeChunk;
///
/// let chunk = CodeChunk::new("package main", "main.go", "acme/widgets", "main", "Go");
/// assert!(chunk.embedding.is_empty());
/// assert_eq!(chunk.file_path, "main.go");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChunk {
    /// Chunk text
    pub content: String,
    /// Repository-relative path of the source file
    pub file_path: String,
    /// Canonical `owner/name` repository identity
    pub repository: String,
    /// Branch the chunk was indexed from
    pub branch: String,
    /// Coarse language label of the source file
    pub language: String,
    /// Position of the chunk within its file, starting at zero
    #[serde(default)]
    pub chunk_index: usize,
    /// Embedding vector; empty on result chunks
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedding: Vec<f32>,
}

impl CodeChunk {
    /// Create a chunk without an embedding
    pub fn new(
        content: impl Into<String>,
        file_path: impl Into<String>,
        repository: impl Into<String>,
        branch: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            file_path: file_path.into(),
            repository: repository.into(),
            branch: branch.into(),
            language: language.into(),
            chunk_index: 0,
            embedding: Vec::new(),
        }
    }

    /// Set the position of the chunk within its file
    #[must_use]
    pub fn with_chunk_index(mut self, chunk_index: usize) -> Self {
        self.chunk_index = chunk_index;
        self
    }

    /// Natural vector key: `"{repository}-{file_path}-{chunk_index}"`
    ///
    /// Unique per chunk, so sibling chunks of one file never overwrite each
    /// other. Stores with key length limits hash it.
    pub fn vector_key(&self) -> String {
        format!("{}-{}-{}", self.repository, self.file_path, self.chunk_index)
    }

    /// Attach an embedding vector
    #[must_use]
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = embedding;
        self
    }
}
