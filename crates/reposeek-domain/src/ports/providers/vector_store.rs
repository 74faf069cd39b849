use async_trait::async_trait;

use crate::entities::CodeChunk;
use crate::error::Result;

/// Vector Storage Interface
///
/// Persists embedded chunks and answers nearest-neighbour queries scoped to
/// one repository and branch.
///
/// # Contract
///
/// - `store` fails with `Validation` when the chunk has empty content or an
///   empty embedding
/// - `search` fails with `Validation` when the vector is empty or `limit` is
///   zero, and returns at most `limit` chunks in descending similarity order
///   with `embedding` left empty
/// - matches whose stored metadata is incomplete are dropped, never returned
///   with empty fields
#[async_trait]
pub trait VectorStoreProvider: Send + Sync {
    /// Persist one embedded chunk
    async fn store(&self, chunk: &CodeChunk) -> Result<()>;

    /// Nearest chunks for `vector` within `repository` and `branch`
    async fn search(
        &self,
        vector: &[f32],
        repository: &str,
        branch: &str,
        limit: usize,
    ) -> Result<Vec<CodeChunk>>;

    /// Provider identifier (e.g. "pinecone", "in_memory")
    fn provider_name(&self) -> &str;
}
