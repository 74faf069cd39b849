use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::value_objects::Embedding;

/// Text Embedding Interface
///
/// Turns text into fixed-length float32 vectors. Providers implement
/// `embed_batch`; `embed` delegates to it with a single item after rejecting
/// empty input.
///
/// # Example
///
/// ```ignore
/// use reposeek_domain::ports::EmbeddingProvider;
///
/// let embedding = provider.embed("func main() {}").await?;
/// assert_eq!(embedding.dimensions, provider.dimensions());
/// ```
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(Error::embedding("cannot embed empty text"));
        }

        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| Error::embedding("No embedding returned"))
    }

    /// Embed several texts, one vector per input in input order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Dimensionality of produced vectors
    fn dimensions(&self) -> usize;

    /// Provider identifier (e.g. "openai", "null")
    fn provider_name(&self) -> &str;
}
