//! Null embedding provider for offline runs and tests
//!
//! Deterministic, hash-based vectors. No network access.

use async_trait::async_trait;

use reposeek_domain::error::Result;
use reposeek_domain::ports::EmbeddingProvider;
use reposeek_domain::value_objects::Embedding;

use crate::constants::EMBEDDING_DIMENSION_NULL;

/// Null embedding provider
///
/// The same text always yields the same vector, so an offline index built
/// with this provider can be searched with it again.
///
/// # Example
///
/// ```rust
/// use reposeek_providers::embedding::NullEmbeddingProvider;
/// use reposeek_domain::ports::EmbeddingProvider;
///
/// let provider = NullEmbeddingProvider::new();
/// assert_eq!(provider.dimensions(), 384);
/// assert_eq!(provider.provider_name(), "null");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    fn vector_for(text: &str) -> Vec<f32> {
        let hash = text
            .chars()
            .fold(0u32, |acc, c| acc.wrapping_mul(31).wrapping_add(c as u32));
        #[allow(clippy::cast_precision_loss)]
        let base_value = (hash % 1000) as f32 / 1000.0;

        (0..EMBEDDING_DIMENSION_NULL)
            .map(|j| {
                #[allow(clippy::cast_precision_loss)]
                let variation = (((hash % 97) as f32 + j as f32) * 0.01).sin();
                (base_value + variation * 0.1).clamp(0.0, 1.0)
            })
            .collect()
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts
            .iter()
            .map(|text| Embedding::new(Self::vector_for(text), "null"))
            .collect())
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSION_NULL
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
