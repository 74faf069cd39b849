//! In-memory vector store provider
//!
//! Non-persistent storage for local runs and tests. Vectors are keyed by
//! [`super::vector_id`], so re-indexing a repository overwrites its chunks.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use reposeek_domain::entities::CodeChunk;
use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::VectorStoreProvider;

use super::{validate_chunk, validate_query, vector_id};

/// In-memory vector store provider
#[derive(Clone, Default)]
pub struct InMemoryVectorStoreProvider {
    vectors: Arc<DashMap<String, CodeChunk>>,
}

impl InMemoryVectorStoreProvider {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the store holds no vectors
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

#[async_trait]
impl VectorStoreProvider for InMemoryVectorStoreProvider {
    async fn store(&self, chunk: &CodeChunk) -> Result<()> {
        validate_chunk(chunk)?;
        self.vectors.insert(vector_id(chunk), chunk.clone());
        Ok(())
    }

    async fn search(
        &self,
        vector: &[f32],
        repository: &str,
        branch: &str,
        limit: usize,
    ) -> Result<Vec<CodeChunk>> {
        validate_query(vector, limit)?;

        let query_norm = compute_norm(vector);

        // min-heap of the best `limit` scores
        let mut heap: BinaryHeap<ScoredItem> = BinaryHeap::with_capacity(limit + 1);

        for entry in self.vectors.iter() {
            let chunk = entry.value();
            if chunk.repository != repository || chunk.branch != branch {
                continue;
            }
            if chunk.embedding.len() != vector.len() {
                return Err(Error::vector_store(format!(
                    "dimension mismatch: query has {}, stored vector has {}",
                    vector.len(),
                    chunk.embedding.len()
                )));
            }

            let score = cosine_similarity_with_norm(vector, &chunk.embedding, query_norm);
            if heap.len() < limit {
                heap.push(ScoredItem {
                    score,
                    key: entry.key().clone(),
                });
            } else if heap.peek().is_some_and(|min| score > min.score) {
                heap.pop();
                heap.push(ScoredItem {
                    score,
                    key: entry.key().clone(),
                });
            }
        }

        let mut items = heap.into_vec();
        items.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.key.cmp(&b.key))
        });

        Ok(items
            .into_iter()
            .filter_map(|item| {
                self.vectors.get(&item.key).map(|chunk| {
                    let mut chunk = chunk.value().clone();
                    chunk.embedding.clear();
                    chunk
                })
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}

#[derive(PartialEq)]
struct ScoredItem {
    score: f32,
    key: String,
}

impl Eq for ScoredItem {}

impl Ord for ScoredItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: smallest score on top
        other
            .score
            .partial_cmp(&self.score)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for ScoredItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute the L2 norm of a vector
fn compute_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine similarity with precomputed query norm, normalized to [0, 1]
fn cosine_similarity_with_norm(a: &[f32], b: &[f32], norm_a: f32) -> f32 {
    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_b = compute_norm(b);

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b) + 1.0) / 2.0
    }
}
