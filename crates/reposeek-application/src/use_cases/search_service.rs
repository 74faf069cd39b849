//! Search Service Use Case
//!
//! Query embedding, vector retrieval, importance ranking and the optional
//! language-model summary.

use std::collections::BTreeMap;
use std::sync::Arc;

use reposeek_domain::constants::DEFAULT_SEARCH_LIMIT;
use reposeek_domain::entities::CodeChunk;
use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::{ChatCompletionProvider, EmbeddingProvider, VectorStoreProvider};
use reposeek_domain::value_objects::{SearchQuery, SummaryResponse};
use tracing::{debug, info};

use crate::search::{SummaryOptions, SummaryPrompt, filter_for_summary, rank_by_importance};

/// Search settings
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Limit applied when a request does not carry one
    pub default_limit: usize,
    /// Summary settings
    pub summary: SummaryOptions,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_SEARCH_LIMIT,
            summary: SummaryOptions::default(),
        }
    }
}

/// Search service
pub struct SearchService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
    chat_provider: Arc<dyn ChatCompletionProvider>,
    options: SearchOptions,
}

impl SearchService {
    /// Create the service with its providers
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
        chat_provider: Arc<dyn ChatCompletionProvider>,
        options: SearchOptions,
    ) -> Self {
        Self {
            embedding_provider,
            vector_store,
            chat_provider,
            options,
        }
    }

    /// Limit applied to requests without one
    pub fn default_limit(&self) -> usize {
        self.options.default_limit
    }

    /// Ranked chunks for `query`, at most `query.limit`
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<CodeChunk>> {
        let embedding = self.embedding_provider.embed(&query.query).await?;
        let matches = self
            .vector_store
            .search(&embedding.vector, &query.repository, &query.branch, query.limit)
            .await?;

        info!(
            repository = %query.repository,
            branch = %query.branch,
            matches = matches.len(),
            "Vector search complete"
        );

        Ok(rank_by_importance(matches, query.limit))
    }

    /// Ranked search followed by a summary of the best chunks
    ///
    /// Any failure, including the language model call, fails the whole
    /// operation. Summary vendor failures are reported as `Error::Summary`.
    pub async fn search_with_summary(&self, query: &SearchQuery) -> Result<SummaryResponse> {
        let ranked = self.search(query).await?;
        let summary_options = &self.options.summary;
        let chunks = filter_for_summary(
            ranked,
            summary_options.min_content_chars,
            summary_options.top_k,
        );
        debug!(chunks = chunks.len(), "Requesting summary");

        let request = SummaryPrompt::build(&query.query, &chunks, summary_options);
        let summary = self
            .chat_provider
            .complete(&request)
            .await
            .map_err(|e| match e {
                Error::Summary { .. } => e,
                other => Error::summary(other.to_string()),
            })?;

        let metadata = BTreeMap::from([
            ("repository".to_string(), query.repository.clone()),
            ("branch".to_string(), query.branch.clone()),
            ("query".to_string(), query.query.clone()),
        ]);

        Ok(SummaryResponse {
            chunks,
            summary,
            metadata,
        })
    }
}
