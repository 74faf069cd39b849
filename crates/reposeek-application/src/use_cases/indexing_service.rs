//! Indexing Service Use Case
//!
//! Clones a repository into an exclusive temporary directory, walks it and
//! removes the directory again whatever the outcome.

use std::sync::Arc;

use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::{EmbeddingProvider, RepositoryCloner, VectorStoreProvider};
use reposeek_domain::value_objects::{IndexJob, IndexingResult};
use reposeek_domain::IndexRepositoryRequest;
use tracing::{info, warn};

use crate::indexing::{IndexingOptions, RepositoryWalker};

/// Repository ingestion service
pub struct IndexingService {
    temp_dir_prefix: String,
    cloner: Arc<dyn RepositoryCloner>,
    walker: RepositoryWalker,
}

impl IndexingService {
    /// Create the service with its providers
    pub fn new(
        options: &IndexingOptions,
        cloner: Arc<dyn RepositoryCloner>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
    ) -> Self {
        Self {
            temp_dir_prefix: options.temp_dir_prefix.clone(),
            cloner,
            walker: RepositoryWalker::new(options, embedding_provider, vector_store),
        }
    }

    /// Validate a wire request and index the repository it names
    pub async fn index_repository(&self, request: IndexRepositoryRequest) -> Result<IndexingResult> {
        let job = request.validate()?;
        self.index(&job).await
    }

    /// Clone, walk and clean up
    ///
    /// Clone failures are fatal. The temporary directory is removed on every
    /// path out of this function.
    pub async fn index(&self, job: &IndexJob) -> Result<IndexingResult> {
        let temp_dir = tempfile::Builder::new()
            .prefix(&self.temp_dir_prefix)
            .tempdir()
            .map_err(|e| {
                Error::io_with_source(format!("failed to create temp directory: {e}"), e)
            })?;

        info!(
            url = %job.url,
            repository = %job.repository,
            branch = %job.branch,
            dir = %temp_dir.path().display(),
            "Indexing repository"
        );

        let outcome = match self
            .cloner
            .clone_repository(&job.url, temp_dir.path(), &job.branch)
            .await
        {
            Ok(()) => {
                self.walker
                    .walk(temp_dir.path(), &job.repository, &job.branch)
                    .await
            }
            Err(e) => Err(e),
        };

        let dir = temp_dir.path().display().to_string();
        if let Err(e) = temp_dir.close() {
            warn!(dir = %dir, error = %e, "Failed to remove temp directory");
        }

        outcome
    }
}
