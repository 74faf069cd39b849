//! Repository walk
//!
//! Walks a checked-out repository in file-name order, classifies every entry
//! and pushes each accepted file through chunk, embed and store. Failures
//! below the root are recovered per file; only an inaccessible root aborts
//! the walk.

use std::path::{Component, Path};
use std::sync::Arc;

use reposeek_domain::constants::INDEXING_PROGRESS_INTERVAL;
use reposeek_domain::entities::{CodeChunk, RepositoryId};
use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::{EmbeddingProvider, VectorStoreProvider};
use reposeek_domain::value_objects::IndexingResult;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::{
    Classification, FileClassifier, IndexingOptions, language_for_path, split_into_chunks,
};

/// Accumulator for walk counters and recovered errors
#[derive(Default)]
struct IndexingProgress {
    result: IndexingResult,
}

impl IndexingProgress {
    fn skip(&mut self) {
        self.result.entries_skipped += 1;
    }

    fn record_error(&mut self, context: &str, path: &str, error: impl std::fmt::Display) {
        let error = error.to_string();
        warn!(path, error = %error, "{context}");
        self.result.errors.push(format!("{context} {path}: {error}"));
    }

    fn into_result(self) -> IndexingResult {
        self.result
    }
}

/// Walks a repository tree and indexes every accepted file
pub struct RepositoryWalker {
    classifier: FileClassifier,
    max_chunk_chars: usize,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    vector_store: Arc<dyn VectorStoreProvider>,
}

impl RepositoryWalker {
    /// Create a walker
    pub fn new(
        options: &IndexingOptions,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        vector_store: Arc<dyn VectorStoreProvider>,
    ) -> Self {
        Self {
            classifier: FileClassifier::new(options),
            max_chunk_chars: options.max_chunk_chars,
            embedding_provider,
            vector_store,
        }
    }

    /// Index every accepted file below `root`
    ///
    /// Returns `Io` when `root` is missing or unreadable. Anything else is
    /// logged, recorded in [`IndexingResult::errors`] and skipped.
    pub async fn walk(
        &self,
        root: &Path,
        repository: &RepositoryId,
        branch: &str,
    ) -> Result<IndexingResult> {
        let metadata = tokio::fs::metadata(root).await.map_err(|e| {
            Error::io_with_source(format!("cannot access {}: {e}", root.display()), e)
        })?;
        if !metadata.is_dir() {
            return Err(Error::io(format!("{} is not a directory", root.display())));
        }

        let repository = repository.to_string();
        let mut progress = IndexingProgress::default();
        let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();

        info!(root = %root.display(), repository = %repository, branch, "Walking repository");

        while let Some(entry) = entries.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(Error::io_with_source(
                        format!("cannot walk {}: {e}", root.display()),
                        e,
                    ));
                }
                Err(e) => {
                    let path = e
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    progress.result.entries_seen += 1;
                    progress.skip();
                    progress.record_error("Failed to access", &path, e);
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }
            progress.result.entries_seen += 1;

            let Some(relative) = relative_path(root, entry.path()) else {
                progress.skip();
                continue;
            };
            let is_dir = entry.file_type().is_dir();

            if let Classification::Skip(reason) = self.classifier.classify_entry(&relative, is_dir) {
                debug!(path = %relative, reason = %reason, "Skipping entry");
                progress.skip();
                if is_dir {
                    entries.skip_current_dir();
                }
                continue;
            }
            if is_dir || !entry.file_type().is_file() {
                continue;
            }

            if self
                .index_file(entry.path(), &relative, &repository, branch, &mut progress)
                .await
            {
                progress.result.files_processed += 1;
                if progress.result.files_processed % INDEXING_PROGRESS_INTERVAL == 0 {
                    info!(
                        files_processed = progress.result.files_processed,
                        chunks_stored = progress.result.chunks_stored,
                        "Indexing progress"
                    );
                }
            } else {
                progress.skip();
            }
        }

        let result = progress.into_result();
        info!(
            repository = %repository,
            entries_seen = result.entries_seen,
            entries_skipped = result.entries_skipped,
            files_processed = result.files_processed,
            chunks_stored = result.chunks_stored,
            "Repository walk complete"
        );
        Ok(result)
    }

    /// Read, classify, chunk and store one file; `false` means skipped
    async fn index_file(
        &self,
        path: &Path,
        relative: &str,
        repository: &str,
        branch: &str,
        progress: &mut IndexingProgress,
    ) -> bool {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => {
                if let Classification::Skip(reason) = self.classifier.classify_size(metadata.len())
                {
                    debug!(path = %relative, reason = %reason, "Skipping file");
                    return false;
                }
            }
            Err(e) => {
                progress.record_error("Failed to stat", relative, e);
                return false;
            }
        }

        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                progress.record_error("Failed to read", relative, e);
                return false;
            }
        };
        if let Classification::Skip(reason) = self.classifier.classify_content(&bytes) {
            debug!(path = %relative, reason = %reason, "Skipping file");
            return false;
        }
        let Ok(content) = String::from_utf8(bytes) else {
            debug!(path = %relative, "Skipping file with invalid UTF-8");
            return false;
        };

        let language = language_for_path(path);
        let chunks = split_into_chunks(&content, self.max_chunk_chars);
        debug!(path = %relative, language, chunks = chunks.len(), "Processing file");

        for (index, text) in chunks.into_iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }

            let chunk = CodeChunk::new(text, relative, repository, branch, language)
                .with_chunk_index(index);
            if let Err(e) = self.store_chunk(chunk).await {
                progress.record_error("Failed to index", relative, e);
                return false;
            }
            progress.result.chunks_stored += 1;
        }

        true
    }

    async fn store_chunk(&self, chunk: CodeChunk) -> Result<()> {
        let embedding = self.embedding_provider.embed(&chunk.content).await?;
        let chunk = chunk.with_embedding(embedding.vector);
        self.vector_store.store(&chunk).await
    }
}

/// Repository-relative path with `/` separators
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
