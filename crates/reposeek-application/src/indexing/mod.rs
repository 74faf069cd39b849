//! Repository ingestion
//!
//! | Component | Role |
//! |-----------|------|
//! | [`FileClassifier`] | Accept or skip a walk entry |
//! | [`split_into_chunks`] | Line-respecting fixed-size chunking |
//! | [`language_for_extension`] | Coarse language label |
//! | [`RepositoryWalker`] | Walk, classify, chunk, embed, store |

mod chunker;
mod classifier;
mod language;
mod walker;

pub use chunker::split_into_chunks;
pub use classifier::{Classification, FileClassifier, SkipReason};
pub use language::{language_for_extension, language_for_path};
pub use walker::RepositoryWalker;

use reposeek_domain::constants::{
    INDEXING_BINARY_SNIFF_LEN, INDEXING_MAX_CHUNK_CHARS, INDEXING_MAX_FILE_SIZE,
    INDEXING_TEMP_DIR_PREFIX,
};

/// Thresholds applied during ingestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexingOptions {
    /// Character budget of a single chunk
    pub max_chunk_chars: usize,
    /// Files larger than this many bytes are skipped
    pub max_file_size: u64,
    /// Number of leading bytes inspected for binary content
    pub binary_sniff_len: usize,
    /// Prefix of the temporary clone directory
    pub temp_dir_prefix: String,
}

impl Default for IndexingOptions {
    fn default() -> Self {
        Self {
            max_chunk_chars: INDEXING_MAX_CHUNK_CHARS,
            max_file_size: INDEXING_MAX_FILE_SIZE,
            binary_sniff_len: INDEXING_BINARY_SNIFF_LEN,
            temp_dir_prefix: INDEXING_TEMP_DIR_PREFIX.to_string(),
        }
    }
}
