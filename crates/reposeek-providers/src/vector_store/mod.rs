//! Vector Store Provider Implementations
//!
//! | Provider | Type |
//! |----------|------|
//! | PineconeVectorStore | Cloud, REST |
//! | InMemoryVectorStoreProvider | Local, non-persistent |
//!
//! Both scope searches to one repository and branch and key vectors by
//! [`vector_id`].

pub mod in_memory;
pub mod pinecone;

pub use in_memory::InMemoryVectorStoreProvider;
pub use pinecone::PineconeVectorStore;

use reposeek_domain::entities::CodeChunk;
use reposeek_domain::error::{Error, Result};
use sha2::{Digest, Sha256};

use crate::constants::PINECONE_VECTOR_ID_MAX_LEN;

/// Stable vector id for a chunk
///
/// The natural key `"{repository}-{file_path}-{chunk_index}"` when it fits
/// in 100 bytes, otherwise its SHA-256 hex digest.
pub fn vector_id(chunk: &CodeChunk) -> String {
    let key = chunk.vector_key();
    if key.len() > PINECONE_VECTOR_ID_MAX_LEN {
        hex::encode(Sha256::digest(key.as_bytes()))
    } else {
        key
    }
}

/// Reject chunks that cannot be stored
fn validate_chunk(chunk: &CodeChunk) -> Result<()> {
    if chunk.content.trim().is_empty() {
        return Err(Error::validation(format!(
            "chunk content is empty: {}",
            chunk.file_path
        )));
    }
    if chunk.embedding.is_empty() {
        return Err(Error::validation(format!(
            "chunk has no embedding: {}",
            chunk.file_path
        )));
    }
    Ok(())
}

/// Reject queries that cannot be answered
fn validate_query(vector: &[f32], limit: usize) -> Result<()> {
    if vector.is_empty() {
        return Err(Error::validation("query vector is empty"));
    }
    if limit == 0 {
        return Err(Error::validation("search limit must be greater than zero"));
    }
    Ok(())
}
