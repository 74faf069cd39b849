//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`CodeChunk`] | A line-bounded slice of a repository file, ready for indexing |
//! | [`RepositoryId`] | Canonical `owner/name` identity of a source repository |

/// Indexed unit of repository text
pub mod code_chunk;
/// Repository identity derived from a clone URL
pub mod repository;

pub use code_chunk::CodeChunk;
pub use repository::RepositoryId;
