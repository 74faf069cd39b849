//! Infrastructure Provider Interfaces

/// Repository cloning port
pub mod cloner;

pub use cloner::RepositoryCloner;
