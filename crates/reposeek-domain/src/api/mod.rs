//! Boundary request and response shapes
//!
//! JSON bodies exchanged with whatever transport fronts the services. Wire
//! types are deliberately lenient (missing fields deserialize to empty) so
//! that every problem surfaces as a [`crate::Error::Validation`] from
//! `validate()` instead of a transport-level parse failure.

/// Incoming request bodies and the tool request union
pub mod requests;
/// Response envelope
pub mod response;

pub use requests::{IndexRepositoryRequest, SearchRequest, ToolRequest};
pub use response::ApiResponse;
