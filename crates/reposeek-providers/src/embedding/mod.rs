//! Embedding Provider Implementations
//!
//! | Provider | Type |
//! |----------|------|
//! | OpenAIEmbeddingProvider | Cloud |
//! | NullEmbeddingProvider | Offline, deterministic |

pub mod helpers;
pub mod null;
pub mod openai;

pub use helpers::constructor;
pub use null::NullEmbeddingProvider;
pub use openai::OpenAIEmbeddingProvider;
