//! Chat completion request

use serde::{Deserialize, Serialize};

/// Value Object: Chat Completion Request
///
/// Everything a chat completion vendor needs to answer a summary request.
/// The prompt text is rendered by the application layer; providers forward
/// it unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// System instruction
    pub system: String,
    /// Rendered user prompt
    pub user: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens in the reply
    pub max_tokens: u32,
}
