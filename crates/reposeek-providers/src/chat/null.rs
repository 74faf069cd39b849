//! Null chat provider

use async_trait::async_trait;

use reposeek_domain::error::Result;
use reposeek_domain::ports::ChatCompletionProvider;
use reposeek_domain::value_objects::ChatRequest;

use crate::constants::NULL_CHAT_REPLY;

/// Offline chat provider returning a fixed reply
#[derive(Debug, Default, Clone, Copy)]
pub struct NullChatProvider;

impl NullChatProvider {
    /// Create a new null chat provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChatCompletionProvider for NullChatProvider {
    async fn complete(&self, _request: &ChatRequest) -> Result<String> {
        Ok(NULL_CHAT_REPLY.to_string())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
