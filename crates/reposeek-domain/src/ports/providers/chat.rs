use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::ChatRequest;

/// Chat Completion Interface
///
/// Sends a rendered prompt to a language model and returns the text of the
/// first choice verbatim. Failures are reported as `Error::Summary`; there
/// are no retries at this layer.
#[async_trait]
pub trait ChatCompletionProvider: Send + Sync {
    /// Complete `request` and return the reply text
    async fn complete(&self, request: &ChatRequest) -> Result<String>;

    /// Provider identifier (e.g. "openai", "null")
    fn provider_name(&self) -> &str;
}
