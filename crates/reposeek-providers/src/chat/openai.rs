//! OpenAI Chat Completion Provider

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::ChatCompletionProvider;
use reposeek_domain::value_objects::ChatRequest;

use crate::constants::{CONTENT_TYPE_JSON, OPENAI_DEFAULT_BASE_URL};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// OpenAI chat completion provider
///
/// Sends the system and user messages of a [`ChatRequest`] to
/// `POST {base}/chat/completions` and returns the first choice verbatim.
pub struct OpenAIChatProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIChatProvider {
    /// Create a new OpenAI chat provider
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            base_url: constructor::validate_url(base_url),
            model,
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(OPENAI_DEFAULT_BASE_URL)
    }

    /// Get the model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatCompletionProvider for OpenAIChatProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String> {
        let payload = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user", "content": request.user },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        debug!(model = %self.model, prompt_chars = request.user.len(), "Requesting chat completion");

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error("OpenAI", &e, Error::summary))?;

        let body = HttpResponseUtils::check_and_parse(response, "OpenAI", Error::summary).await?;

        body["choices"][0]["message"]["content"]
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| Error::summary("OpenAI response contained no choices"))
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
