//! OpenAI Embedding Provider
//!
//! Implements the EmbeddingProvider port using OpenAI's embedding API.
//! Supports text-embedding-ada-002, text-embedding-3-small and
//! text-embedding-3-large.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::EmbeddingProvider;
use reposeek_domain::value_objects::Embedding;

use crate::constants::{
    CONTENT_TYPE_JSON, EMBEDDING_DIMENSION_OPENAI_ADA, EMBEDDING_DIMENSION_OPENAI_LARGE,
    EMBEDDING_DIMENSION_OPENAI_SMALL, OPENAI_DEFAULT_BASE_URL,
};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// OpenAI embedding provider
///
/// ## Example
///
/// ```rust,no_run
/// use reposeek_providers::embedding::OpenAIEmbeddingProvider;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// let provider = OpenAIEmbeddingProvider::new(
///     "sk-your-api-key".to_string(),
///     None,
///     "text-embedding-ada-002".to_string(),
///     Duration::from_secs(30),
///     Client::new(),
/// );
/// ```
pub struct OpenAIEmbeddingProvider {
    api_key: String,
    base_url: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl OpenAIEmbeddingProvider {
    /// Create a new OpenAI embedding provider
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `base_url` - Optional custom base URL (defaults to the public API)
    /// * `model` - Model name (e.g., "text-embedding-ada-002")
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
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

    /// Send embedding request and get response data
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url()))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error("OpenAI", &e, Error::embedding))?;

        HttpResponseUtils::check_and_parse(response, "OpenAI", Error::embedding).await
    }

    /// Parse one embedding, narrowing the vendor's float64 values to f32
    #[allow(clippy::cast_possible_truncation)]
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let values = item["embedding"].as_array().ok_or_else(|| {
            Error::embedding(format!("Invalid embedding format for text {index}"))
        })?;

        let vector = values
            .iter()
            .map(|v| {
                v.as_f64()
                    .map(|f| f as f32)
                    .ok_or_else(|| Error::embedding(format!("Non-numeric value in embedding {index}")))
            })
            .collect::<Result<Vec<f32>>>()?;

        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAIEmbeddingProvider {
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let response_data = self.fetch_embeddings(texts).await?;

        let data = response_data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("Invalid response format: missing data array"))?;

        if data.len() != texts.len() {
            return Err(Error::embedding(format!(
                "Response data count mismatch: expected {}, got {}",
                texts.len(),
                data.len()
            )));
        }

        data.iter()
            .enumerate()
            .map(|(i, item)| self.parse_embedding(i, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        match self.model.as_str() {
            "text-embedding-3-large" => EMBEDDING_DIMENSION_OPENAI_LARGE,
            "text-embedding-3-small" => EMBEDDING_DIMENSION_OPENAI_SMALL,
            _ => EMBEDDING_DIMENSION_OPENAI_ADA,
        }
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
