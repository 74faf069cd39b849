//! Pinecone vector store provider
//!
//! Talks to a Pinecone index over its data-plane REST API:
//! `POST {host}/vectors/upsert` and `POST {host}/query`, authenticated with
//! the `Api-Key` header. Chunk fields travel as vector metadata.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

use reposeek_domain::entities::CodeChunk;
use reposeek_domain::error::{Error, Result};
use reposeek_domain::ports::VectorStoreProvider;

use super::{validate_chunk, validate_query, vector_id};
use crate::constants::{CONTENT_TYPE_JSON, PINECONE_API_KEY_HEADER};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<QueryMatch>,
}

#[derive(Debug, Deserialize)]
struct QueryMatch {
    #[serde(default)]
    id: String,
    #[serde(default)]
    score: f32,
    #[serde(default)]
    metadata: Option<Map<String, Value>>,
}

/// Pinecone-backed vector store
pub struct PineconeVectorStore {
    api_key: String,
    host: String,
    index_name: String,
    timeout: Duration,
    http_client: Client,
}

impl PineconeVectorStore {
    /// Create a store for the index served at `host`
    ///
    /// `host` may omit the scheme, in which case `https://` is assumed.
    pub fn new(
        api_key: String,
        host: &str,
        index_name: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            api_key: constructor::validate_api_key(&api_key),
            host: constructor::with_scheme(host),
            index_name,
            timeout,
            http_client,
        }
    }

    /// Data-plane base URL of the index
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Name of the index, informational
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    async fn post(&self, path: &str, payload: &Value) -> Result<Value> {
        let response = self
            .http_client
            .post(format!("{}{path}", self.host))
            .header(PINECONE_API_KEY_HEADER, &self.api_key)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| HttpResponseUtils::request_error("Pinecone", &e, Error::vector_store))?;

        HttpResponseUtils::check_and_parse(response, "Pinecone", Error::vector_store).await
    }
}

/// Rebuild a chunk from match metadata; `None` when a field is missing or
/// not a string
fn chunk_from_metadata(metadata: &Map<String, Value>) -> Option<CodeChunk> {
    let field = |name: &str| metadata.get(name).and_then(Value::as_str);

    let chunk = CodeChunk::new(
        field("content")?,
        field("filePath")?,
        field("repository")?,
        field("branch")?,
        field("language")?,
    );
    let index = metadata
        .get("chunkIndex")
        .and_then(Value::as_u64)
        .and_then(|i| usize::try_from(i).ok())
        .unwrap_or(0);

    Some(chunk.with_chunk_index(index))
}

#[async_trait]
impl VectorStoreProvider for PineconeVectorStore {
    async fn store(&self, chunk: &CodeChunk) -> Result<()> {
        validate_chunk(chunk)?;

        let id = vector_id(chunk);
        let payload = json!({
            "vectors": [{
                "id": id,
                "values": chunk.embedding,
                "metadata": {
                    "content": chunk.content,
                    "filePath": chunk.file_path,
                    "repository": chunk.repository,
                    "branch": chunk.branch,
                    "language": chunk.language,
                    "chunkIndex": chunk.chunk_index,
                },
            }],
        });

        debug!(id = %id, path = %chunk.file_path, "Upserting chunk");
        self.post("/vectors/upsert", &payload).await?;
        Ok(())
    }

    async fn search(
        &self,
        vector: &[f32],
        repository: &str,
        branch: &str,
        limit: usize,
    ) -> Result<Vec<CodeChunk>> {
        validate_query(vector, limit)?;

        let payload = json!({
            "vector": vector,
            "topK": limit,
            "filter": {
                "repository": { "$eq": repository },
                "branch": { "$eq": branch },
            },
            "includeMetadata": true,
            "includeValues": false,
        });

        let body = self.post("/query", &payload).await?;
        let response: QueryResponse = serde_json::from_value(body)
            .map_err(|e| Error::vector_store(format!("Pinecone query response invalid: {e}")))?;

        let total = response.matches.len();
        let chunks: Vec<CodeChunk> = response
            .matches
            .into_iter()
            .filter_map(|m| {
                let chunk = m.metadata.as_ref().and_then(chunk_from_metadata);
                if chunk.is_none() {
                    debug!(id = %m.id, score = m.score, "Dropping match with incomplete metadata");
                }
                chunk
            })
            .collect();

        info!(
            index = %self.index_name,
            repository,
            branch,
            matches = total,
            returned = chunks.len(),
            "Pinecone query complete"
        );
        Ok(chunks)
    }

    fn provider_name(&self) -> &str {
        "pinecone"
    }
}
