//! Tool request routing

use std::sync::Arc;

use reposeek_domain::api::{ApiResponse, ToolRequest};
use reposeek_domain::error::Result;
use serde_json::{Value, json};
use tracing::{info, warn};

use super::{IndexingService, SearchService};

/// Routes tool requests to the services and wraps every outcome in an
/// [`ApiResponse`] envelope
#[derive(Clone)]
pub struct ToolDispatcher {
    indexing: Arc<IndexingService>,
    search: Arc<SearchService>,
}

impl ToolDispatcher {
    /// Create a dispatcher over shared services
    pub fn new(indexing: Arc<IndexingService>, search: Arc<SearchService>) -> Self {
        Self { indexing, search }
    }

    /// Execute `request`; failures become `success = false` with the error
    /// message preserved
    pub async fn dispatch(&self, request: ToolRequest) -> ApiResponse<Value> {
        let tool = request.name();
        info!(tool, "Dispatching tool request");

        match self.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(tool, error = %e, "Tool request failed");
                ApiResponse::error(e.to_string())
            }
        }
    }

    async fn execute(&self, request: ToolRequest) -> Result<ApiResponse<Value>> {
        match request {
            ToolRequest::IndexRepository(params) => {
                let job = params.validate()?;
                let result = self.indexing.index(&job).await?;
                let data = json!({
                    "repository": job.repository.to_string(),
                    "branch": job.branch,
                    "result": serde_json::to_value(&result)?,
                });
                Ok(ApiResponse::ok_with_message(
                    data,
                    format!("Repository {} indexed successfully", job.repository),
                ))
            }
            ToolRequest::VectorSearch(params) => {
                let query = params.validate_with_default_limit(self.search.default_limit())?;
                let chunks = self.search.search(&query).await?;
                Ok(ApiResponse::ok(json!({ "chunks": serde_json::to_value(&chunks)? })))
            }
            ToolRequest::SearchWithSummary(params) => {
                let query = params.validate_with_default_limit(self.search.default_limit())?;
                let response = self.search.search_with_summary(&query).await?;
                Ok(ApiResponse::ok(serde_json::to_value(&response)?))
            }
        }
    }
}
