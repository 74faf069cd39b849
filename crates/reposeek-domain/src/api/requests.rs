//! Request bodies

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BRANCH, DEFAULT_SEARCH_LIMIT};
use crate::entities::RepositoryId;
use crate::error::{Error, Result};
use crate::value_objects::{IndexJob, SearchQuery};

/// Search request body: `query`, `repository`, `branch?`, `limit?`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Natural-language query
    #[serde(default)]
    pub query: String,
    /// Canonical `owner/name` repository
    #[serde(default)]
    pub repository: String,
    /// Branch, `"main"` when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Result limit, 10 when absent; must be positive when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl SearchRequest {
    /// Create a request with default branch and limit
    pub fn new(query: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            repository: repository.into(),
            branch: None,
            limit: None,
        }
    }

    /// Set the branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Set the limit
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply defaults and check required fields
    pub fn validate(self) -> Result<SearchQuery> {
        self.validate_with_default_limit(DEFAULT_SEARCH_LIMIT)
    }

    /// Like [`SearchRequest::validate`], with a configured default limit
    pub fn validate_with_default_limit(self, default_limit: usize) -> Result<SearchQuery> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(Error::validation("query is required"));
        }

        let repository = self.repository.trim();
        if repository.is_empty() {
            return Err(Error::validation("repository is required"));
        }

        let limit = match self.limit {
            None => default_limit,
            Some(limit) if limit > 0 => usize::try_from(limit)
                .map_err(|_| Error::validation(format!("limit is out of range: {limit}")))?,
            Some(limit) => {
                return Err(Error::validation(format!(
                    "limit must be greater than zero, got {limit}"
                )));
            }
        };

        Ok(SearchQuery {
            query: query.to_string(),
            repository: repository.to_string(),
            branch: branch_or_default(self.branch),
            limit,
        })
    }
}

/// Indexing request body: `repoUrl`, `branch?`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRepositoryRequest {
    /// Clone URL of the repository
    #[serde(default)]
    pub repo_url: String,
    /// Branch, `"main"` when absent or empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

impl IndexRepositoryRequest {
    /// Create a request for the default branch
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            branch: None,
        }
    }

    /// Set the branch
    #[must_use]
    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    /// Check the URL and derive the repository identity
    pub fn validate(self) -> Result<IndexJob> {
        let url = self.repo_url.trim();
        if url.is_empty() {
            return Err(Error::validation("repoUrl is required"));
        }

        Ok(IndexJob {
            repository: RepositoryId::from_url(url)?,
            url: url.to_string(),
            branch: branch_or_default(self.branch),
        })
    }
}

/// One request per operation, tagged by tool name
///
/// ```rust
/// use reposeek_domain::ToolRequest;
///
/// let json = r#"{"tool":"vector_search","params":{"query":"router","repository":"acme/widgets"}}"#;
/// let request: ToolRequest = serde_json::from_str(json).unwrap();
/// assert!(matches!(request, ToolRequest::VectorSearch(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "params", rename_all = "snake_case")]
pub enum ToolRequest {
    /// Clone and index a repository
    IndexRepository(IndexRepositoryRequest),
    /// Ranked similarity search
    VectorSearch(SearchRequest),
    /// Ranked search followed by a language-model summary
    SearchWithSummary(SearchRequest),
}

impl ToolRequest {
    /// Tool name as it appears on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::IndexRepository(_) => "index_repository",
            Self::VectorSearch(_) => "vector_search",
            Self::SearchWithSummary(_) => "search_with_summary",
        }
    }
}

fn branch_or_default(branch: Option<String>) -> String {
    branch
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
}
