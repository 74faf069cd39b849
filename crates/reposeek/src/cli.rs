//! Command line interface
//!
//! Every subcommand becomes a [`ToolRequest`] routed through the dispatcher,
//! so the CLI prints the same `{success, data, message}` envelope a tool
//! client receives.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reposeek_domain::api::{ApiResponse, IndexRepositoryRequest, SearchRequest, ToolRequest};
use reposeek_domain::error::{Error, Result};
use reposeek_infrastructure::AppContext;
use serde_json::Value;

/// Command line interface for reposeek
#[derive(Parser, Debug)]
#[command(name = "reposeek")]
#[command(about = "Semantic search over code repositories")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clone a repository and index its text files
    Index {
        /// Repository URL (`https://github.com/owner/name.git`)
        repo_url: String,
        /// Branch to index
        #[arg(short, long)]
        branch: Option<String>,
    },
    /// Ranked similarity search over an indexed repository
    Search(QueryArgs),
    /// Ranked search followed by a language-model answer
    Ask(QueryArgs),
    /// Execute a raw tool request (`{"tool": "...", "params": {...}}`)
    Dispatch {
        /// Tool request JSON
        request: String,
    },
}

/// Arguments shared by `search` and `ask`
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct QueryArgs {
    /// Natural-language query
    pub query: String,
    /// Repository identity (`owner/name`)
    #[arg(short, long)]
    pub repository: String,
    /// Branch to search
    #[arg(short, long)]
    pub branch: Option<String>,
    /// Maximum number of results
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<i64>,
}

impl QueryArgs {
    fn into_request(self) -> SearchRequest {
        SearchRequest {
            query: self.query,
            repository: self.repository,
            branch: self.branch,
            limit: self.limit,
        }
    }
}

impl Command {
    /// Tool request equivalent to this subcommand
    pub fn into_tool_request(self) -> Result<ToolRequest> {
        match self {
            Self::Index { repo_url, branch } => Ok(ToolRequest::IndexRepository(
                IndexRepositoryRequest {
                    repo_url,
                    branch,
                },
            )),
            Self::Search(args) => Ok(ToolRequest::VectorSearch(args.into_request())),
            Self::Ask(args) => Ok(ToolRequest::SearchWithSummary(args.into_request())),
            Self::Dispatch { request } => serde_json::from_str(&request)
                .map_err(|e| Error::validation(format!("Invalid tool request: {e}"))),
        }
    }
}

/// Run `command` against the wired services
pub async fn execute(context: &AppContext, command: Command) -> ApiResponse<Value> {
    match command.into_tool_request() {
        Ok(request) => context.dispatcher.dispatch(request).await,
        Err(e) => ApiResponse::error(e.to_string()),
    }
}
