//! Command parsing and execution against offline providers

use clap::Parser;
use reposeek::cli::{Cli, Command, QueryArgs, execute};
use reposeek::infrastructure::AppContext;
use reposeek::infrastructure::config::AppConfig;
use reposeek::{ErrorKind, SearchRequest, ToolRequest};

fn offline_context() -> AppContext {
    let mut config = AppConfig::default();
    config.providers.embedding.provider = "null".to_string();
    config.providers.vector_store.provider = "in_memory".to_string();
    config.providers.chat.provider = "null".to_string();
    AppContext::from_config(&config).expect("offline wiring")
}

#[test]
fn test_parse_search_with_options() {
    let cli = Cli::try_parse_from([
        "reposeek",
        "--config",
        "custom.toml",
        "search",
        "where is auth handled",
        "--repository",
        "acme/api",
        "--branch",
        "dev",
        "--limit",
        "5",
    ])
    .expect("valid arguments");

    assert_eq!(
        cli.config.as_deref(),
        Some(std::path::Path::new("custom.toml"))
    );
    assert_eq!(
        cli.command,
        Command::Search(QueryArgs {
            query: "where is auth handled".to_string(),
            repository: "acme/api".to_string(),
            branch: Some("dev".to_string()),
            limit: Some(5),
        })
    );
}

#[test]
fn test_parse_index_and_global_config_after_subcommand() {
    let cli = Cli::try_parse_from([
        "reposeek",
        "index",
        "https://github.com/acme/api.git",
        "--config",
        "other.toml",
    ])
    .expect("valid arguments");

    assert!(cli.config.is_some());
    assert_eq!(
        cli.command.into_tool_request().expect("tool request").name(),
        "index_repository"
    );
}

#[test]
fn test_search_requires_repository() {
    assert!(Cli::try_parse_from(["reposeek", "search", "query"]).is_err());
}

#[test]
fn test_ask_maps_to_summary_tool() {
    let cli = Cli::try_parse_from(["reposeek", "ask", "what does it do", "-r", "acme/api"])
        .expect("valid arguments");

    let request = cli.command.into_tool_request().expect("tool request");
    assert_eq!(
        request,
        ToolRequest::SearchWithSummary(SearchRequest::new("what does it do", "acme/api"))
    );
}

#[test]
fn test_dispatch_rejects_malformed_json() {
    let err = Command::Dispatch {
        request: "{\"tool\": \"drop_tables\"}".to_string(),
    }
    .into_tool_request()
    .expect_err("unknown tool");

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[tokio::test]
async fn test_execute_dispatch_search() {
    let context = offline_context();
    let command = Command::Dispatch {
        request: r#"{"tool": "vector_search", "params": {"query": "main", "repository": "acme/api"}}"#
            .to_string(),
    };

    let response = execute(&context, command).await;

    assert!(response.success, "{}", response.message);
    assert_eq!(response.data.expect("data")["chunks"], serde_json::json!([]));
}

#[tokio::test]
async fn test_execute_reports_validation_failure() {
    let context = offline_context();
    let command = Command::Search(QueryArgs {
        query: "main".to_string(),
        repository: "acme/api".to_string(),
        branch: None,
        limit: Some(-1),
    });

    let response = execute(&context, command).await;

    assert!(!response.success);
    assert!(response.data.is_none());
    assert!(response.message.contains("Validation error"));
}

#[tokio::test]
async fn test_execute_ask_with_null_chat() {
    let context = offline_context();
    let command = Command::Ask(QueryArgs {
        query: "what does it do".to_string(),
        repository: "acme/api".to_string(),
        branch: Some("main".to_string()),
        limit: None,
    });

    let response = execute(&context, command).await;

    assert!(response.success, "{}", response.message);
    let data = response.data.expect("data");
    assert_eq!(data["metadata"]["repository"], "acme/api");
    assert!(data["summary"].as_str().is_some_and(|s| !s.is_empty()));
}
