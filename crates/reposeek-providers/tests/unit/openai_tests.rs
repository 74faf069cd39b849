//! OpenAI embedding and chat providers against a mock server

use std::time::Duration;

use mockito::{Matcher, Server};
use reposeek_domain::ports::{ChatCompletionProvider, EmbeddingProvider};
use reposeek_domain::{ChatRequest, ErrorKind};
use reposeek_providers::{OpenAIChatProvider, OpenAIEmbeddingProvider};
use serde_json::json;

fn embedder(base_url: String, model: &str) -> OpenAIEmbeddingProvider {
    OpenAIEmbeddingProvider::new(
        "test-key".to_string(),
        Some(base_url),
        model.to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

fn chat(base_url: String) -> OpenAIChatProvider {
    OpenAIChatProvider::new(
        "test-key".to_string(),
        Some(base_url),
        "gpt-3.5-turbo".to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    )
}

fn chat_request() -> ChatRequest {
    ChatRequest {
        system: "be brief".to_string(),
        user: "Question: what?".to_string(),
        temperature: 0.3,
        max_tokens: 200,
    }
}

#[test]
fn test_openai_dimensions_by_model() {
    for (model, dims) in [
        ("text-embedding-ada-002", 1536),
        ("text-embedding-3-small", 1536),
        ("text-embedding-3-large", 3072),
        ("unknown-model", 1536),
    ] {
        let provider = embedder("http://localhost".to_string(), model);
        assert_eq!(provider.dimensions(), dims, "model {model}");
    }
}

#[test]
fn test_openai_default_base_url() {
    let provider = OpenAIEmbeddingProvider::new(
        " key ".to_string(),
        None,
        "text-embedding-ada-002".to_string(),
        Duration::from_secs(5),
        reqwest::Client::new(),
    );
    assert_eq!(provider.base_url(), "https://api.openai.com/v1");
    assert_eq!(provider.provider_name(), "openai");
}

#[tokio::test]
async fn test_openai_embed_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "input": ["func main() {}"],
            "model": "text-embedding-ada-002",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": [{ "embedding": [0.25, -0.5, 1.0] }] }).to_string())
        .create_async()
        .await;

    let embedding = embedder(server.url(), "text-embedding-ada-002")
        .embed("func main() {}")
        .await
        .expect("embed should succeed");

    mock.assert_async().await;
    assert_eq!(embedding.vector, vec![0.25, -0.5, 1.0]);
    assert_eq!(embedding.dimensions, 3);
    assert_eq!(embedding.model, "text-embedding-ada-002");
}

#[tokio::test]
async fn test_openai_embed_auth_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(401)
        .with_body("invalid api key")
        .create_async()
        .await;

    let err = embedder(server.url(), "text-embedding-ada-002")
        .embed("text")
        .await
        .expect_err("401 should fail");

    assert_eq!(err.kind(), ErrorKind::Embedding);
    assert!(err.to_string().contains("authentication failed"));
}

#[tokio::test]
async fn test_openai_embed_count_mismatch() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/embeddings")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "data": [] }).to_string())
        .create_async()
        .await;

    let err = embedder(server.url(), "text-embedding-ada-002")
        .embed("text")
        .await
        .expect_err("empty data should fail");
    assert_eq!(err.kind(), ErrorKind::Embedding);
}

#[tokio::test]
async fn test_openai_embed_rejects_empty_text_without_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/embeddings")
        .expect(0)
        .create_async()
        .await;

    let err = embedder(server.url(), "text-embedding-ada-002")
        .embed("")
        .await
        .expect_err("empty text");

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::Embedding);
}

#[tokio::test]
async fn test_openai_chat_returns_first_choice() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-3.5-turbo",
            "max_tokens": 200,
            "messages": [
                { "role": "system", "content": "be brief" },
                { "role": "user", "content": "Question: what?" },
            ],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "  It serves HTTP.\n" } },
                    { "message": { "role": "assistant", "content": "ignored" } },
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let reply = chat(server.url())
        .complete(&chat_request())
        .await
        .expect("chat should succeed");

    mock.assert_async().await;
    assert_eq!(reply, "  It serves HTTP.\n");
}

#[tokio::test]
async fn test_openai_chat_failure_is_summary_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("slow down")
        .create_async()
        .await;

    let err = chat(server.url())
        .complete(&chat_request())
        .await
        .expect_err("429 should fail");

    assert_eq!(err.kind(), ErrorKind::Summary);
    assert!(err.to_string().contains("rate limit exceeded"));
}

#[tokio::test]
async fn test_openai_chat_without_choices() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "choices": [] }).to_string())
        .create_async()
        .await;

    let err = chat(server.url())
        .complete(&chat_request())
        .await
        .expect_err("no choices");
    assert_eq!(err.kind(), ErrorKind::Summary);
}
