//! Unit tests for the CodeChunk entity

use reposeek_domain::CodeChunk;

#[test]
fn test_code_chunk_serializes_camel_case() {
    let chunk = CodeChunk::new("package main", "cmd/main.go", "acme/widgets", "main", "Go");
    let json = serde_json::to_value(&chunk).expect("serialization should succeed");

    assert_eq!(json["filePath"], "cmd/main.go");
    assert_eq!(json["repository"], "acme/widgets");
    assert!(json.get("file_path").is_none());
}

#[test]
fn test_code_chunk_omits_empty_embedding() {
    let chunk = CodeChunk::new("x", "a.go", "acme/widgets", "main", "Go");
    let json = serde_json::to_value(&chunk).expect("serialization should succeed");
    assert!(json.get("embedding").is_none());

    let embedded = chunk.with_embedding(vec![0.5, 0.25]);
    let json = serde_json::to_value(&embedded).expect("serialization should succeed");
    assert_eq!(json["embedding"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_code_chunk_deserializes_without_embedding() {
    let json = r#"{"content":"x","filePath":"a.go","repository":"o/n","branch":"main","language":"Go"}"#;
    let chunk: CodeChunk = serde_json::from_str(json).expect("deserialization should succeed");

    assert!(chunk.embedding.is_empty());
    assert_eq!(chunk.language, "Go");
}

#[test]
fn test_vector_key_distinguishes_sibling_chunks() {
    let first = CodeChunk::new("a", "main.go", "acme/widgets", "main", "Go");
    let second = first.clone().with_chunk_index(1);

    assert_eq!(first.vector_key(), "acme/widgets-main.go-0");
    assert_eq!(second.vector_key(), "acme/widgets-main.go-1");
}
