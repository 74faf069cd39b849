//! Repository walk tests over temporary directory fixtures

use std::sync::Arc;

use reposeek_application::{IndexingOptions, RepositoryWalker};
use reposeek_domain::{ErrorKind, RepositoryId};

use crate::fakes::{RecordingEmbedder, RecordingStore, files, write_files};

fn repository() -> RepositoryId {
    RepositoryId::from_url("https://github.com/acme/widgets.git").expect("valid URL")
}

fn walker(
    options: &IndexingOptions,
    embedder: &Arc<RecordingEmbedder>,
    store: &Arc<RecordingStore>,
) -> RepositoryWalker {
    RepositoryWalker::new(options, embedder.clone(), store.clone())
}

#[tokio::test]
async fn test_walk_indexes_source_and_skips_noise() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[
            ("main.go", "package main\n\nfunc main() {}\n"),
            (".git/HEAD", "ref: refs/heads/main\n"),
        ]),
    );
    std::fs::write(dir.path().join("photo.png"), [0x89, b'P', b'N', b'G']).expect("write");

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    assert_eq!(result.entries_seen, 3);
    assert_eq!(result.files_processed, 1);
    assert_eq!(result.entries_skipped, 2);
    assert_eq!(result.chunks_stored, 1);
    assert!(result.errors.is_empty());

    let stored = store.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].file_path, "main.go");
    assert_eq!(stored[0].repository, "acme/widgets");
    assert_eq!(stored[0].branch, "main");
    assert_eq!(stored[0].language, "Go");
    assert_eq!(stored[0].content, "package main\n\nfunc main() {}\n");
    assert!(!stored[0].embedding.is_empty());
}

#[tokio::test]
async fn test_walk_uses_relative_slash_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[("internal/handlers/user.go", "package handlers\n")]),
    );

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "dev")
        .await
        .expect("walk should succeed");

    let stored = store.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].file_path, "internal/handlers/user.go");
    assert_eq!(stored[0].branch, "dev");
}

#[tokio::test]
async fn test_walk_prunes_hidden_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[
            (".github/workflows/ci.yml", "on: push\n"),
            (".env", "SECRET=1\n"),
        ]),
    );

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    // .env and .github; the pruned subtree is never visited
    assert_eq!(result.entries_seen, 2);
    assert_eq!(result.entries_skipped, 2);
    assert_eq!(result.files_processed, 0);
    assert!(store.stored().is_empty());
}

#[tokio::test]
async fn test_walk_skips_large_and_non_ascii_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let big = "x".repeat(64);
    write_files(
        dir.path(),
        &files(&[
            ("big.go", big.as_str()),
            ("accent.go", "// caf\u{e9}\n"),
            ("ok.go", "package ok\n"),
        ]),
    );

    let options = IndexingOptions {
        max_file_size: 32,
        ..IndexingOptions::default()
    };
    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&options, &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    assert_eq!(result.files_processed, 1);
    assert_eq!(result.entries_skipped, 2);
    assert_eq!(store.stored()[0].file_path, "ok.go");
}

#[tokio::test]
async fn test_walk_records_chunk_indices() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[("lib.py", "aaaa\nbbbb\ncccc\n")]),
    );

    let options = IndexingOptions {
        max_chunk_chars: 4,
        ..IndexingOptions::default()
    };
    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&options, &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    let stored = store.stored();
    assert_eq!(result.chunks_stored, 3);
    assert_eq!(
        stored.iter().map(|c| c.chunk_index).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );
    assert_eq!(stored[0].language, "Python");
    assert_eq!(stored[2].content, "cccc\n");
}

#[tokio::test]
async fn test_walk_never_embeds_whitespace_chunks() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(dir.path(), &files(&[("blank.go", "   \n\t\n")]));

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    assert_eq!(embedder.calls(), 0);
    assert_eq!(result.files_processed, 1);
    assert_eq!(result.chunks_stored, 0);
}

#[tokio::test]
async fn test_walk_continues_after_store_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[("a.go", "package a\n"), ("b.go", "package b\n")]),
    );

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::failing_for("a.go"));
    let result = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    assert_eq!(result.files_processed, 1);
    assert_eq!(result.entries_skipped, 1);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("a.go"));
    assert_eq!(store.stored()[0].file_path, "b.go");
}

#[tokio::test]
async fn test_walk_abandons_file_after_embedding_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_files(
        dir.path(),
        &files(&[("a.go", "first\nFAIL here\nthird\n")]),
    );

    let options = IndexingOptions {
        max_chunk_chars: 5,
        ..IndexingOptions::default()
    };
    let embedder = Arc::new(RecordingEmbedder::failing_on("FAIL"));
    let store = Arc::new(RecordingStore::default());
    let result = walker(&options, &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    // first chunk stored, the rest of the file abandoned
    assert_eq!(result.chunks_stored, 1);
    assert_eq!(result.files_processed, 0);
    assert_eq!(result.entries_skipped, 1);
    assert_eq!(result.errors.len(), 1);
}

#[tokio::test]
async fn test_walk_missing_root_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("gone");

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let err = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(&missing, &repository(), "main")
        .await
        .expect_err("missing root");

    assert_eq!(err.kind(), ErrorKind::Io);
    let message = err.to_string();
    assert!(message.contains("gone"), "{message}");
    assert!(message.contains("os error"), "{message}");
}

#[tokio::test]
async fn test_walk_empty_directory() {
    let dir = tempfile::tempdir().expect("tempdir");

    let embedder = Arc::new(RecordingEmbedder::default());
    let store = Arc::new(RecordingStore::default());
    let result = walker(&IndexingOptions::default(), &embedder, &store)
        .walk(dir.path(), &repository(), "main")
        .await
        .expect("walk should succeed");

    assert_eq!(result, reposeek_domain::IndexingResult::default());
}
