//! Git CLI cloner

use reposeek_domain::ErrorKind;
use reposeek_domain::ports::RepositoryCloner;
use reposeek_providers::GitCliCloner;

#[test]
fn test_checkout_only_for_non_default_branches() {
    assert!(!GitCliCloner::needs_checkout(""));
    assert!(!GitCliCloner::needs_checkout("main"));
    assert!(!GitCliCloner::needs_checkout("master"));
    assert!(GitCliCloner::needs_checkout("develop"));
}

#[tokio::test]
async fn test_clone_failure_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-repo");

    let err = GitCliCloner::new()
        .clone_repository(&missing.to_string_lossy(), &dir.path().join("out"), "main")
        .await
        .expect_err("clone of a missing repository");

    assert_eq!(err.kind(), ErrorKind::Io);
}

#[tokio::test]
async fn test_missing_git_binary_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");

    let err = GitCliCloner::with_binary("/nonexistent/git-binary")
        .clone_repository("https://example.invalid/acme/widgets.git", dir.path(), "main")
        .await
        .expect_err("missing binary");

    assert_eq!(err.kind(), ErrorKind::Io);
    let message = err.to_string();
    assert!(message.contains("/nonexistent/git-binary"), "{message}");
    assert!(message.contains("os error"), "{message}");
}
