//! Error Extension Tests

use std::io;

use reposeek_domain::ErrorKind;
use reposeek_domain::error::{Error, Result};
use reposeek_infrastructure::error_ext::ErrorContext;

fn not_found() -> std::result::Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "file not found"))
}

#[test]
fn test_io_context_keeps_source() {
    let result: Result<()> = not_found().io_context("failed to read file");

    match result {
        Err(Error::Io { message, source }) => {
            assert_eq!(message, "failed to read file: file not found");
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context() {
    let err = not_found().config_context("reading config").unwrap_err();

    assert!(matches!(err, Error::Config { source: Some(_), .. }));
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(
        err.to_string(),
        "Configuration error: reading config: file not found"
    );
}

#[test]
fn test_io_context_passes_success_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.io_context("never used").unwrap(), 7);
}
