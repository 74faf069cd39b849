//! Unit tests for the domain error type

use reposeek_domain::{Error, ErrorKind};

#[test]
fn test_error_kinds() {
    assert_eq!(Error::validation("x").kind(), ErrorKind::Validation);
    assert_eq!(Error::io("x").kind(), ErrorKind::Io);
    assert_eq!(Error::embedding("x").kind(), ErrorKind::Embedding);
    assert_eq!(Error::vector_store("x").kind(), ErrorKind::VectorStore);
    assert_eq!(Error::summary("x").kind(), ErrorKind::Summary);
    assert_eq!(Error::config("x").kind(), ErrorKind::Config);
    assert_eq!(
        Error::network_with_source("x", std::io::Error::other("reset")).kind(),
        ErrorKind::Internal
    );
}

#[test]
fn test_config_error_is_single_variant() {
    let plain = Error::config("missing key");
    let wrapped = Error::config_with_source("bad toml", std::io::Error::other("eof"));

    assert!(matches!(plain, Error::Config { source: None, .. }));
    assert!(matches!(wrapped, Error::Config { source: Some(_), .. }));
    assert_eq!(plain.kind(), wrapped.kind());
    assert_eq!(plain.to_string(), "Configuration error: missing key");
}

#[test]
fn test_error_display() {
    assert_eq!(
        Error::validation("query is required").to_string(),
        "Validation error: query is required"
    );
    assert_eq!(
        Error::summary("rate limited").to_string(),
        "Summary error: rate limited"
    );
}

#[test]
fn test_io_error_conversion_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();

    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(std::error::Error::source(&err).is_some());
}
