//! Config parsing and validation integration tests

use clap::Parser;
use starlore::config::{Args, DEFAULT_API_KEY};

#[test]
fn test_defaults_are_usable() {
    let args = Args::parse_from(["starlore"]);

    assert_eq!(args.api_url, "https://api.nasa.gov/planetary");
    assert_eq!(args.count, 5);
    assert!(!args.recent);
    assert_eq!(args.request_timeout_ms, 10_000);
    assert_eq!(args.log_level, "info");
    assert!(args.validate().is_ok());
}

#[test]
fn test_key_falls_back_to_builtin() {
    let args = Args::parse_from(["starlore"]);
    assert_eq!(args.api_key(), DEFAULT_API_KEY);

    let args = Args::parse_from(["starlore", "--api-key", "my-own-key"]);
    assert_eq!(args.api_key(), "my-own-key");
}

#[test]
fn test_flags_parse() {
    let args = Args::parse_from([
        "starlore",
        "--count",
        "8",
        "--recent",
        "--api-url",
        "http://localhost:9999/planetary",
        "--request-timeout-ms",
        "2500",
    ]);

    assert_eq!(args.count, 8);
    assert!(args.recent);
    assert_eq!(args.api_url, "http://localhost:9999/planetary");
    assert_eq!(args.request_timeout().as_millis(), 2500);
    assert!(args.validate().is_ok());
}

#[test]
fn test_invalid_values_rejected() {
    let args = Args::parse_from(["starlore", "--count", "0"]);
    assert_eq!(
        args.validate().unwrap_err(),
        "FACT_COUNT must be at least 1"
    );

    let args = Args::parse_from(["starlore", "--request-timeout-ms", "0"]);
    assert!(args.validate().is_err());
}
