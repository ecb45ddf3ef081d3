//! Telemetry Integration Tests
//!
//! The global subscriber can be installed once per process, so these live
//! in their own test binary.

use multiclient_common::{try_init_tracing_with_config, TracingConfig, TracingError};

#[test]
fn test_tracing_initializes_once() {
    try_init_tracing_with_config(TracingConfig::development()).unwrap();

    let err = try_init_tracing_with_config(TracingConfig::production()).unwrap_err();
    assert!(matches!(err, TracingError::AlreadyInitialized));

    tracing::info!(test = "telemetry", "Subscriber installed");
}
