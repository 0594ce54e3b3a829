//! Progress Sink Implementations
//!
//! Provides concrete implementations of ProgressReporter:
//! - JsonProgressSink: NDJSON output for CI/automation
//! - TracingProgressSink: Structured log records
//!
//! The human-readable terminal sink lives with the CLI's UI code.

mod json;
mod log_sink;

pub use json::JsonProgressSink;
pub use log_sink::TracingProgressSink;
