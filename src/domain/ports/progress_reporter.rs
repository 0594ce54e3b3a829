//! Progress Reporter Port
//!
//! The callback contract through which a deployment run is observed.
//! Implementations render to a terminal, stream NDJSON, forward to logs, etc.

use std::sync::Arc;

use crate::domain::entities::ProgressEvent;
use crate::error::ReporterError;

/// Trait for receiving progress events
///
/// Called synchronously from the orchestrator. Implementations must return
/// quickly; buffering and display are their own concern. A returned error
/// aborts the run and is surfaced to the caller unchanged.
///
/// Implementations:
/// - ConsoleProgressSink: Progress lines in terminal
/// - JsonProgressSink: NDJSON event stream
/// - TracingProgressSink: Structured log records
/// - NoopReporter: Silent operation
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError>;
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for &R {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        (**self).report(event)
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for Box<R> {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        (**self).report(event)
    }
}

impl<R: ProgressReporter + ?Sized> ProgressReporter for Arc<R> {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        (**self).report(event)
    }
}

/// Reports to both sinks in order; the first failure wins.
impl<A: ProgressReporter, B: ProgressReporter> ProgressReporter for (A, B) {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        self.0.report(event)?;
        self.1.report(event)
    }
}

/// No-op reporter for silent operation
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn report(&self, _event: &ProgressEvent) -> Result<(), ReporterError> {
        Ok(())
    }
}
