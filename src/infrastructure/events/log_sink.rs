//! Tracing Progress Sink
//!
//! Forwards progress events to the `tracing` subscriber.

use tracing::info;

use crate::domain::entities::ProgressEvent;
use crate::domain::ports::ProgressReporter;
use crate::error::ReporterError;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressSink;

impl ProgressReporter for TracingProgressSink {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        info!(
            target: "modelship::progress",
            stage = %event.stage,
            progress = event.progress,
            "{}",
            event.message
        );
        Ok(())
    }
}
