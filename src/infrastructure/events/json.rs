//! JSON Progress Sink
//!
//! Outputs progress events as NDJSON: one object per event, terminated by
//! either the `complete` progress event or an `error` object.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::entities::ProgressEvent;
use crate::domain::ports::ProgressReporter;
use crate::error::{DeployError, ReporterError};

/// Sink that writes NDJSON events to stdout or a custom writer
pub struct JsonProgressSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonProgressSink {
    /// Create a new JSON sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Write the terminating error message for a failed run
    pub fn write_error(&self, error: &DeployError) -> Result<(), ReporterError> {
        self.write_failure(error.code(), &error.to_string())
    }

    /// Write an error object for failures raised outside a run
    pub fn write_failure(&self, code: &str, message: &str) -> Result<(), ReporterError> {
        self.write_event(serde_json::json!({
            "event": "error",
            "code": code,
            "message": message,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }

    fn write_event(&self, event: serde_json::Value) -> Result<(), ReporterError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ReporterError::Rejected("output writer poisoned".to_string()))?;
        writeln!(writer, "{}", serde_json::to_string(&event)?)?;
        writer.flush()?;
        Ok(())
    }
}

impl ProgressReporter for JsonProgressSink {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        self.write_event(serde_json::json!({
            "event": "progress",
            "stage": event.stage,
            "progress": event.progress,
            "message": event.message,
            "timestamp": Utc::now().to_rfc3339(),
        }))
    }
}
