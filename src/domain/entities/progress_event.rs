//! Progress event entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{checkpoints, Stage};

/// A single checkpoint reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub stage: Stage,
    /// Fixed checkpoint, 0-100
    pub progress: u8,
    pub message: String,
}

impl ProgressEvent {
    pub fn new(stage: Stage, progress: u8, message: impl Into<String>) -> Self {
        Self {
            stage,
            progress,
            message: message.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Complete && self.progress == checkpoints::COMPLETE
    }
}
