//! Stage tags and the fixed checkpoint table.
//!
//! Progress is a deterministic script, not a measured fraction: every stage
//! reports a fixed checkpoint and skipped stages simply leave a larger jump.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Machine-readable tag carried by every progress event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Initialization,
    Download,
    Optimization,
    Deployment,
    Complete,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Initialization => "initialization",
            Stage::Download => "download",
            Stage::Optimization => "optimization",
            Stage::Deployment => "deployment",
            Stage::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed checkpoint percentages.
pub mod checkpoints {
    pub const INITIALIZATION: u8 = 10;
    pub const DOWNLOAD: u8 = 20;
    pub const QUANTIZATION: u8 = 40;
    pub const LORA: u8 = 50;
    pub const VLLM: u8 = 60;
    pub const DISPATCH: u8 = 70;
    pub const COMPLETE: u8 = 100;
}

/// Inclusive progress range reserved for a backend's sub-stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressBand {
    pub start: u8,
    pub end: u8,
}

impl ProgressBand {
    /// Band shared by the built-in backends.
    pub const DEPLOYMENT: ProgressBand = ProgressBand { start: 75, end: 95 };

    pub fn contains(&self, progress: u8) -> bool {
        (self.start..=self.end).contains(&progress)
    }
}

impl Default for ProgressBand {
    fn default() -> Self {
        Self::DEPLOYMENT
    }
}
