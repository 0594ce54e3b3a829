//! Target Backend Port
//!
//! One deployment target. Backends run their own ordered sub-stages inside a
//! reserved progress band and never report completion themselves.

use crate::domain::entities::DeploymentConfig;
use crate::domain::services::ProgressChannel;
use crate::domain::value_objects::{DeployTarget, ProgressBand};
use crate::error::DeployResult;

/// Descriptive entry for one backend sub-stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendStage {
    pub name: &'static str,
    pub checkpoint: u8,
    pub message: String,
}

impl BackendStage {
    pub fn new(name: &'static str, checkpoint: u8, message: impl Into<String>) -> Self {
        Self {
            name,
            checkpoint,
            message: message.into(),
        }
    }
}

/// Trait for deployment targets
///
/// `deploy` must report only through the supplied channel. The channel is
/// already restricted to `band()`; reporting outside it, going backwards or
/// reporting 100 fails the run.
pub trait TargetBackend: Send + Sync {
    fn target(&self) -> DeployTarget;

    fn band(&self) -> ProgressBand {
        ProgressBand::DEPLOYMENT
    }

    /// Sub-stages in execution order, for planning and display.
    fn stages(&self, config: &DeploymentConfig) -> Vec<BackendStage>;

    fn deploy(&self, config: &DeploymentConfig, progress: &mut ProgressChannel<'_>)
        -> DeployResult<()>;
}
