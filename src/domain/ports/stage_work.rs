//! Stage Work Port
//!
//! The unit of work each stage performs before it reports. Production wires a
//! simulated or real implementation; tests substitute instantaneous stubs.

use crate::domain::entities::DeploymentConfig;
use crate::domain::value_objects::DeployTarget;
use crate::error::WorkError;

/// Identifies one unit of work within a run.
#[derive(Debug, Clone, Copy)]
pub struct WorkStep<'a> {
    /// Owning backend, `None` for preparatory stages
    pub target: Option<DeployTarget>,
    /// Step name, unique within its owner
    pub name: &'static str,
    pub config: &'a DeploymentConfig,
}

impl<'a> WorkStep<'a> {
    pub fn preparation(name: &'static str, config: &'a DeploymentConfig) -> Self {
        Self {
            target: None,
            name,
            config,
        }
    }

    pub fn backend(target: DeployTarget, name: &'static str, config: &'a DeploymentConfig) -> Self {
        Self {
            target: Some(target),
            name,
            config,
        }
    }

    /// Lookup key: `download`, `quantization`, `local.install_dependencies`, ...
    pub fn key(&self) -> String {
        match self.target {
            Some(target) => format!("{}.{}", target.as_str(), self.name),
            None => self.name.to_string(),
        }
    }
}

/// Performs the work behind a stage.
///
/// Runs to completion before the stage's progress event is reported.
pub trait StageWork: Send + Sync {
    fn perform(&self, step: &WorkStep<'_>) -> Result<(), WorkError>;
}
