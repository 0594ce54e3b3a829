//! Deployment Backends
//!
//! These backends implement the TargetBackend port from the domain layer.
//! Each runs a fixed list of sub-stages through an injected `StageWork`.

pub mod aws;
pub mod gcp;
pub mod local;

pub use aws::AwsBackend;
pub use gcp::GcpBackend;
pub use local::LocalBackend;

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{BackendStage, StageWork, WorkStep};
use crate::domain::services::{BackendRegistry, ProgressChannel};
use crate::domain::value_objects::{DeployTarget, Stage};
use crate::error::{DeployError, DeployResult};

/// Provider settings for the cloud backends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub aws_region: String,
    pub gcp_project: Option<String>,
    pub gcp_region: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            aws_region: aws::DEFAULT_REGION.to_string(),
            gcp_project: None,
            gcp_region: gcp::DEFAULT_REGION.to_string(),
        }
    }
}

/// Registry with all built-in backends sharing one unit-of-work implementation
pub fn standard_backends(work: Arc<dyn StageWork>, settings: &BackendSettings) -> BackendRegistry {
    BackendRegistry::new()
        .register(Arc::new(
            AwsBackend::new(work.clone()).with_region(settings.aws_region.clone()),
        ))
        .register(Arc::new(
            GcpBackend::new(work.clone())
                .with_project(settings.gcp_project.clone())
                .with_region(settings.gcp_region.clone()),
        ))
        .register(Arc::new(LocalBackend::new(work)))
}

/// Run sub-stages in order: cancellation check, unit of work, then report.
///
/// Stops at the first failing step; events already reported stand.
pub(crate) fn run_stages(
    target: DeployTarget,
    stages: &[BackendStage],
    work: &dyn StageWork,
    config: &DeploymentConfig,
    progress: &mut ProgressChannel<'_>,
) -> DeployResult<()> {
    for stage in stages {
        let step = WorkStep::backend(target, stage.name, config);
        progress.ensure_active(&step.key())?;

        debug!(step = %step.key(), "running backend step");
        work.perform(&step).map_err(|source| DeployError::Backend {
            target,
            step: stage.name,
            source,
        })?;

        progress.emit(Stage::Deployment, stage.checkpoint, stage.message.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InstantWork;

    #[test]
    fn standard_backends_cover_every_target() {
        let registry = standard_backends(Arc::new(InstantWork), &BackendSettings::default());
        assert_eq!(registry.targets(), DeployTarget::ALL.to_vec());

        for target in DeployTarget::ALL {
            assert_eq!(registry.resolve(target).unwrap().target(), target);
        }
    }

    #[test]
    fn every_backend_stays_inside_its_band() {
        let registry = standard_backends(Arc::new(InstantWork), &BackendSettings::default());
        let config = DeploymentConfig::new(
            crate::domain::value_objects::ModelId::new("gpt2").unwrap(),
            "GPT-2",
            DeployTarget::Local,
        );

        for target in DeployTarget::ALL {
            let backend = registry.resolve(target).unwrap();
            let band = backend.band();
            let stages = backend.stages(&config);
            assert!(!stages.is_empty());
            assert!(stages.iter().all(|s| band.contains(s.checkpoint)));
            assert!(stages.windows(2).all(|w| w[0].checkpoint < w[1].checkpoint));
        }
    }
}
