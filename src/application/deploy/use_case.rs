//! Deployment Orchestrator
//!
//! Drives one run through its stages:
//! 1. Resolve the backend (configuration errors surface here, before any event)
//! 2. Initialization and download
//! 3. Optional optimization passes (quantization, LoRA, vLLM)
//! 4. Dispatch, then the backend's own sub-stages inside its band
//! 5. Completion at 100%
//!
//! Each stage runs its unit of work and then reports. A failure stops the run
//! where it is: no retry, no rollback of earlier stages, no further events.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, info_span, warn};

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{ProgressReporter, StageWork, TargetBackend, WorkStep};
use crate::domain::services::{
    completion_message, preparation_steps, BackendRegistry, CancellationToken, DeploymentPlan,
    ProgressChannel,
};
use crate::domain::value_objects::{checkpoints, Stage};
use crate::error::{DeployError, DeployResult};

use super::request::DeploymentRequest;
use super::result::DeploymentOutcome;

/// Staged deployment orchestrator
///
/// Holds no per-run state; one instance can serve concurrent runs.
pub struct DeploymentOrchestrator {
    work: Arc<dyn StageWork>,
    backends: BackendRegistry,
}

impl DeploymentOrchestrator {
    pub fn new(work: Arc<dyn StageWork>, backends: BackendRegistry) -> Self {
        Self { work, backends }
    }

    pub fn backends(&self) -> &BackendRegistry {
        &self.backends
    }

    /// Describe the stages a run of `config` would report, without running it
    pub fn plan(&self, config: &DeploymentConfig) -> DeployResult<DeploymentPlan> {
        let backend = self.backends.resolve(config.target())?;
        Ok(DeploymentPlan::build(config, backend.as_ref()))
    }

    /// Run a deployment to completion or failure
    pub fn run(
        &self,
        config: &DeploymentConfig,
        reporter: &dyn ProgressReporter,
    ) -> DeployResult<DeploymentOutcome> {
        self.run_with_cancel(config, reporter, &CancellationToken::new())
    }

    /// Validate a raw request, then run it
    pub fn run_request(
        &self,
        request: &DeploymentRequest,
        reporter: &dyn ProgressReporter,
        cancellation: &CancellationToken,
    ) -> DeployResult<DeploymentOutcome> {
        let config = request.to_config()?;
        self.run_with_cancel(&config, reporter, cancellation)
    }

    /// Run a deployment that stops at the next stage boundary once cancelled
    pub fn run_with_cancel(
        &self,
        config: &DeploymentConfig,
        reporter: &dyn ProgressReporter,
        cancellation: &CancellationToken,
    ) -> DeployResult<DeploymentOutcome> {
        let backend = self.backends.resolve(config.target())?;

        let span = info_span!(
            "deployment",
            model = %config.model_id(),
            deploy_target = config.target().as_str()
        );
        let _guard = span.enter();

        let started = Instant::now();
        info!("starting deployment");

        let mut progress = ProgressChannel::new(reporter).with_cancellation(cancellation.clone());
        match self.execute(config, backend.as_ref(), &mut progress) {
            Ok(()) => {
                let elapsed = started.elapsed();
                info!(
                    events = progress.events_emitted(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "deployment complete"
                );
                Ok(DeploymentOutcome {
                    model_id: config.model_id().clone(),
                    target: config.target(),
                    events_emitted: progress.events_emitted(),
                    elapsed,
                })
            }
            Err(err) => {
                warn!(
                    error = %err,
                    code = err.code(),
                    last_progress = progress.last_progress(),
                    "deployment failed"
                );
                Err(err)
            }
        }
    }

    fn execute(
        &self,
        config: &DeploymentConfig,
        backend: &dyn TargetBackend,
        progress: &mut ProgressChannel<'_>,
    ) -> DeployResult<()> {
        for step in preparation_steps(config) {
            progress.ensure_active(step.name)?;

            debug!(step = step.name, "running stage");
            self.work
                .perform(&WorkStep::preparation(step.name, config))
                .map_err(|source| DeployError::Stage {
                    stage: step.stage,
                    step: step.name,
                    source,
                })?;

            progress.emit(step.stage, step.checkpoint, step.message)?;
        }

        progress.within_band(backend.target(), backend.band(), |channel| {
            backend.deploy(config, channel)
        })?;

        progress.ensure_active("complete")?;
        progress.emit(
            Stage::Complete,
            checkpoints::COMPLETE,
            completion_message(config),
        )
    }
}
