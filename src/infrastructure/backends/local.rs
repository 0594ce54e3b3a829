//! Local backend - runs the model on this machine.

use std::sync::Arc;

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{BackendStage, StageWork, TargetBackend};
use crate::domain::services::ProgressChannel;
use crate::domain::value_objects::DeployTarget;
use crate::error::DeployResult;

use super::run_stages;

pub struct LocalBackend {
    work: Arc<dyn StageWork>,
}

impl LocalBackend {
    pub fn new(work: Arc<dyn StageWork>) -> Self {
        Self { work }
    }
}

impl TargetBackend for LocalBackend {
    fn target(&self) -> DeployTarget {
        DeployTarget::Local
    }

    fn stages(&self, _config: &DeploymentConfig) -> Vec<BackendStage> {
        vec![
            BackendStage::new("setup_environment", 75, "Setting up local environment..."),
            BackendStage::new("install_dependencies", 85, "Installing dependencies..."),
            BackendStage::new("start_server", 95, "Starting local inference server..."),
        ]
    }

    fn deploy(
        &self,
        config: &DeploymentConfig,
        progress: &mut ProgressChannel<'_>,
    ) -> DeployResult<()> {
        let stages = self.stages(config);
        run_stages(self.target(), &stages, self.work.as_ref(), config, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ProgressEvent;
    use crate::domain::ports::{ProgressReporter, WorkStep};
    use crate::domain::value_objects::{ModelId, ProgressBand};
    use crate::error::{DeployError, ReporterError, WorkError};
    use crate::infrastructure::InstantWork;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Collect(Mutex<Vec<ProgressEvent>>);

    impl ProgressReporter for Collect {
        fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
            self.0.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct FailOn(&'static str);

    impl StageWork for FailOn {
        fn perform(&self, step: &WorkStep<'_>) -> Result<(), WorkError> {
            if step.name == self.0 {
                return Err(WorkError::new("simulated failure"));
            }
            Ok(())
        }
    }

    fn config() -> DeploymentConfig {
        DeploymentConfig::new(ModelId::new("gpt2").unwrap(), "GPT-2", DeployTarget::Local)
    }

    #[test]
    fn local_sub_stages_are_fixed() {
        let sink = Collect::default();
        let mut channel = ProgressChannel::new(&sink);
        let backend = LocalBackend::new(Arc::new(InstantWork));

        channel
            .within_band(DeployTarget::Local, ProgressBand::DEPLOYMENT, |c| {
                backend.deploy(&config(), c)
            })
            .unwrap();

        let events = sink.0.lock().unwrap();
        let seen: Vec<_> = events
            .iter()
            .map(|e| (e.progress, e.message.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![
                (75, "Setting up local environment..."),
                (85, "Installing dependencies..."),
                (95, "Starting local inference server..."),
            ]
        );
    }

    #[test]
    fn failing_step_stops_before_its_report() {
        let sink = Collect::default();
        let mut channel = ProgressChannel::new(&sink);
        let backend = LocalBackend::new(Arc::new(FailOn("install_dependencies")));

        let err = backend.deploy(&config(), &mut channel).unwrap_err();

        assert!(matches!(
            err,
            DeployError::Backend {
                target: DeployTarget::Local,
                step: "install_dependencies",
                ..
            }
        ));
        let events = sink.0.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].progress, 75);
    }
}
