//! Orchestrator Factory
//!
//! Creates the orchestrator with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;
use std::time::Duration;

use crate::application::DeploymentOrchestrator;
use crate::config::{Config, WorkMode};
use crate::domain::ports::StageWork;
use crate::infrastructure::{standard_backends, InstantWork, SimulatedWork};

/// Overrides the CLI applies on top of the loaded config
#[derive(Debug, Clone, Default)]
pub struct FactoryOptions {
    /// Force instant work regardless of config
    pub instant: bool,
    /// Step keys that should fail, e.g. `aws.upload_artifacts`
    pub failures: Vec<String>,
}

/// Build the stage work implementation described by `config`
pub fn create_work(config: &Config, options: &FactoryOptions) -> Arc<dyn StageWork> {
    let instant = options.instant || config.work.mode == WorkMode::Instant;

    if instant && options.failures.is_empty() {
        return Arc::new(InstantWork);
    }

    let default_delay = if instant {
        Duration::ZERO
    } else {
        config.work.step_delay()
    };

    let mut work = SimulatedWork::new(default_delay);
    if !instant {
        for (key, ms) in &config.work.delays {
            work = work.with_delay(key.clone(), Duration::from_millis(*ms));
        }
    }
    for key in &options.failures {
        work = work.with_failure(key.clone(), format!("simulated failure in {}", key));
    }

    Arc::new(work)
}

/// Create an orchestrator with all built-in backends registered
pub fn create_orchestrator(config: &Config, options: &FactoryOptions) -> DeploymentOrchestrator {
    let work = create_work(config, options);
    let backends = standard_backends(work.clone(), &config.backend_settings());
    DeploymentOrchestrator::new(work, backends)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeploymentConfig;
    use crate::domain::ports::NoopReporter;
    use crate::domain::value_objects::{DeployTarget, ModelId};
    use crate::error::DeployError;

    fn instant_config() -> Config {
        let mut config = Config::default();
        config.work.mode = WorkMode::Instant;
        config
    }

    #[test]
    fn orchestrator_registers_every_target() {
        let orchestrator = create_orchestrator(&instant_config(), &FactoryOptions::default());
        assert_eq!(orchestrator.backends().targets(), DeployTarget::ALL.to_vec());
    }

    #[test]
    fn instant_orchestrator_runs_to_completion() {
        let orchestrator = create_orchestrator(&instant_config(), &FactoryOptions::default());
        let config = DeploymentConfig::new(
            ModelId::new("gpt2").unwrap(),
            "GPT-2",
            DeployTarget::Local,
        );

        let outcome = orchestrator.run(&config, &NoopReporter).unwrap();
        assert_eq!(outcome.events_emitted, 7);
    }

    #[test]
    fn injected_failure_stops_the_run() {
        let options = FactoryOptions {
            instant: true,
            failures: vec!["gcp.upload_model".to_string()],
        };
        let orchestrator = create_orchestrator(&Config::default(), &options);
        let config = DeploymentConfig::new(
            ModelId::new("gpt2").unwrap(),
            "",
            DeployTarget::Gcp,
        );

        let err = orchestrator.run(&config, &NoopReporter).unwrap_err();
        assert!(
            matches!(err, DeployError::Backend { target: DeployTarget::Gcp, step: "upload_model", .. }),
            "{:?}",
            err
        );
    }
}
