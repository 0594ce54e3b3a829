//! Simulated unit of work.

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use tracing::trace;

use crate::domain::ports::{StageWork, WorkStep};
use crate::error::WorkError;

/// Sleeps for a per-step delay, optionally failing chosen steps.
///
/// Delays and failures are keyed by `WorkStep::key()` (`download`,
/// `aws.create_endpoint`, ...).
#[derive(Debug, Clone, Default)]
pub struct SimulatedWork {
    default_delay: Duration,
    delays: HashMap<String, Duration>,
    failures: HashMap<String, String>,
}

impl SimulatedWork {
    pub fn new(default_delay: Duration) -> Self {
        Self {
            default_delay,
            ..Self::default()
        }
    }

    pub fn with_delay(mut self, key: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(key.into(), delay);
        self
    }

    /// Make the step with this key fail after its delay.
    pub fn with_failure(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.failures.insert(key.into(), message.into());
        self
    }

    pub fn delay_for(&self, key: &str) -> Duration {
        self.delays.get(key).copied().unwrap_or(self.default_delay)
    }
}

impl StageWork for SimulatedWork {
    fn perform(&self, step: &WorkStep<'_>) -> Result<(), WorkError> {
        let key = step.key();
        let delay = self.delay_for(&key);
        trace!(step = %key, delay_ms = delay.as_millis() as u64, "simulating work");

        if !delay.is_zero() {
            thread::sleep(delay);
        }

        match self.failures.get(&key) {
            Some(message) => Err(WorkError::new(message.clone())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::DeploymentConfig;
    use crate::domain::value_objects::{DeployTarget, ModelId};

    fn config() -> DeploymentConfig {
        DeploymentConfig::new(ModelId::new("gpt2").unwrap(), "GPT-2", DeployTarget::Aws)
    }

    #[test]
    fn overrides_take_precedence_over_default() {
        let work = SimulatedWork::new(Duration::from_millis(500))
            .with_delay("download", Duration::from_millis(2));
        assert_eq!(work.delay_for("download"), Duration::from_millis(2));
        assert_eq!(work.delay_for("lora"), Duration::from_millis(500));
    }

    #[test]
    fn configured_failure_is_returned() {
        let work = SimulatedWork::new(Duration::ZERO)
            .with_failure("aws.create_endpoint", "quota exceeded");
        let config = config();

        let ok = work.perform(&WorkStep::backend(DeployTarget::Aws, "upload_artifacts", &config));
        assert!(ok.is_ok());

        let err = work
            .perform(&WorkStep::backend(DeployTarget::Aws, "create_endpoint", &config))
            .unwrap_err();
        assert_eq!(err, WorkError::new("quota exceeded"));
    }

    #[test]
    fn zero_delay_completes_immediately() {
        let work = SimulatedWork::new(Duration::ZERO);
        let config = config();
        let started = std::time::Instant::now();
        work.perform(&WorkStep::preparation("download", &config))
            .unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
