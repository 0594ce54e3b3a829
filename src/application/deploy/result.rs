//! Deployment Outcome
//!
//! Returned by a successful run. Failures are returned as `DeployError`.

use std::time::Duration;

use crate::domain::value_objects::{DeployTarget, ModelId};

/// Result of a successful deployment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentOutcome {
    pub model_id: ModelId,
    pub target: DeployTarget,
    /// Number of progress events delivered, including the final 100%
    pub events_emitted: usize,
    pub elapsed: Duration,
}
