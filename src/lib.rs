//! Modelship - staged model deployment orchestrator
//!
//! Modelship takes a model identifier, a deployment target and a set of
//! optional optimizations, and drives the deployment through a fixed series of
//! stages (initialization, download, optimization, dispatch, target-specific
//! provisioning, completion), reporting monotonic percentage progress to a
//! caller-supplied sink.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeploymentOrchestrator, DeploymentOutcome, DeploymentRequest};
pub use config::Config;
pub use domain::entities::{DeploymentConfig, Optimizations, ProgressEvent};
pub use domain::ports::{ProgressReporter, StageWork, TargetBackend};
pub use domain::services::{BackendRegistry, CancellationToken, DeploymentPlan};
pub use domain::value_objects::{DeployTarget, ModelId, Quantization, Stage};
pub use error::{ConfigError, ConfigurationError, DeployError, DeployResult, ReporterError};
