//! Domain Entities
//!
//! - `DeploymentConfig` - What to deploy, where, and with which optimizations
//! - `ProgressEvent` - One checkpoint reported during a run

mod deployment_config;
mod progress_event;

pub use deployment_config::{DeploymentConfig, Optimizations};
pub use progress_event::ProgressEvent;
