//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain stage rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeploymentOrchestrator` - Runs fixed stages, optional optimization passes,
//!   backend dispatch and completion, reporting progress throughout

pub mod deploy;

pub use deploy::{DeploymentOrchestrator, DeploymentOutcome, DeploymentRequest};
