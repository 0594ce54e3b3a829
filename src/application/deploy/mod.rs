//! Deploy Module
//!
//! Orchestrates one deployment run.
//!
//! ## Structure
//!
//! - `request` - Raw caller input (`DeploymentRequest`) and its validation
//! - `result` - Outcome of a successful run (`DeploymentOutcome`)
//! - `use_case` - The pipeline itself (`DeploymentOrchestrator`)
//!
//! ## Usage
//!
//! ```ignore
//! use modelship::application::deploy::DeploymentOrchestrator;
//!
//! let orchestrator = DeploymentOrchestrator::new(work, backends);
//! let outcome = orchestrator.run(&config, &reporter)?;
//! ```

mod request;
mod result;
mod use_case;

pub use request::DeploymentRequest;
pub use result::DeploymentOutcome;
pub use use_case::DeploymentOrchestrator;
