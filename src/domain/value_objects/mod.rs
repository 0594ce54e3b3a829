//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod deploy_target;
mod model_id;
mod quantization;
mod stage;

pub use deploy_target::DeployTarget;
pub use model_id::ModelId;
pub use quantization::Quantization;
pub use stage::{checkpoints, ProgressBand, Stage};
