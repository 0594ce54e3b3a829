//! Domain Services
//!
//! Pure orchestration logic: which stages run, in what order, at which
//! checkpoints, and the channel every progress event passes through.

mod backend_registry;
mod cancellation;
mod deployment_plan;
mod optimization_planner;
mod progress_channel;

pub use backend_registry::BackendRegistry;
pub use cancellation::CancellationToken;
pub use deployment_plan::{
    completion_message, preparation_steps, DeploymentPlan, PlannedStep, PreparationStep,
};
pub use optimization_planner::{plan_optimizations, OptimizationPass, PlannedOptimization};
pub use progress_channel::ProgressChannel;
