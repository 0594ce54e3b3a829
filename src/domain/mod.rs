//! Domain Layer
//!
//! Pure orchestration vocabulary: what a deployment is, which stages it passes
//! through, and the ports through which progress and work flow.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ModelId, DeployTarget, Quantization, Stage)
//! - `entities/` - DeploymentConfig, ProgressEvent
//! - `ports/` - ProgressReporter, StageWork, TargetBackend
//! - `services/` - OptimizationPlanner, ProgressChannel, DeploymentPlan
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never sleeps, prints or touches the network
//! 2. **Ports & Adapters** - Work and reporting go through trait-defined ports
//! 3. **Fixed checkpoints** - Progress values come from a table, never computed

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
