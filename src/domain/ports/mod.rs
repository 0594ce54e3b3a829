//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod progress_reporter;
pub mod stage_work;
pub mod target_backend;

pub use progress_reporter::{NoopReporter, ProgressReporter};
pub use stage_work::{StageWork, WorkStep};
pub use target_backend::{BackendStage, TargetBackend};
