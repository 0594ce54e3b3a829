//! Stage Work Implementations
//!
//! - `SimulatedWork`: stands in for real download/optimization/provisioning
//!   with configurable delays and injectable failures
//! - `InstantWork`: completes immediately

mod simulated;

pub use simulated::SimulatedWork;

use crate::domain::ports::{StageWork, WorkStep};
use crate::error::WorkError;

/// Work that completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantWork;

impl StageWork for InstantWork {
    fn perform(&self, _step: &WorkStep<'_>) -> Result<(), WorkError> {
        Ok(())
    }
}
