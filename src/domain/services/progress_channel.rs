//! Progress channel
//!
//! Every event of a run, including backend sub-stages, goes through one
//! channel. It owns the ordering contract: progress never decreases, backend
//! events stay inside the backend's band, and only the orchestrator may
//! report 100.

use tracing::debug;

use crate::domain::entities::ProgressEvent;
use crate::domain::ports::ProgressReporter;
use crate::domain::value_objects::{checkpoints, DeployTarget, ProgressBand, Stage};
use crate::error::{DeployError, DeployResult};

use super::CancellationToken;

pub struct ProgressChannel<'a> {
    reporter: &'a dyn ProgressReporter,
    cancellation: CancellationToken,
    last: Option<u8>,
    band: Option<(DeployTarget, ProgressBand)>,
    emitted: usize,
}

impl<'a> ProgressChannel<'a> {
    pub fn new(reporter: &'a dyn ProgressReporter) -> Self {
        Self {
            reporter,
            cancellation: CancellationToken::new(),
            last: None,
            band: None,
            emitted: 0,
        }
    }

    pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
        self.cancellation = cancellation;
        self
    }

    /// Fail with `Cancelled` if the run was cancelled before `step` started.
    pub fn ensure_active(&self, step: &str) -> DeployResult<()> {
        if self.cancellation.is_cancelled() {
            return Err(DeployError::Cancelled {
                step: step.to_string(),
            });
        }
        Ok(())
    }

    /// Report one checkpoint to the caller's reporter.
    pub fn emit(&mut self, stage: Stage, progress: u8, message: impl Into<String>) -> DeployResult<()> {
        if let Some((target, band)) = self.band {
            if !band.contains(progress) || progress >= checkpoints::COMPLETE {
                return Err(DeployError::OutOfBand {
                    target,
                    progress,
                    start: band.start,
                    end: band.end,
                });
            }
        }

        if let Some(previous) = self.last {
            if progress < previous {
                return Err(DeployError::ProgressRegression {
                    stage,
                    previous,
                    attempted: progress,
                });
            }
        }

        let event = ProgressEvent::new(stage, progress, message);
        debug!(stage = %event.stage, progress = event.progress, message = %event.message, "progress");

        self.reporter
            .report(&event)
            .map_err(|source| DeployError::Reporter {
                stage,
                progress,
                source,
            })?;

        self.last = Some(progress);
        self.emitted += 1;
        Ok(())
    }

    /// Run `f` with emissions restricted to a backend's band.
    pub fn within_band<T>(
        &mut self,
        target: DeployTarget,
        band: ProgressBand,
        f: impl FnOnce(&mut Self) -> DeployResult<T>,
    ) -> DeployResult<T> {
        let outer = self.band.replace((target, band));
        let result = f(self);
        self.band = outer;
        result
    }

    pub fn last_progress(&self) -> Option<u8> {
        self.last
    }

    pub fn events_emitted(&self) -> usize {
        self.emitted
    }
}
