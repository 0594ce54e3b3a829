//! Deployment plan
//!
//! The fixed stage script for a config: preparation stages, optional
//! optimization passes, dispatch, backend sub-stages and completion, each with
//! its checkpoint and message. The orchestrator executes the preparation part;
//! the full plan is descriptive and mirrors what a successful run emits.

use crate::domain::entities::{DeploymentConfig, ProgressEvent};
use crate::domain::ports::TargetBackend;
use crate::domain::value_objects::{checkpoints, DeployTarget, Stage};

use super::plan_optimizations;

/// A stage the orchestrator runs itself, before dispatching to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparationStep {
    pub stage: Stage,
    /// Work step name
    pub name: &'static str,
    pub checkpoint: u8,
    pub message: String,
}

/// Preparation stages in execution order, ending with dispatch.
pub fn preparation_steps(config: &DeploymentConfig) -> Vec<PreparationStep> {
    let mut steps = vec![
        PreparationStep {
            stage: Stage::Initialization,
            name: "initialization",
            checkpoint: checkpoints::INITIALIZATION,
            message: format!("Initializing deployment of {}", config.model_name()),
        },
        PreparationStep {
            stage: Stage::Download,
            name: "download",
            checkpoint: checkpoints::DOWNLOAD,
            message: format!("Downloading model {}...", config.model_id()),
        },
    ];

    steps.extend(
        plan_optimizations(config.optimizations())
            .into_iter()
            .map(|planned| PreparationStep {
                stage: Stage::Optimization,
                name: planned.pass.step_name(),
                checkpoint: planned.checkpoint,
                message: planned.message,
            }),
    );

    steps.push(PreparationStep {
        stage: Stage::Deployment,
        name: "dispatch",
        checkpoint: checkpoints::DISPATCH,
        message: format!("Deploying to {}...", config.target().display_name()),
    });

    steps
}

/// Message of the final 100% event.
pub fn completion_message(config: &DeploymentConfig) -> String {
    format!(
        "Deployment complete: {} is live on {}",
        config.model_name(),
        config.target().display_name()
    )
}

/// One row of a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    pub stage: Stage,
    pub checkpoint: u8,
    pub message: String,
}

/// Full ordered stage list for one config and backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    pub target: DeployTarget,
    pub steps: Vec<PlannedStep>,
}

impl DeploymentPlan {
    pub fn build(config: &DeploymentConfig, backend: &dyn TargetBackend) -> Self {
        let mut steps: Vec<PlannedStep> = preparation_steps(config)
            .into_iter()
            .map(|step| PlannedStep {
                stage: step.stage,
                checkpoint: step.checkpoint,
                message: step.message,
            })
            .collect();

        steps.extend(backend.stages(config).into_iter().map(|stage| PlannedStep {
            stage: Stage::Deployment,
            checkpoint: stage.checkpoint,
            message: stage.message,
        }));

        steps.push(PlannedStep {
            stage: Stage::Complete,
            checkpoint: checkpoints::COMPLETE,
            message: completion_message(config),
        });

        Self {
            target: backend.target(),
            steps,
        }
    }

    /// Events a successful run is expected to emit
    pub fn expected_events(&self) -> Vec<ProgressEvent> {
        self.steps
            .iter()
            .map(|step| ProgressEvent::new(step.stage, step.checkpoint, step.message.clone()))
            .collect()
    }
}
