//! AWS backend - provisions a managed inference endpoint.
//!
//! Provisioning is delegated to the injected `StageWork`; this type only owns
//! the sub-stage script and the region it targets.

use std::sync::Arc;

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{BackendStage, StageWork, TargetBackend};
use crate::domain::services::ProgressChannel;
use crate::domain::value_objects::DeployTarget;
use crate::error::DeployResult;

use super::run_stages;

pub const DEFAULT_REGION: &str = "us-east-1";

pub struct AwsBackend {
    work: Arc<dyn StageWork>,
    region: String,
}

impl AwsBackend {
    pub fn new(work: Arc<dyn StageWork>) -> Self {
        Self {
            work,
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

impl TargetBackend for AwsBackend {
    fn target(&self) -> DeployTarget {
        DeployTarget::Aws
    }

    fn stages(&self, config: &DeploymentConfig) -> Vec<BackendStage> {
        vec![
            BackendStage::new(
                "provision_resources",
                75,
                format!("Provisioning AWS resources in {}...", self.region),
            ),
            BackendStage::new(
                "upload_artifacts",
                85,
                format!("Uploading {} artifacts to S3...", config.model_id().short_name()),
            ),
            BackendStage::new("create_endpoint", 95, "Creating SageMaker inference endpoint..."),
        ]
    }

    fn deploy(
        &self,
        config: &DeploymentConfig,
        progress: &mut ProgressChannel<'_>,
    ) -> DeployResult<()> {
        let stages = self.stages(config);
        run_stages(self.target(), &stages, self.work.as_ref(), config, progress)
    }
}
