//! GCP backend - deploys to a Vertex AI endpoint.

use std::sync::Arc;

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{BackendStage, StageWork, TargetBackend};
use crate::domain::services::ProgressChannel;
use crate::domain::value_objects::DeployTarget;
use crate::error::DeployResult;

use super::run_stages;

pub const DEFAULT_REGION: &str = "us-central1";

pub struct GcpBackend {
    work: Arc<dyn StageWork>,
    project: Option<String>,
    region: String,
}

impl GcpBackend {
    pub fn new(work: Arc<dyn StageWork>) -> Self {
        Self {
            work,
            project: None,
            region: DEFAULT_REGION.to_string(),
        }
    }

    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.project = project.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    fn location(&self) -> String {
        match &self.project {
            Some(project) => format!("{}/{}", project, self.region),
            None => self.region.clone(),
        }
    }
}

impl TargetBackend for GcpBackend {
    fn target(&self) -> DeployTarget {
        DeployTarget::Gcp
    }

    fn stages(&self, _config: &DeploymentConfig) -> Vec<BackendStage> {
        vec![
            BackendStage::new(
                "provision_resources",
                75,
                format!("Provisioning GCP resources in {}...", self.location()),
            ),
            BackendStage::new("upload_model", 85, "Uploading model to Cloud Storage..."),
            BackendStage::new("deploy_endpoint", 95, "Deploying Vertex AI endpoint..."),
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
