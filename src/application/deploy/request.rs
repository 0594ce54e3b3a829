//! Deployment Request
//!
//! Unvalidated input as it arrives from a CLI, config file or API payload.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{DeploymentConfig, Optimizations};
use crate::domain::value_objects::{DeployTarget, ModelId, Quantization};
use crate::error::ConfigurationError;

/// Raw deployment request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRequest {
    pub model_id: String,
    #[serde(default)]
    pub model_name: Option<String>,
    pub target: String,
    #[serde(default)]
    pub quantization: Option<String>,
    #[serde(default)]
    pub lora: bool,
    #[serde(default)]
    pub vllm: bool,
}

impl DeploymentRequest {
    pub fn new(model_id: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = Some(name.into());
        self
    }

    pub fn with_quantization(mut self, quantization: impl Into<String>) -> Self {
        self.quantization = Some(quantization.into());
        self
    }

    pub fn with_lora(mut self, lora: bool) -> Self {
        self.lora = lora;
        self
    }

    pub fn with_vllm(mut self, vllm: bool) -> Self {
        self.vllm = vllm;
        self
    }

    /// Validate into a `DeploymentConfig`.
    ///
    /// Checks model id, then target, then quantization; the first failure wins.
    pub fn to_config(&self) -> Result<DeploymentConfig, ConfigurationError> {
        let model_id = ModelId::new(&self.model_id)?;
        let target: DeployTarget = self.target.parse()?;
        let quantization = match &self.quantization {
            Some(value) => value.parse::<Quantization>()?,
            None => Quantization::None,
        };

        let name = self.model_name.clone().unwrap_or_default();
        let optimizations = Optimizations::new()
            .with_quantization(quantization)
            .with_lora(self.lora)
            .with_vllm(self.vllm);

        Ok(DeploymentConfig::new(model_id, name, target).with_optimizations(optimizations))
    }
}
