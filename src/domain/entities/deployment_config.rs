//! Deployment configuration entity.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{DeployTarget, ModelId, Quantization};

/// Optional optimization passes run before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Optimizations {
    #[serde(default)]
    pub quantization: Quantization,
    #[serde(default)]
    pub lora: bool,
    #[serde(default)]
    pub vllm: bool,
}

impl Optimizations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quantization(mut self, quantization: Quantization) -> Self {
        self.quantization = quantization;
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

    /// True when no optional stage would run.
    pub fn is_empty(&self) -> bool {
        !self.quantization.is_enabled() && !self.lora && !self.vllm
    }
}

/// A validated deployment request.
///
/// Fields are private: once handed to the orchestrator the config is never
/// mutated, only read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentConfig {
    model_id: ModelId,
    model_name: String,
    target: DeployTarget,
    optimizations: Optimizations,
}

impl DeploymentConfig {
    /// Build a config. A blank display name falls back to the model id.
    pub fn new(model_id: ModelId, model_name: impl Into<String>, target: DeployTarget) -> Self {
        let model_name = model_name.into().trim().to_string();
        let model_name = if model_name.is_empty() {
            model_id.as_str().to_string()
        } else {
            model_name
        };

        Self {
            model_id,
            model_name,
            target,
            optimizations: Optimizations::default(),
        }
    }

    pub fn with_optimizations(mut self, optimizations: Optimizations) -> Self {
        self.optimizations = optimizations;
        self
    }

    pub fn model_id(&self) -> &ModelId {
        &self.model_id
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn target(&self) -> DeployTarget {
        self.target
    }

    pub fn optimizations(&self) -> &Optimizations {
        &self.optimizations
    }
}
