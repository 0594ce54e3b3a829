//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Optimizations;
use crate::domain::value_objects::DeployTarget;
use crate::error::ConfigError;
use crate::infrastructure::backends::{aws, gcp, BackendSettings};

use super::loader::{self, ConfigWarning};

/// Deployment defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploySection {
    #[serde(default = "default_target")]
    pub target: DeployTarget,
}

impl Default for DeploySection {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

fn default_target() -> DeployTarget {
    DeployTarget::Local
}

/// How stage work is performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    /// Sleep for the configured delay per step
    #[default]
    Simulated,
    /// Complete every step immediately
    Instant,
}

/// Unit-of-work configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkConfig {
    #[serde(default)]
    pub mode: WorkMode,

    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,

    /// Per-step overrides keyed by step (`download`, `aws.create_endpoint`, ...)
    #[serde(default)]
    pub delays: BTreeMap<String, u64>,
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            mode: WorkMode::default(),
            step_delay_ms: default_step_delay_ms(),
            delays: BTreeMap::new(),
        }
    }
}

impl WorkConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

fn default_step_delay_ms() -> u64 {
    400
}

/// AWS backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwsConfig {
    #[serde(default = "default_aws_region")]
    pub region: String,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: default_aws_region(),
        }
    }
}

fn default_aws_region() -> String {
    aws::DEFAULT_REGION.to_string()
}

/// GCP backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GcpConfig {
    #[serde(default)]
    pub project: Option<String>,

    #[serde(default = "default_gcp_region")]
    pub region: String,
}

impl Default for GcpConfig {
    fn default() -> Self {
        Self {
            project: None,
            region: default_gcp_region(),
        }
    }
}

fn default_gcp_region() -> String {
    gcp::DEFAULT_REGION.to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub deploy: DeploySection,

    #[serde(default)]
    pub optimizations: Optimizations,

    #[serde(default)]
    pub work: WorkConfig,

    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub gcp: GcpConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Provider settings handed to the cloud backends
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            aws_region: self.aws.region.clone(),
            gcp_project: self.gcp.project.clone(),
            gcp_region: self.gcp.region.clone(),
        }
    }
}
