//! Deploy target value object - which backend a deployment is dispatched to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Deployment target.
///
/// A closed set: adding a target means adding a variant here and a backend
/// registration in `standard_backends`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployTarget {
    /// Amazon Web Services
    Aws,
    /// Google Cloud Platform
    Gcp,
    /// Local machine
    Local,
}

impl DeployTarget {
    pub const ALL: [DeployTarget; 3] = [DeployTarget::Aws, DeployTarget::Gcp, DeployTarget::Local];

    /// Machine tag, as accepted by `FromStr`
    pub fn as_str(&self) -> &'static str {
        match self {
            DeployTarget::Aws => "aws",
            DeployTarget::Gcp => "gcp",
            DeployTarget::Local => "local",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DeployTarget::Aws => "AWS",
            DeployTarget::Gcp => "GCP",
            DeployTarget::Local => "Local",
        }
    }
}

impl FromStr for DeployTarget {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" => Ok(DeployTarget::Aws),
            "gcp" => Ok(DeployTarget::Gcp),
            "local" => Ok(DeployTarget::Local),
            _ => Err(ConfigurationError::UnknownTarget(s.to_string())),
        }
    }
}

impl fmt::Display for DeployTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
