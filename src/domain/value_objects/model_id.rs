//! Model identifier value object.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Opaque, non-empty model identifier (e.g. `meta-llama/Llama-2-7b-hf`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Create a model id, trimming surrounding whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ConfigurationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyModelId);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path segment, used as a fallback display name.
    pub fn short_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl TryFrom<String> for ModelId {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
