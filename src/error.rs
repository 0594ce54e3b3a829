//! Error types for Modelship
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::{DeployTarget, Stage};

/// Result type alias for orchestrator operations
pub type DeployResult<T> = Result<T, DeployError>;

/// Invalid caller input, detected before any stage runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Model identifier missing or blank
    #[error("model identifier must not be empty")]
    EmptyModelId,

    /// Target string is not one of the known deployment targets
    #[error("unknown deployment target '{0}' (expected one of: aws, gcp, local)")]
    UnknownTarget(String),

    /// Quantization string is not a supported mode
    #[error("unknown quantization '{0}' (expected one of: none, 4bit, 8bit)")]
    UnknownQuantization(String),

    /// No backend registered for a known target
    #[error("no backend registered for target '{0}'")]
    NoBackend(DeployTarget),
}

/// Failure to read or parse a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Failure raised by a progress sink while handling an event.
#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Rejected(String),
}

/// Failure of a single unit of work (download, optimization pass, provisioning step).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct WorkError {
    pub message: String,
}

impl WorkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for a deployment run
#[derive(Error, Debug)]
pub enum DeployError {
    /// Invalid configuration; raised before any event is emitted
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A target backend's unit of work failed
    #[error("{target} backend failed during '{step}': {source}")]
    Backend {
        target: DeployTarget,
        step: &'static str,
        #[source]
        source: WorkError,
    },

    /// A preparatory stage (download, optimization pass) failed
    #[error("stage '{step}' failed: {source}")]
    Stage {
        stage: Stage,
        step: &'static str,
        #[source]
        source: WorkError,
    },

    /// The caller's progress sink failed
    #[error("progress reporter failed at {stage} ({progress}%): {source}")]
    Reporter {
        stage: Stage,
        progress: u8,
        #[source]
        source: ReporterError,
    },

    /// The run was cancelled before the named step started
    #[error("deployment cancelled before '{step}'")]
    Cancelled { step: String },

    /// An event tried to move progress backwards
    #[error("progress regression at {stage}: {attempted}% after {previous}%")]
    ProgressRegression {
        stage: Stage,
        previous: u8,
        attempted: u8,
    },

    /// A backend reported outside its reserved band
    #[error("{target} backend reported {progress}% outside its band {start}-{end}%")]
    OutOfBand {
        target: DeployTarget,
        progress: u8,
        start: u8,
        end: u8,
    },
}

impl DeployError {
    /// Stable machine-readable code for JSON output.
    pub fn code(&self) -> &'static str {
        match self {
            DeployError::Configuration(_) => "configuration_error",
            DeployError::Backend { .. } => "backend_error",
            DeployError::Stage { .. } => "stage_error",
            DeployError::Reporter { .. } => "reporter_error",
            DeployError::Cancelled { .. } => "cancelled",
            DeployError::ProgressRegression { .. } | DeployError::OutOfBand { .. } => {
                "progress_contract_violation"
            }
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DeployError::Configuration(_))
    }
}
