//! Configuration module for Modelship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MODELSHIP_*)
//! 3. Project config (./modelship.toml, or --config)
//! 4. User config (<config dir>/modelship/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    load_layered, load_with_warnings, with_env_overrides, with_env_overrides_from, ConfigWarning,
    LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{AwsConfig, Config, DeploySection, GcpConfig, OutputConfig, Verbosity, WorkConfig, WorkMode};
