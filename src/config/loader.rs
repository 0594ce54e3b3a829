//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{DeployTarget, Quantization};
use crate::error::ConfigError;

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity, WorkMode};

/// File name looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "modelship.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration after layering, with where it came from.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the file layer, then apply environment overrides.
///
/// An explicit path must exist. Otherwise the project file is preferred over
/// the user file, and built-in defaults are used when neither exists.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: &Path,
) -> Result<LoadedConfig, ConfigError> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let project = project_root.join(PROJECT_CONFIG_FILE);
            let user = dirs::config_dir().map(|dir| dir.join("modelship").join("config.toml"));
            std::iter::once(project)
                .chain(user)
                .find(|path| path.exists())
        }
    };

    let mut loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig::default(),
    };

    loaded.config = with_env_overrides(loaded.config);
    Ok(loaded)
}

/// Apply environment variable overrides (MODELSHIP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary environment lookup.
///
/// Invalid values are reported to `warnings` and leave the setting unchanged.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    warnings: &mut W,
) -> Config {
    if let Some(value) = get_env("MODELSHIP_TARGET") {
        config.deploy.target = EnvVarValidator::new("MODELSHIP_TARGET", &["aws", "gcp", "local"])
            .parse_with_writer(
                &value,
                |s| s.parse::<DeployTarget>().ok(),
                config.deploy.target,
                warnings,
            );
    }

    if let Some(value) = get_env("MODELSHIP_QUANTIZATION") {
        config.optimizations.quantization =
            EnvVarValidator::new("MODELSHIP_QUANTIZATION", &["none", "4bit", "8bit"])
                .parse_with_writer(
                    &value,
                    |s| s.parse::<Quantization>().ok(),
                    config.optimizations.quantization,
                    warnings,
                );
    }

    if let Some(value) = get_env("MODELSHIP_WORK_MODE") {
        config.work.mode = EnvVarValidator::new("MODELSHIP_WORK_MODE", &["simulated", "instant"])
            .parse_with_writer(
                &value,
                |s| match s.to_lowercase().as_str() {
                    "simulated" => Some(WorkMode::Simulated),
                    "instant" => Some(WorkMode::Instant),
                    _ => None,
                },
                config.work.mode,
                warnings,
            );
    }

    if let Some(value) = get_env("MODELSHIP_STEP_DELAY_MS") {
        match value.trim().parse::<u64>() {
            Ok(ms) => config.work.step_delay_ms = ms,
            Err(_) => {
                let _ = writeln!(
                    warnings,
                    "Warning: Invalid MODELSHIP_STEP_DELAY_MS value '{}' (expected milliseconds)",
                    value
                );
            }
        }
    }

    if let Some(region) = get_env("MODELSHIP_AWS_REGION").filter(|v| !v.trim().is_empty()) {
        config.aws.region = region.trim().to_string();
    }

    if let Some(project) = get_env("MODELSHIP_GCP_PROJECT").filter(|v| !v.trim().is_empty()) {
        config.gcp.project = Some(project.trim().to_string());
    }

    if let Some(region) = get_env("MODELSHIP_GCP_REGION").filter(|v| !v.trim().is_empty()) {
        config.gcp.region = region.trim().to_string();
    }

    if let Some(value) = get_env("MODELSHIP_VERBOSITY") {
        config.output.verbosity = EnvVarValidator::new(
            "MODELSHIP_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        )
        .parse_with_writer(
            &value,
            |s| match s.to_lowercase().as_str() {
                "quiet" => Some(Verbosity::Quiet),
                "normal" => Some(Verbosity::Normal),
                "verbose" => Some(Verbosity::Verbose),
                "debug" => Some(Verbosity::Debug),
                _ => None,
            },
            config.output.verbosity,
            warnings,
        );
    }

    config
}

/// Line of the assignment or table header an ignored key path points at.
///
/// Only lines under the key's own table are considered, so comments and
/// same-named keys in other sections are skipped.
fn find_line_number(content: &str, key_path: &str) -> Option<usize> {
    let (table, key) = match key_path.rsplit_once('.') {
        Some((table, key)) => (Some(table), key),
        None => (None, key_path),
    };

    let mut current: Option<&str> = None;
    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if let Some(header) = table_header(trimmed) {
            let nested = header
                .strip_prefix(key)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'));
            if table.is_none() && nested {
                return Some(index + 1);
            }
            current = Some(header);
        } else if current == table && is_assignment(trimmed, key) {
            return Some(index + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some(rest[..end].trim())
}

fn is_assignment(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "deploy",
        "target",
        "optimizations",
        "quantization",
        "lora",
        "vllm",
        "work",
        "mode",
        "step_delay_ms",
        "delays",
        "aws",
        "gcp",
        "region",
        "project",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .filter(|(_, dist)| (1..=2).contains(dist))
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}
