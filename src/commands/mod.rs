//! Command implementations for the modelship binary

pub mod deploy;
pub mod plan;
pub mod targets;

use std::path::Path;

use anyhow::Result;
use modelship::config::{load_layered, Config};
use modelship::DeploymentRequest;

use crate::cli::ModelArgs;
use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::detect_capabilities;

/// Load layered configuration, printing unknown-key warnings to stderr.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let project_root = std::env::current_dir()?;
    let loaded = load_layered(explicit, &project_root)?;

    if !loaded.warnings.is_empty() {
        let caps = detect_capabilities();
        let icon = Icon::Warning.colored(caps.supports_color, caps.supports_unicode);
        for warning in &loaded.warnings {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            let suggestion = warning
                .suggestion
                .as_ref()
                .map(|s| format!(". Did you mean '{}'?", s))
                .unwrap_or_default();
            eprintln!(
                "{} Unknown config key '{}' in {}{}",
                icon, warning.key, location, suggestion
            );
        }
    }

    Ok(loaded.config)
}

/// Merge CLI arguments over config defaults into a raw request.
pub fn build_request(model: &ModelArgs, config: &Config) -> DeploymentRequest {
    let target = model
        .target
        .clone()
        .unwrap_or_else(|| config.deploy.target.as_str().to_string());
    let quantization = model
        .quantization
        .clone()
        .unwrap_or_else(|| config.optimizations.quantization.as_str().to_string());

    let mut request = DeploymentRequest::new(model.model_id.clone(), target)
        .with_quantization(quantization)
        .with_lora(model.lora_override().unwrap_or(config.optimizations.lora))
        .with_vllm(model.vllm_override().unwrap_or(config.optimizations.vllm));
    if let Some(name) = &model.name {
        request = request.with_model_name(name.clone());
    }
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelship::{DeployTarget, Quantization};

    fn args(model_id: &str) -> ModelArgs {
        ModelArgs {
            model_id: model_id.to_string(),
            name: None,
            target: None,
            quantization: None,
            lora: false,
            no_lora: false,
            vllm: false,
            no_vllm: false,
        }
    }

    #[test]
    fn request_falls_back_to_config_defaults() {
        let mut config = Config::default();
        config.deploy.target = DeployTarget::Gcp;
        config.optimizations.quantization = Quantization::FourBit;
        config.optimizations.vllm = true;

        let request = build_request(&args("gpt2"), &config);
        assert_eq!(request.target, "gcp");
        assert_eq!(request.quantization.as_deref(), Some("4bit"));
        assert!(request.vllm);
        assert!(!request.lora);
    }

    #[test]
    fn cli_arguments_win_over_config() {
        let mut config = Config::default();
        config.deploy.target = DeployTarget::Gcp;

        let mut model = args("gpt2");
        model.target = Some("aws".to_string());
        model.quantization = Some("none".to_string());
        model.name = Some("GPT-2".to_string());

        let request = build_request(&model, &config);
        assert_eq!(request.target, "aws");
        assert_eq!(request.quantization.as_deref(), Some("none"));
        assert_eq!(request.model_name.as_deref(), Some("GPT-2"));
    }

    #[test]
    fn cli_can_disable_passes_the_config_enables() {
        let mut config = Config::default();
        config.optimizations.lora = true;
        config.optimizations.vllm = true;

        let mut model = args("gpt2");
        model.no_lora = true;

        let request = build_request(&model, &config);
        assert!(!request.lora);
        assert!(request.vllm);
    }
}
