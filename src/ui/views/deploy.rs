use modelship::{DeploymentConfig, DeploymentOutcome, Optimizations};

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;

pub fn render_deploy_header(config: &DeploymentConfig, caps: TerminalCapabilities) -> String {
    let mut out = format!(
        "{} Modelship Deploy\n",
        Icon::Deploy.colored(caps.supports_color, caps.supports_unicode)
    );

    let model = if config.model_name() == config.model_id().as_str() {
        config.model_id().to_string()
    } else {
        format!("{} ({})", config.model_id(), config.model_name())
    };
    out.push_str(&format!("  Model:         {}\n", model));
    out.push_str(&format!(
        "  Target:        {}\n",
        config.target().display_name()
    ));
    out.push_str(&format!(
        "  Optimizations: {}\n\n",
        describe_optimizations(config.optimizations())
    ));
    out
}

pub fn render_deploy_summary(outcome: &DeploymentOutcome, caps: TerminalCapabilities) -> String {
    format!(
        "\n{} Deployed {} to {} in {:.1}s ({} events)\n",
        Icon::Success.colored(caps.supports_color, caps.supports_unicode),
        outcome.model_id,
        outcome.target.display_name(),
        outcome.elapsed.as_secs_f64(),
        outcome.events_emitted
    )
}

/// `8bit quantization, LoRA, vLLM`, or `none`
pub fn describe_optimizations(optimizations: &Optimizations) -> String {
    let mut parts = Vec::new();
    if optimizations.quantization.is_enabled() {
        parts.push(format!("{} quantization", optimizations.quantization));
    }
    if optimizations.lora {
        parts.push("LoRA".to_string());
    }
    if optimizations.vllm {
        parts.push("vLLM".to_string());
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}
