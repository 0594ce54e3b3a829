use modelship::{DeployTarget, DeploymentConfig, DeploymentPlan};

use crate::ui::primitives::icon::Icon;
use crate::ui::terminal::TerminalCapabilities;

pub fn render_plan(
    config: &DeploymentConfig,
    plan: &DeploymentPlan,
    caps: TerminalCapabilities,
) -> String {
    let mut out = format!(
        "Deployment plan for {} on {}\n",
        config.model_name(),
        plan.target.display_name()
    );
    let pending = Icon::Pending.colored(caps.supports_color, caps.supports_unicode);
    for step in &plan.steps {
        out.push_str(&format!(
            "  {} {:>3}%  {:<14} {}\n",
            pending,
            step.checkpoint,
            step.stage.as_str(),
            step.message
        ));
    }
    out
}

pub fn render_targets(targets: &[DeployTarget], caps: TerminalCapabilities) -> String {
    let icon = Icon::Success.colored(caps.supports_color, caps.supports_unicode);
    targets
        .iter()
        .map(|target| format!("{} {:<6} {}\n", icon, target.as_str(), target.display_name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelship::config::Config;
    use modelship::presentation::{create_orchestrator, FactoryOptions};
    use modelship::{ModelId, Optimizations, Quantization};

    #[test]
    fn plan_lists_every_checkpoint() {
        let orchestrator = create_orchestrator(&Config::default(), &FactoryOptions::default());
        let config = DeploymentConfig::new(ModelId::new("gpt2").unwrap(), "GPT-2", DeployTarget::Local)
            .with_optimizations(Optimizations::new().with_quantization(Quantization::EightBit));
        let plan = orchestrator.plan(&config).unwrap();

        insta::assert_snapshot!(render_plan(&config, &plan, TerminalCapabilities::plain()), @r"
        Deployment plan for GPT-2 on Local
          [ ]  10%  initialization Initializing deployment of GPT-2
          [ ]  20%  download       Downloading model gpt2...
          [ ]  40%  optimization   Applying 8bit quantization
          [ ]  70%  deployment     Deploying to Local...
          [ ]  75%  deployment     Setting up local environment...
          [ ]  85%  deployment     Installing dependencies...
          [ ]  95%  deployment     Starting local inference server...
          [ ] 100%  complete       Deployment complete: GPT-2 is live on Local
        ");
    }

    #[test]
    fn targets_are_listed_one_per_line() {
        let rendered = render_targets(&DeployTarget::ALL, TerminalCapabilities::plain());
        assert_eq!(rendered, "[OK] aws    AWS\n[OK] gcp    GCP\n[OK] local  Local\n");
    }
}
