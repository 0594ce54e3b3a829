//! `modelship plan`

use anyhow::Result;
use modelship::config::Config;
use modelship::presentation::{create_orchestrator, FactoryOptions};
use modelship::DeployError;

use super::build_request;
use crate::cli::ModelArgs;
use crate::ui::terminal::detect_capabilities;
use crate::ui::views::plan::render_plan;

pub fn cmd_plan(config: &Config, model: &ModelArgs, json: bool) -> Result<()> {
    let deployment = build_request(model, config)
        .to_config()
        .map_err(DeployError::from)?;
    let orchestrator = create_orchestrator(config, &FactoryOptions::default());
    let plan = orchestrator.plan(&deployment)?;

    if json {
        let steps: Vec<_> = plan
            .expected_events()
            .into_iter()
            .map(|event| {
                serde_json::json!({
                    "stage": event.stage,
                    "progress": event.progress,
                    "message": event.message,
                })
            })
            .collect();
        let output = serde_json::json!({
            "event": "plan",
            "model_id": deployment.model_id().as_str(),
            "target": plan.target,
            "steps": steps,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!("{}", render_plan(&deployment, &plan, detect_capabilities()));
    Ok(())
}
