//! `modelship targets`

use anyhow::Result;
use modelship::config::Config;
use modelship::presentation::{create_orchestrator, FactoryOptions};

use crate::ui::terminal::detect_capabilities;
use crate::ui::views::plan::render_targets;

pub fn cmd_targets(config: &Config, json: bool) -> Result<()> {
    let orchestrator = create_orchestrator(config, &FactoryOptions::default());
    let targets = orchestrator.backends().targets();

    if json {
        for target in targets {
            let line = serde_json::json!({
                "event": "target",
                "target": target,
                "name": target.display_name(),
            });
            println!("{}", serde_json::to_string(&line)?);
        }
        return Ok(());
    }

    print!("{}", render_targets(&targets, detect_capabilities()));
    Ok(())
}
