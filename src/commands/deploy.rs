//! `modelship deploy`

use anyhow::{Context, Result};
use modelship::config::Config;
use modelship::infrastructure::{JsonProgressSink, TracingProgressSink};
use modelship::presentation::{create_orchestrator, FactoryOptions};
use modelship::{CancellationToken, DeployError};
use tracing::debug;

use super::build_request;
use crate::cli::ModelArgs;
use crate::ui::console::ConsoleProgressSink;
use crate::ui::terminal::detect_capabilities;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

pub fn cmd_deploy(
    config: &Config,
    model: &ModelArgs,
    instant: bool,
    simulate_failure: Vec<String>,
    json: bool,
) -> Result<()> {
    let request = build_request(model, config);
    let orchestrator = create_orchestrator(
        config,
        &FactoryOptions {
            instant,
            failures: simulate_failure,
        },
    );

    let cancellation = CancellationToken::new();
    let handler_token = cancellation.clone();
    ctrlc::set_handler(move || handler_token.cancel())
        .context("failed to install Ctrl+C handler")?;

    if json {
        let sink = (JsonProgressSink::stdout(), TracingProgressSink);
        let outcome = orchestrator.run_request(&request, &sink, &cancellation)?;
        debug!(events = outcome.events_emitted, "deploy finished");
        return Ok(());
    }

    let deployment = request.to_config().map_err(DeployError::from)?;
    let caps = detect_capabilities();

    print!("{}", render_deploy_header(&deployment, caps));
    let sink = (ConsoleProgressSink::stdout(caps), TracingProgressSink);
    let outcome = orchestrator.run_with_cancel(&deployment, &sink, &cancellation)?;
    print!("{}", render_deploy_summary(&outcome, caps));

    Ok(())
}
