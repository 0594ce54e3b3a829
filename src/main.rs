//! Modelship CLI - staged model deployment orchestrator
//!
//! Usage: modelship <COMMAND>
//!
//! Commands:
//!   deploy   Deploy a model to a target
//!   plan     Show the stages a deployment would report
//!   targets  List deployment targets

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use modelship::logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(ui::error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = commands::load_config(cli.config.as_deref())?;
    logging::init(logging::verbosity_from_flags(
        config.output.verbosity,
        cli.verbose,
    ));

    match cli.command {
        Commands::Deploy {
            model,
            instant,
            simulate_failure,
        } => commands::deploy::cmd_deploy(&config, &model, instant, simulate_failure, cli.json),
        Commands::Plan { model } => commands::plan::cmd_plan(&config, &model, cli.json),
        Commands::Targets => commands::targets::cmd_targets(&config, cli.json),
    }
}
