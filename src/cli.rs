use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Modelship - staged model deployment orchestrator
#[derive(Parser, Debug)]
#[command(name = "modelship")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./modelship.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a model to a target
    Deploy {
        #[command(flatten)]
        model: ModelArgs,

        /// Complete every stage immediately instead of simulating work
        #[arg(long)]
        instant: bool,

        /// Make a step fail (e.g. download, aws.upload_artifacts)
        #[arg(long, value_name = "STEP", hide = true)]
        simulate_failure: Vec<String>,
    },

    /// Show the stages a deployment would report, without running it
    Plan {
        #[command(flatten)]
        model: ModelArgs,
    },

    /// List deployment targets
    Targets,
}

/// What to deploy, where and how
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Model identifier, e.g. meta-llama/Llama-2-7b-hf
    #[arg(value_name = "MODEL_ID")]
    pub model_id: String,

    /// Display name (defaults to the model identifier)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Deployment target: aws, gcp or local
    #[arg(short, long)]
    pub target: Option<String>,

    /// Quantization: none, 4bit or 8bit
    #[arg(short, long)]
    pub quantization: Option<String>,

    /// Apply LoRA adapters
    #[arg(long, overrides_with = "no_lora")]
    pub lora: bool,

    /// Skip LoRA even when the config enables it
    #[arg(long, overrides_with = "lora")]
    pub no_lora: bool,

    /// Compile for vLLM serving
    #[arg(long, overrides_with = "no_vllm")]
    pub vllm: bool,

    /// Skip vLLM compilation even when the config enables it
    #[arg(long, overrides_with = "vllm")]
    pub no_vllm: bool,
}

impl ModelArgs {
    /// `--lora` / `--no-lora`, `None` when neither was given
    pub fn lora_override(&self) -> Option<bool> {
        flag_override(self.lora, self.no_lora)
    }

    /// `--vllm` / `--no-vllm`, `None` when neither was given
    pub fn vllm_override(&self) -> Option<bool> {
        flag_override(self.vllm, self.no_vllm)
    }
}

fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
