//! Optimization planning service
//!
//! Derives the optional optimization stages from a config's flags. The order
//! is fixed (quantization, LoRA, vLLM) regardless of how the flags were set,
//! and unselected stages are dropped without renormalizing the checkpoints.

use crate::domain::entities::Optimizations;
use crate::domain::value_objects::{checkpoints, Quantization};

/// An optional optimization pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizationPass {
    Quantization(Quantization),
    Lora,
    Vllm,
}

impl OptimizationPass {
    /// Work step name for this pass
    pub fn step_name(&self) -> &'static str {
        match self {
            OptimizationPass::Quantization(_) => "quantization",
            OptimizationPass::Lora => "lora",
            OptimizationPass::Vllm => "vllm",
        }
    }

    pub fn checkpoint(&self) -> u8 {
        match self {
            OptimizationPass::Quantization(_) => checkpoints::QUANTIZATION,
            OptimizationPass::Lora => checkpoints::LORA,
            OptimizationPass::Vllm => checkpoints::VLLM,
        }
    }

    pub fn message(&self) -> String {
        match self {
            OptimizationPass::Quantization(q) => format!("Applying {} quantization", q),
            OptimizationPass::Lora => "Applying LoRA adapters".to_string(),
            OptimizationPass::Vllm => "Compiling model for vLLM".to_string(),
        }
    }
}

/// A pass selected for execution, with its checkpoint and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOptimization {
    pub pass: OptimizationPass,
    pub checkpoint: u8,
    pub message: String,
}

/// Plan the optional optimization stages for a set of flags
pub fn plan_optimizations(optimizations: &Optimizations) -> Vec<PlannedOptimization> {
    let mut passes = Vec::with_capacity(3);

    if optimizations.quantization.is_enabled() {
        passes.push(OptimizationPass::Quantization(optimizations.quantization));
    }
    if optimizations.lora {
        passes.push(OptimizationPass::Lora);
    }
    if optimizations.vllm {
        passes.push(OptimizationPass::Vllm);
    }

    passes
        .into_iter()
        .map(|pass| PlannedOptimization {
            pass,
            checkpoint: pass.checkpoint(),
            message: pass.message(),
        })
        .collect()
}
