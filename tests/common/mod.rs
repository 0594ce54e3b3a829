//! Shared helpers for CLI integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;

const MODELSHIP_VARS: &[&str] = &[
    "MODELSHIP_TARGET",
    "MODELSHIP_QUANTIZATION",
    "MODELSHIP_WORK_MODE",
    "MODELSHIP_STEP_DELAY_MS",
    "MODELSHIP_AWS_REGION",
    "MODELSHIP_GCP_PROJECT",
    "MODELSHIP_GCP_REGION",
    "MODELSHIP_VERBOSITY",
];

/// `modelship` running in `dir` with an isolated home and no MODELSHIP_* env.
pub fn modelship(dir: &Path) -> Command {
    let home = dir.join("fake_home");
    std::fs::create_dir_all(&home).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_modelship"));
    cmd.current_dir(dir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    for var in MODELSHIP_VARS {
        cmd.env_remove(var);
    }
    cmd
}

pub fn run(dir: &Path, args: &[&str]) -> Output {
    modelship(dir).args(args).output().unwrap()
}

/// Parse stdout as NDJSON.
pub fn ndjson(output: &Output) -> Vec<Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON line {l:?}: {e}")))
        .collect()
}

/// Progress values of the `progress` events, in order.
pub fn progress_values(events: &[Value]) -> Vec<u64> {
    events
        .iter()
        .filter(|e| e["event"] == "progress")
        .map(|e| e["progress"].as_u64().unwrap())
        .collect()
}
