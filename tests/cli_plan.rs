mod common;

use serde_json::Value;
use tempfile::tempdir;

use common::run;

#[test]
fn test_plan_matches_deploy_events() {
    let dir = tempdir().unwrap();
    let plan = run(
        dir.path(),
        &["plan", "meta-llama/Llama-2-7b-hf", "-t", "aws", "--vllm", "--json"],
    );
    assert!(plan.status.success());

    let plan: Value = serde_json::from_slice(&plan.stdout).unwrap();
    assert_eq!(plan["event"], "plan");
    assert_eq!(plan["target"], "aws");

    let deploy = run(
        dir.path(),
        &[
            "deploy",
            "meta-llama/Llama-2-7b-hf",
            "-t",
            "aws",
            "--vllm",
            "--instant",
            "--json",
        ],
    );
    assert!(deploy.status.success());

    let deployed: Vec<(Value, Value)> = common::ndjson(&deploy)
        .into_iter()
        .map(|e| (e["progress"].clone(), e["message"].clone()))
        .collect();
    let planned: Vec<(Value, Value)> = plan["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| (s["progress"].clone(), s["message"].clone()))
        .collect();

    assert_eq!(planned, deployed);
    assert_eq!(planned[4].1, "Provisioning AWS resources in us-east-1...");
    assert_eq!(planned[5].1, "Uploading Llama-2-7b-hf artifacts to S3...");
}

#[test]
fn test_plan_human_output_lists_checkpoints() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["plan", "gpt2"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Deployment plan for gpt2 on Local"), "{stdout}");
    assert!(stdout.contains(" 70%  deployment     Deploying to Local..."), "{stdout}");
    assert!(stdout.contains("100%  complete"), "{stdout}");
}

#[test]
fn test_targets_lists_every_backend() {
    let dir = tempdir().unwrap();
    let output = run(dir.path(), &["targets", "--json"]);
    assert!(output.status.success());

    let targets: Vec<String> = common::ndjson(&output)
        .iter()
        .map(|e| e["target"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(targets, vec!["aws", "gcp", "local"]);
}
