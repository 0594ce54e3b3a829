//! Progress sequences over every target and optimization combination.

use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use modelship::config::{Config, WorkMode};
use modelship::error::ReporterError;
use modelship::presentation::{create_orchestrator, FactoryOptions};
use modelship::{
    DeployTarget, DeploymentConfig, ModelId, Optimizations, ProgressEvent, ProgressReporter,
    Quantization, Stage,
};

#[derive(Default)]
struct Recorder(Mutex<Vec<ProgressEvent>>);

impl ProgressReporter for Recorder {
    fn report(&self, event: &ProgressEvent) -> Result<(), ReporterError> {
        self.0.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn target() -> impl Strategy<Value = DeployTarget> {
    prop::sample::select(DeployTarget::ALL.to_vec())
}

fn optimizations() -> impl Strategy<Value = Optimizations> {
    (
        prop::sample::select(vec![
            Quantization::None,
            Quantization::FourBit,
            Quantization::EightBit,
        ]),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(q, lora, vllm)| {
            Optimizations::new()
                .with_quantization(q)
                .with_lora(lora)
                .with_vllm(vllm)
        })
}

fn instant_config() -> Config {
    let mut config = Config::default();
    config.work.mode = WorkMode::Instant;
    config
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a successful run is strictly increasing and ends with a single 100.
    #[test]
    fn property_successful_run_is_monotonic_and_complete(
        target in target(),
        optimizations in optimizations(),
        model in "[a-z][a-z0-9-]{0,12}(/[A-Za-z0-9.-]{1,12})?",
    ) {
        let orchestrator = create_orchestrator(&instant_config(), &FactoryOptions::default());
        let config = DeploymentConfig::new(ModelId::new(&model).unwrap(), "", target)
            .with_optimizations(optimizations);

        let recorder = Arc::new(Recorder::default());
        let outcome = orchestrator.run(&config, &recorder).unwrap();
        let events = recorder.0.lock().unwrap().clone();

        prop_assert_eq!(outcome.events_emitted, events.len());
        prop_assert!(events.windows(2).all(|w| w[0].progress < w[1].progress));
        prop_assert_eq!(events.iter().filter(|e| e.progress == 100).count(), 1);

        let last = events.last().unwrap();
        prop_assert_eq!(last.stage, Stage::Complete);
        prop_assert_eq!(last.progress, 100);

        let optional = [
            optimizations.quantization.is_enabled(),
            optimizations.lora,
            optimizations.vllm,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count();
        prop_assert_eq!(events.len(), 7 + optional);
    }

    /// PROPERTY: backend sub-stages stay inside 75..=95, after dispatch.
    #[test]
    fn property_backend_events_stay_in_band(
        target in target(),
        optimizations in optimizations(),
    ) {
        let orchestrator = create_orchestrator(&instant_config(), &FactoryOptions::default());
        let config = DeploymentConfig::new(ModelId::new("gpt2").unwrap(), "GPT-2", target)
            .with_optimizations(optimizations);

        let recorder = Recorder::default();
        orchestrator.run(&config, &recorder).unwrap();
        let events = recorder.0.into_inner().unwrap();

        let dispatch = events.iter().position(|e| e.progress == 70).unwrap();
        let backend = &events[dispatch + 1..events.len() - 1];
        prop_assert_eq!(backend.len(), 3);
        prop_assert!(backend
            .iter()
            .all(|e| (75..=95).contains(&e.progress) && e.stage == Stage::Deployment));
    }

    /// PROPERTY: the plan lists exactly the events a run emits.
    #[test]
    fn property_plan_matches_run(
        target in target(),
        optimizations in optimizations(),
    ) {
        let orchestrator = create_orchestrator(&instant_config(), &FactoryOptions::default());
        let config = DeploymentConfig::new(ModelId::new("bert-base").unwrap(), "BERT", target)
            .with_optimizations(optimizations);

        let recorder = Recorder::default();
        orchestrator.run(&config, &recorder).unwrap();
        let plan = orchestrator.plan(&config).unwrap();

        prop_assert_eq!(plan.expected_events(), recorder.0.into_inner().unwrap());
    }
}
