//! Randomized verification harness for synchronous digital modules.
//!
//! Drives a simulated model through a fixed number of clock cycles,
//! applying pseudo-random stimulus to every data input and recording the
//! output port values after each rising edge. The model itself is abstract:
//! anything implementing [`SimModel`] can be driven, regardless of how it
//! was compiled or where it runs.
//!
//! The top-level entry point is [`run_random_sim`]; finer-grained control
//! is available through [`CycleScheduler`] directly.

#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod record;
pub mod reset;
pub mod schedule;
pub mod stimulus;

pub use error::{HarnessError, ModelError};
pub use model::SimModel;
pub use record::{ConsoleSink, CycleRecord, FileSink, RecordSink, BLOCK_DELIMITER};
pub use schedule::{CycleScheduler, SimSummary};
pub use stimulus::{StimulusGen, MAX_STIMULUS_WIDTH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use randsim_common::ModuleInterface;
use randsim_config::SimConfig;

/// Runs one randomized simulation of `model` as configured.
///
/// Builds the cycle scheduler (validating the configuration against the
/// module interface), attaches a console sink when `config.verbose` is set
/// and a file sink when `config.output_path` is set, seeds the random
/// source from `config.seed` or from system entropy, and runs every cycle.
///
/// Scheduler construction happens before the output file is created, so a
/// misconfigured run leaves no file behind.
pub fn run_random_sim<M: SimModel>(
    model: &mut M,
    interface: &ModuleInterface,
    config: &SimConfig,
) -> Result<SimSummary, HarnessError> {
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut scheduler = CycleScheduler::new(model, interface, config, rng)?;

    let mut sinks: Vec<Box<dyn RecordSink>> = Vec::new();
    if config.verbose {
        sinks.push(Box::new(ConsoleSink::new()));
    }
    if let Some(path) = &config.output_path {
        sinks.push(Box::new(FileSink::create(path)?));
    }

    scheduler.run(&mut sinks)
}

#[cfg(test)]
mod tests {
    use super::*;

    use randsim_common::{Port, PortDirection};
    use randsim_config::{ResetPolarity, ResetSpec};

    /// Accepts any stimulus; every output reads back 7.
    struct ConstModel;

    impl SimModel for ConstModel {
        fn step(&mut self) -> Result<(), ModelError> {
            Ok(())
        }

        fn set(&mut self, _port: &str, _value: u64) -> Result<(), ModelError> {
            Ok(())
        }

        fn get(&mut self, _port: &str) -> Result<u64, ModelError> {
            Ok(7)
        }
    }

    fn interface() -> ModuleInterface {
        ModuleInterface::new(
            "top",
            vec![
                Port::new("clk", PortDirection::Input, 1),
                Port::new("reset", PortDirection::Input, 1),
                Port::new("d", PortDirection::Input, 8),
                Port::new("q", PortDirection::Output, 8),
            ],
        )
    }

    #[test]
    fn file_output_written_per_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.txt");
        let config = SimConfig {
            cycles: 3,
            reset: Some(ResetSpec {
                port: "reset".to_string(),
                polarity: ResetPolarity::ActiveHigh,
            }),
            output_path: Some(path.clone()),
            seed: Some(1),
            ..SimConfig::default()
        };
        let mut model = ConstModel;
        let summary = run_random_sim(&mut model, &interface(), &config).unwrap();
        assert_eq!(summary.cycles_run, 3);

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("= cycle").count(), 3);
        assert!(text.contains("= cycle 1\n"));
        assert!(text.contains("= cycle 3\n"));
        assert_eq!(text.matches("q= 7").count(), 3);
    }

    #[test]
    fn misconfigured_run_creates_no_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim.txt");
        let config = SimConfig {
            clock_port: "no_such_clock".to_string(),
            output_path: Some(path.clone()),
            ..SimConfig::default()
        };
        let mut model = ConstModel;
        let err = run_random_sim(&mut model, &interface(), &config).unwrap_err();
        assert!(matches!(err, HarnessError::ClockPortMissing(_)));
        assert!(!path.exists());
    }

    #[test]
    fn seeded_runs_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut outputs = Vec::new();
        for name in ["a.txt", "b.txt"] {
            let path = dir.path().join(name);
            let config = SimConfig {
                cycles: 10,
                output_path: Some(path.clone()),
                seed: Some(99),
                ..SimConfig::default()
            };
            let mut model = ConstModel;
            run_random_sim(&mut model, &interface(), &config).unwrap();
            outputs.push(std::fs::read_to_string(&path).unwrap());
        }
        assert_eq!(outputs[0], outputs[1]);
    }

    #[test]
    fn no_sinks_still_runs() {
        let config = SimConfig {
            cycles: 2,
            seed: Some(0),
            ..SimConfig::default()
        };
        let mut model = ConstModel;
        let summary = run_random_sim(&mut model, &interface(), &config).unwrap();
        assert_eq!(summary.cycles_run, 2);
    }
}
