//! Two-phase cycle scheduling.
//!
//! [`CycleScheduler`] orchestrates one run: a power-up settle step, then
//! per cycle a clock-low step, reset/stimulus application, a clock-high
//! step (the simulated rising edge), and output sampling. Stimulus is
//! applied while the clock is held low so the model samples the new values
//! on the edge; applying it after the rising edge would make it visible one
//! cycle late.

use rand::Rng;

use randsim_common::{sanitize, ModuleInterface, Port};
use randsim_config::SimConfig;

use crate::error::HarnessError;
use crate::model::SimModel;
use crate::record::{CycleRecord, RecordSink};
use crate::reset::reset_level;
use crate::stimulus::{StimulusGen, MAX_STIMULUS_WIDTH};

/// The result of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimSummary {
    /// Number of cycles simulated, equal to the configured cycle count.
    pub cycles_run: u32,
}

/// Drives a simulated model through `config.cycles` clock cycles.
///
/// Construction performs every configuration-time check so that
/// [`run`](Self::run) only fails on model or sink errors, which abort the
/// whole run. Port identifiers are resolved to their sanitized form once,
/// up front.
pub struct CycleScheduler<'a, M: SimModel, R: Rng> {
    model: &'a mut M,
    config: &'a SimConfig,
    stimulus: StimulusGen<R>,
    clock_key: String,
    reset_key: Option<String>,
    /// `(sanitized key, port)` per randomized input, in declaration order.
    stim_inputs: Vec<(String, Port)>,
    /// `(declared name, sanitized key)` per output, in declaration order.
    outputs: Vec<(String, String)>,
}

impl<'a, M: SimModel, R: Rng> CycleScheduler<'a, M, R> {
    /// Builds a scheduler, resolving all port identifiers up front.
    ///
    /// Fails before any model interaction if the clock or reset port is not
    /// an input of the module, or if a randomized input is wider than the
    /// stimulus value domain.
    pub fn new(
        model: &'a mut M,
        interface: &ModuleInterface,
        config: &'a SimConfig,
        rng: R,
    ) -> Result<Self, HarnessError> {
        let clock_key = input_key(interface, &config.clock_port)
            .ok_or_else(|| HarnessError::ClockPortMissing(config.clock_port.clone()))?;

        let reset_key = match &config.reset {
            Some(spec) => Some(
                input_key(interface, &spec.port)
                    .ok_or_else(|| HarnessError::ResetPortMissing(spec.port.clone()))?,
            ),
            None => None,
        };

        let reset_name = config.reset.as_ref().map(|s| s.port.as_str());
        let mut stim_inputs = Vec::new();
        for port in interface.inputs() {
            if port.name == config.clock_port || Some(port.name.as_str()) == reset_name {
                continue;
            }
            if port.width > MAX_STIMULUS_WIDTH {
                return Err(HarnessError::WidthTooLarge {
                    port: port.name.clone(),
                    width: port.width,
                });
            }
            stim_inputs.push((sanitize(&port.name), port.clone()));
        }

        let outputs = interface
            .outputs()
            .map(|p| (p.name.clone(), sanitize(&p.name)))
            .collect();

        Ok(Self {
            model,
            config,
            stimulus: StimulusGen::new(rng),
            clock_key,
            reset_key,
            stim_inputs,
            outputs,
        })
    }

    /// Runs all cycles, handing each [`CycleRecord`] to every sink in order.
    pub fn run(&mut self, sinks: &mut [Box<dyn RecordSink>]) -> Result<SimSummary, HarnessError> {
        // Power-up settle: one step with no clock or stimulus applied.
        self.model.step()?;

        for cycle in 0..self.config.cycles {
            let record = self.run_cycle(cycle)?;
            for sink in sinks.iter_mut() {
                sink.record(&record)?;
            }
        }

        for sink in sinks.iter_mut() {
            sink.finish()?;
        }

        Ok(SimSummary {
            cycles_run: self.config.cycles,
        })
    }

    /// Executes one full low-then-high cycle and samples the outputs.
    fn run_cycle(&mut self, cycle: u32) -> Result<CycleRecord, HarnessError> {
        self.model.set(&self.clock_key, 0)?;
        self.model.step()?;

        if let (Some(key), Some(spec)) = (&self.reset_key, &self.config.reset) {
            self.model.set(key, u64::from(reset_level(spec, cycle)))?;
        }

        // Cycle 0 applies the reset sequence only; stimulus starts at cycle 1.
        if cycle > 0 {
            for (key, port) in &self.stim_inputs {
                let value = self.stimulus.draw(port)?;
                self.model.set(key, value)?;
            }
        }

        self.model.set(&self.clock_key, 1)?;
        self.model.step()?;

        let mut outputs = Vec::with_capacity(self.outputs.len());
        for (name, key) in &self.outputs {
            outputs.push((name.clone(), self.model.get(key)?));
        }

        Ok(CycleRecord {
            index: cycle,
            outputs,
        })
    }
}

/// Resolves a declared input port to its sanitized identifier, or `None`
/// if the module has no input of that name.
fn input_key(interface: &ModuleInterface, port: &str) -> Option<String> {
    interface
        .inputs()
        .find(|p| p.name == port)
        .map(|p| sanitize(&p.name))
}
