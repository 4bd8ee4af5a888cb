//! Runtime configuration for a simulation run.

use std::path::PathBuf;

use crate::error::ConfigError;

/// Default number of simulated cycles.
pub const DEFAULT_CYCLES: u32 = 20;

/// Default clock port name.
pub const DEFAULT_CLOCK_PORT: &str = "clk";

/// Default file-sink path when file output is requested without a path.
pub const DEFAULT_OUTPUT_PATH: &str = "sim.txt";

/// Polarity of the configured reset port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetPolarity {
    /// The module resets while the port reads 1.
    ActiveHigh,
    /// The module resets while the port reads 0.
    ActiveLow,
}

/// A reset port together with its polarity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResetSpec {
    /// The declared name of the reset port.
    pub port: String,
    /// Whether the port resets at 1 or at 0.
    pub polarity: ResetPolarity,
}

/// Configuration for one simulation run. Immutable once the run starts.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Number of full clock cycles to simulate.
    pub cycles: u32,
    /// Name of the clock port, toggled by the scheduler.
    pub clock_port: String,
    /// Optional reset port pulsed on cycle 0.
    pub reset: Option<ResetSpec>,
    /// Whether per-cycle results are printed to the console.
    pub verbose: bool,
    /// Optional file sink for per-cycle results.
    pub output_path: Option<PathBuf>,
    /// Optional fixed RNG seed. `None` seeds from entropy per run.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cycles: DEFAULT_CYCLES,
            clock_port: DEFAULT_CLOCK_PORT.to_string(),
            reset: None,
            verbose: false,
            output_path: None,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Validates invariants that must hold before any cycle runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }
}

/// Resolves the reset configuration from the two mutually exclusive options.
///
/// Configuring both an active-high and an active-low reset is a configuration
/// error, not a silent override.
pub fn resolve_reset(
    reset: Option<String>,
    reset_n: Option<String>,
) -> Result<Option<ResetSpec>, ConfigError> {
    match (reset, reset_n) {
        (Some(high), Some(low)) => Err(ConfigError::ConflictingReset { high, low }),
        (Some(port), None) => Ok(Some(ResetSpec {
            port,
            polarity: ResetPolarity::ActiveHigh,
        })),
        (None, Some(port)) => Ok(Some(ResetSpec {
            port,
            polarity: ResetPolarity::ActiveLow,
        })),
        (None, None) => Ok(None),
    }
}
