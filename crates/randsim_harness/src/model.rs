//! The simulated-model capability contract.

use crate::error::ModelError;

/// An executable simulation model of the module under verification.
///
/// The harness drives a model exclusively through this trait and never
/// depends on how the model was produced: a compiled native model linked
/// in-process and a generated external program behind a pipe both satisfy
/// the same contract. Port names are sanitized identifiers (see
/// [`randsim_common::sanitize`]).
pub trait SimModel {
    /// Advances the model by one evaluation delta, resolving combinational
    /// logic to a fixed point.
    fn step(&mut self) -> Result<(), ModelError>;

    /// Drives a named input port. The caller guarantees the value fits the
    /// port's declared width.
    fn set(&mut self, port: &str, value: u64) -> Result<(), ModelError>;

    /// Samples a named output port's current value.
    fn get(&mut self, port: &str) -> Result<u64, ModelError>;
}
