//! Random stimulus generation bounded to port width.

use rand::Rng;

use randsim_common::Port;

use crate::error::HarnessError;

/// Widest port the stimulus value domain can represent.
pub const MAX_STIMULUS_WIDTH: u32 = 64;

/// Draws one pseudo-random value per input port per cycle.
///
/// Owns the run's random source exclusively; the scheduler is the only
/// caller. Values satisfy `0 <= v < 2^width`. The bound is computed in
/// `u128` so a 64-bit port does not wrap, and wider ports are rejected as
/// a data error rather than silently truncated.
pub struct StimulusGen<R: Rng> {
    rng: R,
}

impl<R: Rng> StimulusGen<R> {
    /// Creates a generator around an owned random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws the next value for `port`, bounded to its bit width.
    ///
    /// Bounding is `draw % 2^width`. Since `2^width` always divides the
    /// generator's 2^64 range, the result is uniform.
    pub fn draw(&mut self, port: &Port) -> Result<u64, HarnessError> {
        if port.width > MAX_STIMULUS_WIDTH {
            return Err(HarnessError::WidthTooLarge {
                port: port.name.clone(),
                width: port.width,
            });
        }
        let bound: u128 = 1u128 << port.width;
        let raw = u128::from(self.rng.gen::<u64>());
        Ok((raw % bound) as u64)
    }
}
