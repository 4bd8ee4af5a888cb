//! Reset sequencing relative to the first clock edge.

use randsim_config::{ResetPolarity, ResetSpec};

/// The level to drive on the reset port during cycle `cycle`.
///
/// An active-high reset is asserted on cycle 0 only; an active-low reset is
/// held low on cycle 0 and released to 1 thereafter. Applied immediately
/// after the clock-low step and before any stimulus for the cycle.
pub fn reset_level(spec: &ResetSpec, cycle: u32) -> bool {
    match spec.polarity {
        ResetPolarity::ActiveHigh => cycle == 0,
        ResetPolarity::ActiveLow => cycle != 0,
    }
}
