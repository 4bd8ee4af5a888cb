//! Run configuration and interface-descriptor loading for randsim.
//!
//! This crate owns everything decided before the first simulated cycle:
//! the [`SimConfig`] describing how a run behaves, the TOML loader for the
//! module interface descriptor produced by an external front-end, and the
//! validation that rejects inconsistent configurations up front.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_interface, load_interface_from_str};
pub use types::{
    resolve_reset, ResetPolarity, ResetSpec, SimConfig, DEFAULT_CLOCK_PORT, DEFAULT_CYCLES,
    DEFAULT_OUTPUT_PATH,
};
