//! Shared foundational types for the randsim verification driver.
//!
//! This crate provides the module boundary model (ports, directions,
//! interfaces) and the identifier sanitizing used to address ports on a
//! compiled simulation model.

#![warn(missing_docs)]

pub mod port;
pub mod sanitize;

pub use port::{ModuleInterface, Port, PortDirection};
pub use sanitize::{sanitize, NameTable};
