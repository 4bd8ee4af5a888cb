//! Error types for model interaction and harness execution.

use std::io;

/// Errors reported by a [`SimModel`](crate::model::SimModel) implementation.
///
/// Model failures are fatal to the run; the harness never retries a cycle,
/// since re-stepping from a fresh model state would not reproduce the trace.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// An I/O failure while talking to the model.
    #[error("model I/O failure: {0}")]
    Io(#[from] io::Error),

    /// The model does not know the named port.
    #[error("model has no port '{0}'")]
    UnknownPort(String),

    /// The model replied with something the harness could not interpret.
    #[error("model protocol error: {0}")]
    Protocol(String),
}

/// Errors that can occur while constructing or running the harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// An input port is too wide for the stimulus value domain.
    #[error("port '{port}' is {width} bits wide; stimulus supports at most 64 bits")]
    WidthTooLarge {
        /// The declared port name.
        port: String,
        /// The declared width.
        width: u32,
    },

    /// The configured clock port is not an input of the module.
    #[error("clock port '{0}' not found among module inputs")]
    ClockPortMissing(String),

    /// The configured reset port is not an input of the module.
    #[error("reset port '{0}' not found among module inputs")]
    ResetPortMissing(String),

    /// The simulated model failed; the run aborts at the failing cycle.
    #[error("model failure: {0}")]
    Model(#[from] ModelError),

    /// A result sink could not be written.
    #[error("output sink error: {0}")]
    Sink(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_too_large_display() {
        let e = HarnessError::WidthTooLarge {
            port: "wide_bus".to_string(),
            width: 128,
        };
        assert_eq!(
            e.to_string(),
            "port 'wide_bus' is 128 bits wide; stimulus supports at most 64 bits"
        );
    }

    #[test]
    fn clock_missing_display() {
        let e = HarnessError::ClockPortMissing("clk".to_string());
        assert_eq!(e.to_string(), "clock port 'clk' not found among module inputs");
    }

    #[test]
    fn model_error_wraps() {
        let e = HarnessError::from(ModelError::UnknownPort("q".to_string()));
        assert_eq!(e.to_string(), "model failure: model has no port 'q'");
    }

    #[test]
    fn protocol_error_display() {
        let e = ModelError::Protocol("unexpected reply 'nope'".to_string());
        assert_eq!(e.to_string(), "model protocol error: unexpected reply 'nope'");
    }
}
