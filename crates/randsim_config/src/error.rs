//! Error types for configuration and descriptor validation.

/// Errors that can occur when loading a descriptor or assembling a run
/// configuration. All variants are detected before any cycle runs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the descriptor file.
    #[error("failed to read interface description: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse interface description: {0}")]
    Parse(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Two ports share the same declared name.
    #[error("duplicate port '{0}'")]
    DuplicatePort(String),

    /// A port was declared with width 0.
    #[error("port '{0}' has width 0; ports must be at least 1 bit wide")]
    ZeroWidthPort(String),

    /// Both an active-high and an active-low reset port were configured.
    #[error("both reset ('{high}') and reset_n ('{low}') configured; only one may be set")]
    ConflictingReset {
        /// The configured active-high reset port.
        high: String,
        /// The configured active-low reset port.
        low: String,
    },

    /// The cycle count was 0.
    #[error("cycle count must be at least 1")]
    ZeroCycles,
}
