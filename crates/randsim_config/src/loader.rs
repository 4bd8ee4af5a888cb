//! Interface-descriptor loading and validation.
//!
//! The descriptor is a small TOML document produced by an external
//! front-end, naming the top-level module and listing its ports in
//! declaration order:
//!
//! ```toml
//! [module]
//! name = "counter"
//!
//! [[ports]]
//! name = "clk"
//! direction = "input"
//! width = 1
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use randsim_common::{ModuleInterface, Port};

use crate::error::ConfigError;

#[derive(Debug, Deserialize)]
struct InterfaceDoc {
    module: ModuleDoc,
    #[serde(default)]
    ports: Vec<Port>,
}

#[derive(Debug, Deserialize)]
struct ModuleDoc {
    name: String,
}

/// Loads and validates an interface descriptor from a TOML file.
pub fn load_interface(path: &Path) -> Result<ModuleInterface, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_interface_from_str(&content)
}

/// Parses and validates an interface descriptor from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_interface_from_str(content: &str) -> Result<ModuleInterface, ConfigError> {
    let doc: InterfaceDoc =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_interface(&doc)?;
    Ok(ModuleInterface::new(doc.module.name, doc.ports))
}

/// Validates that the descriptor names a module and declares a consistent
/// port list: at least one port, unique names, nonzero widths.
fn validate_interface(doc: &InterfaceDoc) -> Result<(), ConfigError> {
    if doc.module.name.is_empty() {
        return Err(ConfigError::MissingField("module.name".to_string()));
    }
    if doc.ports.is_empty() {
        return Err(ConfigError::MissingField("ports".to_string()));
    }
    let mut seen = HashSet::new();
    for port in &doc.ports {
        if port.width == 0 {
            return Err(ConfigError::ZeroWidthPort(port.name.clone()));
        }
        if !seen.insert(port.name.as_str()) {
            return Err(ConfigError::DuplicatePort(port.name.clone()));
        }
    }
    Ok(())
}
