//! The module boundary model: ports, directions, and interfaces.
//!
//! A [`ModuleInterface`] is produced by an external front-end (a parser or
//! elaboration tool) and consumed read-only by the rest of the driver. Port
//! order is declaration order and is preserved through stimulus application
//! and result recording.

use serde::{Deserialize, Serialize};

/// The direction of a port on the module boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Driven by the harness.
    Input,
    /// Sampled by the harness.
    Output,
}

/// A named, directional, fixed-width signal on a module's boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// The port name as declared by the front-end. Unique within a module.
    pub name: String,
    /// Whether the harness drives or samples this port.
    pub direction: PortDirection,
    /// Bit width, at least 1.
    #[serde(default = "default_width")]
    pub width: u32,
}

fn default_width() -> u32 {
    1
}

impl Port {
    /// Creates a port. Convenience constructor for tests and in-process models.
    pub fn new(name: impl Into<String>, direction: PortDirection, width: u32) -> Self {
        Self {
            name: name.into(),
            direction,
            width,
        }
    }
}

/// Immutable description of a module's boundary: its name and ordered ports.
///
/// Obtained once at startup from the external descriptor and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleInterface {
    /// The top-level module name.
    pub name: String,
    /// All ports, in declaration order.
    pub ports: Vec<Port>,
}

impl ModuleInterface {
    /// Creates an interface from a name and an ordered port list.
    pub fn new(name: impl Into<String>, ports: Vec<Port>) -> Self {
        Self {
            name: name.into(),
            ports,
        }
    }

    /// Iterates over input ports in declaration order.
    pub fn inputs(&self) -> impl Iterator<Item = &Port> {
        self.ports
            .iter()
            .filter(|p| p.direction == PortDirection::Input)
    }

    /// Iterates over output ports in declaration order.
    pub fn outputs(&self) -> impl Iterator<Item = &Port> {
        self.ports
            .iter()
            .filter(|p| p.direction == PortDirection::Output)
    }

    /// Finds a port by its declared name.
    pub fn find_port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dff_interface() -> ModuleInterface {
        ModuleInterface::new(
            "dff",
            vec![
                Port::new("clk", PortDirection::Input, 1),
                Port::new("reset", PortDirection::Input, 1),
                Port::new("d", PortDirection::Input, 4),
                Port::new("q", PortDirection::Output, 4),
            ],
        )
    }

    #[test]
    fn inputs_in_declaration_order() {
        let iface = dff_interface();
        let names: Vec<&str> = iface.inputs().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["clk", "reset", "d"]);
    }

    #[test]
    fn outputs_in_declaration_order() {
        let iface = dff_interface();
        let names: Vec<&str> = iface.outputs().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["q"]);
    }

    #[test]
    fn find_port_by_name() {
        let iface = dff_interface();
        let d = iface.find_port("d").unwrap();
        assert_eq!(d.width, 4);
        assert_eq!(d.direction, PortDirection::Input);
        assert!(iface.find_port("missing").is_none());
    }

    #[test]
    fn direction_serde_lowercase() {
        let json = serde_json::to_string(&PortDirection::Input).unwrap();
        assert_eq!(json, r#""input""#);
        let back: PortDirection = serde_json::from_str(r#""output""#).unwrap();
        assert_eq!(back, PortDirection::Output);
    }

    #[test]
    fn port_width_defaults_to_one() {
        let port: Port = serde_json::from_str(r#"{"name":"clk","direction":"input"}"#).unwrap();
        assert_eq!(port.width, 1);
    }
}
