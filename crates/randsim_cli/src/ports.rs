//! `randsim ports` — print the parsed port table of a module interface.

use std::fmt::Write as _;

use randsim_common::{ModuleInterface, NameTable, PortDirection};

use crate::PortsArgs;

/// Runs the `randsim ports` command.
pub fn run(args: &PortsArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let interface = randsim_config::load_interface(&args.interface)?;
    print!("{}", render_table(&interface));
    Ok(0)
}

/// Renders the port table: module header, then one line per port with
/// direction, width, and the sanitized identifier the model sees.
fn render_table(interface: &ModuleInterface) -> String {
    let names = NameTable::new(interface);
    let name_width = interface
        .ports
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "module {}", interface.name);
    for port in &interface.ports {
        let direction = match port.direction {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        };
        let key = names.get(&port.name).unwrap_or(port.name.as_str());
        let _ = writeln!(
            out,
            "  {:name_width$}  {direction:6}  {:>5}  {key}",
            port.name, port.width
        );
    }
    out
}
