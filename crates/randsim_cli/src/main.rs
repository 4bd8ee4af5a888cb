//! randsim CLI — randomized verification driver for synchronous modules.
//!
//! Provides `randsim run` to drive a compiled model through a randomized
//! simulation and `randsim ports` to inspect a parsed module interface.

#![warn(missing_docs)]

mod model;
mod ports;
mod run;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

/// randsim — randomized functional verification for synchronous hardware.
#[derive(Parser, Debug)]
#[command(name = "randsim", version, about = "Randomized simulation driver")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a randomized simulation of a module.
    Run(RunArgs),
    /// Print the parsed port table of a module interface.
    Ports(PortsArgs),
}

/// Arguments for the `randsim run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the module interface description (TOML).
    pub interface: PathBuf,

    /// Command line of the compiled model process to drive.
    #[arg(short, long)]
    pub model: String,

    /// Number of clock cycles to simulate.
    #[arg(long, default_value_t = randsim_config::DEFAULT_CYCLES)]
    pub cycles: u32,

    /// Name of the clock input port.
    #[arg(long, default_value = randsim_config::DEFAULT_CLOCK_PORT)]
    pub clock: String,

    /// Name of an active-high reset input port.
    #[arg(long)]
    pub reset: Option<String>,

    /// Name of an active-low reset input port.
    #[arg(long = "reset-n")]
    pub reset_n: Option<String>,

    /// Print each cycle's results to the console.
    #[arg(short, long)]
    pub verbose: bool,

    /// Write results to a file. Defaults to `sim.txt` when the flag is
    /// given without a path; no file is written when the flag is absent.
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = randsim_config::DEFAULT_OUTPUT_PATH
    )]
    pub output: Option<PathBuf>,

    /// Seed for the random stimulus source (system entropy if omitted).
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Arguments for the `randsim ports` subcommand.
#[derive(Parser, Debug)]
pub struct PortsArgs {
    /// Path to the module interface description (TOML).
    pub interface: PathBuf,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let global = GlobalArgs { quiet: cli.quiet };

    let result = match cli.command {
        Command::Run(ref args) => run::run(args, &global),
        Command::Ports(ref args) => ports::run(args),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
