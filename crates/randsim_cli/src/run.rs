//! `randsim run` — drive a compiled model through a randomized simulation.

use randsim_config::{resolve_reset, SimConfig};
use randsim_harness::run_random_sim;

use crate::model::SubprocessModel;
use crate::{GlobalArgs, RunArgs};

/// Runs the `randsim run` command.
///
/// Loads and validates the interface, assembles the simulation config from
/// the CLI flags, spawns the model process, and runs every cycle. Progress
/// lines go to stderr unless `--quiet`; cycle data goes to the console
/// (with `-v`) and the output file (with `--output`).
pub fn run(args: &RunArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let interface = randsim_config::load_interface(&args.interface)?;

    let reset = resolve_reset(args.reset.clone(), args.reset_n.clone())?;
    let config = SimConfig {
        cycles: args.cycles,
        clock_port: args.clock.clone(),
        reset,
        verbose: args.verbose,
        output_path: args.output.clone(),
        seed: args.seed,
    };
    config.validate()?;

    if !global.quiet {
        eprintln!(
            "   Simulating {} for {} cycles",
            interface.name, config.cycles
        );
    }

    let mut model = SubprocessModel::spawn(&args.model)?;
    let summary = run_random_sim(&mut model, &interface, &config)?;

    if !global.quiet {
        eprintln!("   Finished after {} cycles", summary.cycles_run);
        if let Some(path) = &config.output_path {
            eprintln!("   Results: {}", path.display());
        }
    }

    Ok(0)
}
