use clap::Parser;
use log::{error, info};
use crate::args::*;
use crate::commands::{generate_default_params, initialize, run, RunOptions};
use crate::error::Result;

mod args;
mod commands;
mod data_file;
mod error;

#[cfg(test)]
mod tests;

fn execute(args: &Args) -> Result<()> {
    match &args.command {
        Commands::Initialize {
            out_file,
            count,
            radius,
        } => {
            initialize(out_file, *count, *radius, args.seed, args.pretty_print)?;
        }
        Commands::Run {
            in_file,
            count,
            radius,
            step,
            max_steps,
            check_interval,
            thermostat,
            energies_file,
            out_file,
            snapshot_file,
            quiet,
        } => {
            let options = RunOptions {
                in_file: in_file.clone(),
                count: *count,
                radius: *radius,
                seed: args.seed,
                max_steps: *max_steps,
                check_interval: *check_interval,
                thermostat: *thermostat,
                energies_file: energies_file.clone(),
                out_file: out_file.clone(),
                snapshot_file: snapshot_file.clone(),
                quiet: *quiet,
                pretty_print: args.pretty_print,
            };
            let summary = run(&options, step)?;
            info!("Done after {} steps: {} healthy, {} infected, {} recovered",
                  summary.steps, summary.census.healthy,
                  summary.census.infected, summary.census.recovered);
        }
        Commands::GenerateDefaultParams { out_file } => {
            generate_default_params(out_file)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = execute(&args) {
        error!("{err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
