use std::path::PathBuf;
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// seed for the random stream, taken from entropy if not set
    #[arg(long, global = true)]
    pub seed: Option<u64>,
    /// write JSON files with indentation
    #[arg(long, global = true)]
    pub pretty_print: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ThermostatChoose {
    /// rescale velocities to the target kinetic energy every step
    VelocityRescaling,
    /// no thermostat
    Disabled,
}

/// Parameters of every step. Individual flags win over controls, controls win over the file.
#[derive(ClapArgs, Clone, Default)]
pub struct StepArgs {
    /// JSON file with simulation parameters
    #[arg(short = 'p', long)]
    pub params_file: Option<PathBuf>,
    /// social distancing, handwashing frequency and economic activity
    #[arg(long, num_args = 3, value_delimiter = ' ',
          value_names = ["SOCIAL_DISTANCING", "HANDWASHING", "ECONOMIC_ACTIVITY"])]
    pub controls: Option<Vec<f64>>,
    /// Lennard-Jones energy scale
    #[arg(long)]
    pub epsilon: Option<f64>,
    /// Lennard-Jones equilibrium distance
    #[arg(long)]
    pub equilibrium_distance: Option<f64>,
    /// distance scale of the infection probability
    #[arg(long)]
    pub infection_threshold: Option<f64>,
    /// time step
    #[arg(short = 'd', long)]
    pub delta_time: Option<f64>,
    /// kinetic energy the thermostat holds
    #[arg(long)]
    pub thermostat_target: Option<f64>,
    /// probability per step that an infected particle recovers
    #[arg(long)]
    pub recovery_probability: Option<f64>,
    /// probability per step that an infected particle dies (has no effect)
    #[arg(long)]
    pub fatality_probability: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// place particles and save the initial state
    Initialize {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
        /// number of particles
        #[arg(short = 'n', long, default_value_t = 600)]
        count: usize,
        /// radius of every particle
        #[arg(short = 'r', long, default_value_t = 0.01)]
        radius: f64,
    },
    /// run the simulation until nobody is infected
    Run {
        /// start from this state instead of placing new particles
        #[arg(short = 'i', long)]
        in_file: Option<PathBuf>,
        /// number of particles
        #[arg(short = 'n', long, default_value_t = 600)]
        count: usize,
        /// radius of every particle
        #[arg(short = 'r', long, default_value_t = 0.01)]
        radius: f64,
        #[command(flatten)]
        step: StepArgs,
        /// maximum number of steps
        #[arg(short = 's', long, default_value_t = 100_000)]
        max_steps: u64,
        /// check for remaining infected every this many steps
        #[arg(long, default_value_t = 100)]
        check_interval: u64,
        /// thermostat
        #[arg(short = 't', long, value_enum, default_value_t = ThermostatChoose::VelocityRescaling)]
        thermostat: ThermostatChoose,
        /// CSV file for per-step energies and counts
        #[arg(short = 'e', long)]
        energies_file: Option<PathBuf>,
        /// file for the final state
        #[arg(short = 'o', long)]
        out_file: Option<PathBuf>,
        /// file for the final snapshot (id, position, radius, status)
        #[arg(long)]
        snapshot_file: Option<PathBuf>,
        /// don't print per-step energies
        #[arg(short = 'q', long)]
        quiet: bool,
    },
    /// write default simulation parameters to a file
    GenerateDefaultParams {
        /// file for output
        #[arg(short = 'o', long)]
        out_file: PathBuf,
    },
}
