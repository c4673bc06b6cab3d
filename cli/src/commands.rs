use std::path::{Path, PathBuf};
use indicatif::ProgressBar;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use epimd_core::{ControlSettings, SimulationError, SimulationParameters, State};
use epimd_solver::initializer::{initialize_particles, Thermostat};
use epimd_solver::macro_parameters::{get_census, Census};
use epimd_solver::solver::{Solver, StepReport, VelocityVerlet};
use crate::args::{StepArgs, ThermostatChoose};
use crate::data_file::{load_from_file, load_state_from_file, save_to_file};
use crate::error::Result;

/// How a run ended
#[derive(Debug)]
pub struct RunSummary {
    pub steps: u64,
    pub census: Census,
    pub last_report: Option<StepReport>,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Parameters file (or defaults), then controls, then individual flags.
pub fn resolve_parameters(step: &StepArgs) -> Result<SimulationParameters> {
    let mut params = match &step.params_file {
        Some(path) => load_from_file(path)?,
        None => SimulationParameters::default(),
    };
    if let Some(controls) = &step.controls {
        let [social_distancing, handwashing_frequency, economic_activity] = controls[..] else {
            return Err(SimulationError::InvalidParameter(format!(
                "expected 3 control values, got {}", controls.len()
            )).into());
        };
        params = params.with_controls(&ControlSettings {
            social_distancing,
            handwashing_frequency,
            economic_activity,
        })?;
    }
    let overrides = [
        (&mut params.epsilon, step.epsilon),
        (&mut params.equilibrium_distance, step.equilibrium_distance),
        (&mut params.infection_threshold, step.infection_threshold),
        (&mut params.delta_time, step.delta_time),
        (&mut params.thermostat_target, step.thermostat_target),
        (&mut params.recovery_probability, step.recovery_probability),
        (&mut params.fatality_probability, step.fatality_probability),
    ];
    for (value, flag) in overrides {
        if let Some(flag) = flag {
            *value = flag;
        }
    }
    params.validate()?;
    Ok(params)
}

pub fn initialize(out_file: &Path, count: usize, radius: f64,
                  seed: Option<u64>, pretty_print: bool) -> Result<()> {
    let mut rng = make_rng(seed);
    let state = initialize_particles(count, radius, &mut rng)?;
    save_to_file(&state, out_file, pretty_print)?;
    info!("Initial state saved to {}", out_file.to_string_lossy());
    Ok(())
}

pub fn generate_default_params(out_file: &Path) -> Result<()> {
    save_to_file(&SimulationParameters::default(), out_file, true)
}

/// Everything [run] needs besides the parameters.
pub struct RunOptions {
    pub in_file: Option<PathBuf>,
    pub count: usize,
    pub radius: f64,
    pub seed: Option<u64>,
    pub max_steps: u64,
    pub check_interval: u64,
    pub thermostat: ThermostatChoose,
    pub energies_file: Option<PathBuf>,
    pub out_file: Option<PathBuf>,
    pub snapshot_file: Option<PathBuf>,
    pub quiet: bool,
    pub pretty_print: bool,
}

pub fn run(options: &RunOptions, step: &StepArgs) -> Result<RunSummary> {
    let params = resolve_parameters(step)?;
    let mut rng = make_rng(options.seed);
    let state: State = match &options.in_file {
        Some(path) => load_state_from_file(path)?,
        None => initialize_particles(options.count, options.radius, &mut rng)?,
    };
    let thermostat = match options.thermostat {
        ThermostatChoose::VelocityRescaling => Thermostat::VelocityRescaling,
        ThermostatChoose::Disabled => Thermostat::Disabled,
    };
    let check_interval = options.check_interval.max(1);
    info!("Running {} particles for at most {} steps", state.len(), options.max_steps);

    let mut energies = match &options.energies_file {
        Some(path) => Some(csv::Writer::from_path(path)?),
        None => None,
    };
    let mut solver = Solver::new(state, VelocityVerlet, thermostat, rng);
    let pb = ProgressBar::new(options.max_steps);
    let mut last_report = None;
    let mut steps = 0;
    while steps < options.max_steps {
        let report = solver.step(&params)?;
        steps += 1;
        pb.inc(1);
        if !options.quiet {
            pb.println(format!("{}: {} {} {} {}", report.step, report.total_energy,
                               report.kinetic_energy, report.potential_energy,
                               params.equilibrium_distance));
        }
        if let Some(writer) = energies.as_mut() {
            writer.serialize(&report)?;
        }
        let check = steps % check_interval == 0;
        last_report = Some(report);
        if check {
            let sick = solver.state().infected_count();
            info!("{sick} sick individuals after {} steps", solver.state().step);
            if sick == 0 {
                break;
            }
        }
    }
    if let Some(mut writer) = energies {
        writer.flush()?;
    }
    let census = get_census(solver.state());
    pb.finish_with_message(format!("{} healthy, {} infected, {} recovered",
                                   census.healthy, census.infected, census.recovered));

    if let Some(path) = &options.snapshot_file {
        save_to_file(&solver.snapshot(), path, options.pretty_print)?;
    }
    if let Some(path) = &options.out_file {
        save_to_file(solver.state(), path, options.pretty_print)?;
    }
    Ok(RunSummary {
        steps,
        census,
        last_report,
    })
}
