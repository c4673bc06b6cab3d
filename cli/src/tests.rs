use std::path::PathBuf;
use nalgebra::Vector2;
use tempdir::TempDir;
use epimd_core::{HealthStatus, Particle, ParticleSnapshot, SimulationError, SimulationParameters, State};
use epimd_solver::solver::StepReport;
use crate::args::{StepArgs, ThermostatChoose};
use crate::commands::{generate_default_params, initialize, resolve_parameters, run, RunOptions};
use crate::data_file::{load_from_file, load_state_from_file, save_to_file};
use crate::error::CliError;

fn run_options(seed: u64) -> RunOptions {
    RunOptions {
        in_file: None,
        count: 30,
        radius: 0.01,
        seed: Some(seed),
        max_steps: 20,
        check_interval: 100,
        thermostat: ThermostatChoose::VelocityRescaling,
        energies_file: None,
        out_file: None,
        snapshot_file: None,
        quiet: true,
        pretty_print: false,
    }
}

fn temp_path(temp_dir: &TempDir, name: &str) -> PathBuf {
    temp_dir.path().join(name)
}

#[test]
fn initialization() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_path(&temp_dir, "state.json");
    initialize(&path, 50, 0.01, Some(7), false).expect("Can't initialize");
    let state = load_state_from_file(&path).expect("Can't load state");
    assert_eq!(state.len(), 50);
    assert_eq!(state.step, 0);
    assert_eq!(state.infected_count(), 1);
    for particle in state.iter() {
        assert!((0.0..1.0).contains(&particle.position.x));
        assert!((0.0..1.0).contains(&particle.position.y));
    }
}

#[test]
fn initialization_over_capacity() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_path(&temp_dir, "state.json");
    let result = initialize(&path, 1000, 0.1, Some(7), false);
    assert!(matches!(result,
                     Err(CliError::Simulation(SimulationError::CapacityExceeded { .. }))));
    assert!(!path.exists());
}

#[test]
fn broken_state_is_rejected() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_path(&temp_dir, "state.json");
    let particle = Particle::new(4, 0.01, 1.0, Vector2::new(0.5, 0.5), Vector2::zeros())
        .expect("Can't create particle");
    let state = State::new(vec![particle.clone(), particle]);
    save_to_file(&state, &path, true).expect("Can't save state");
    assert!(matches!(load_state_from_file(&path),
                     Err(CliError::Simulation(SimulationError::InvalidParameter(_)))));
}

#[test]
fn run_stops_when_everybody_recovered() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let energies = temp_path(&temp_dir, "energies.csv");
    let options = RunOptions {
        check_interval: 1,
        energies_file: Some(energies.clone()),
        ..run_options(3)
    };
    let step = StepArgs {
        recovery_probability: Some(1.0),
        infection_threshold: Some(1e-6),
        ..Default::default()
    };
    let summary = run(&options, &step).expect("Can't run");
    assert_eq!(summary.steps, 1);
    assert_eq!(summary.census.infected, 0);
    assert_eq!(summary.census.recovered, 1);
    assert_eq!(summary.census.total(), 30);

    let mut reader = csv::Reader::from_path(&energies).expect("Can't open energies");
    let reports: Vec<StepReport> = reader.deserialize::<StepReport>()
        .collect::<Result<_, _>>()
        .expect("Can't read energies");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].step, 1);
    assert_eq!(reports[0].recoveries, 1);
    assert_eq!(reports[0].infected_count, 0);
    assert_eq!(Some(reports[0].clone()), summary.last_report);
}

#[test]
fn run_is_reproducible() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let first = temp_path(&temp_dir, "first.json");
    let second = temp_path(&temp_dir, "second.json");
    let step = StepArgs::default();
    run(&RunOptions { out_file: Some(first.clone()), ..run_options(11) }, &step)
        .expect("Can't run");
    run(&RunOptions { out_file: Some(second.clone()), ..run_options(11) }, &step)
        .expect("Can't run");
    let first = std::fs::read_to_string(first).expect("Can't read state");
    let second = std::fs::read_to_string(second).expect("Can't read state");
    assert_eq!(first, second);
}

#[test]
fn run_from_file() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let initial = temp_path(&temp_dir, "initial.json");
    let snapshot_file = temp_path(&temp_dir, "snapshot.json");
    let out_file = temp_path(&temp_dir, "final.json");
    initialize(&initial, 40, 0.01, Some(5), false).expect("Can't initialize");
    let options = RunOptions {
        in_file: Some(initial),
        max_steps: 5,
        thermostat: ThermostatChoose::Disabled,
        snapshot_file: Some(snapshot_file.clone()),
        out_file: Some(out_file.clone()),
        ..run_options(5)
    };
    let step = StepArgs {
        recovery_probability: Some(0.0),
        ..Default::default()
    };
    let summary = run(&options, &step).expect("Can't run");
    assert_eq!(summary.steps, 5);
    let state = load_state_from_file(&out_file).expect("Can't load state");
    assert_eq!(state.step, 5);
    assert_eq!(state.len(), 40);
    assert_eq!(state.count_status(HealthStatus::Recovered), 0);
    let snapshot: Vec<ParticleSnapshot> = load_from_file(&snapshot_file)
        .expect("Can't load snapshot");
    assert_eq!(snapshot.len(), 40);
    assert_eq!(snapshot.iter().filter(|p| p.status == HealthStatus::Infected).count(),
               summary.census.infected);
}

#[test]
fn parameters_precedence() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_path(&temp_dir, "params.json");
    std::fs::write(&path, r#"{"epsilon": 0.5, "delta_time": 0.001, "infection_threshold": 0.05}"#)
        .expect("Can't write parameters");
    let step = StepArgs {
        params_file: Some(path.clone()),
        ..Default::default()
    };
    let params = resolve_parameters(&step).expect("Can't resolve parameters");
    assert_eq!(params.epsilon, 0.5);
    assert_eq!(params.delta_time, 0.001);
    assert_eq!(params.infection_threshold, 0.05);

    let step = StepArgs {
        params_file: Some(path),
        controls: Some(vec![100.0, 10.0, 5.0]),
        delta_time: Some(0.002),
        ..Default::default()
    };
    let params = resolve_parameters(&step).expect("Can't resolve parameters");
    assert_eq!(params.epsilon, 0.5);
    assert_eq!(params.infection_threshold, 0.1);
    assert_eq!(params.thermostat_target, 5.0);
    assert!((params.equilibrium_distance - 0.35).abs() < 1e-12);
    assert_eq!(params.delta_time, 0.002);
}

#[test]
fn invalid_parameters() {
    let step = StepArgs {
        delta_time: Some(-1.0),
        ..Default::default()
    };
    assert!(matches!(resolve_parameters(&step),
                     Err(CliError::Simulation(SimulationError::InvalidParameter(_)))));
    let step = StepArgs {
        controls: Some(vec![1.0]),
        ..Default::default()
    };
    assert!(resolve_parameters(&step).is_err());
    let step = StepArgs {
        params_file: Some(PathBuf::from("/nonexistent/params.json")),
        ..Default::default()
    };
    assert!(matches!(resolve_parameters(&step), Err(CliError::Io(_))));
}

#[test]
fn default_parameters_file() {
    let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
    let path = temp_path(&temp_dir, "params.json");
    generate_default_params(&path).expect("Can't write parameters");
    let params: SimulationParameters = load_from_file(&path).expect("Can't load parameters");
    assert_eq!(params, SimulationParameters::default());
    let step = StepArgs {
        params_file: Some(path),
        ..Default::default()
    };
    assert_eq!(resolve_parameters(&step).expect("Can't resolve parameters"),
               SimulationParameters::default());
}
