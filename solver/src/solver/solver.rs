use log::{debug, info, trace};
use rand::Rng;
use serde::{Deserialize, Serialize};
use epimd_core::{ParticleSnapshot, Result, SimulationParameters, State};
use crate::epidemic::EpidemicClock;
use crate::initializer::{initialize_particles, Thermostat};
use crate::macro_parameters::get_kinetic_energy;
use crate::solver::{update_force, ExponentialTransmission, Integrator, LennardJones,
                    NoTransmission, VelocityVerlet};

/// Result of one [Solver::step]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Number of the step, starting from 1
    pub step: u64,
    pub potential_energy: f64,
    /// Kinetic energy after the velocity update, before the thermostat
    pub kinetic_energy: f64,
    pub total_energy: f64,
    pub infected_count: usize,
    pub new_infections: usize,
    pub recoveries: usize,
}

/// Owns the state and the random stream, advances them one step at a time.
pub struct Solver<I, R> {
    state: State,
    integrator: I,
    thermostat: Thermostat,
    rng: R,
    primed: bool,
}

impl<R: Rng> Solver<VelocityVerlet, R> {
    /// Place `count` particles of `radius` and wrap them into a solver.
    pub fn initialize(count: usize, radius: f64, mut rng: R) -> Result<Self> {
        let state = initialize_particles(count, radius, &mut rng)?;
        Ok(Self::new(state, VelocityVerlet, Thermostat::VelocityRescaling, rng))
    }
}

impl<I: Integrator, R: Rng> Solver<I, R> {
    pub fn new(state: State, integrator: I, thermostat: Thermostat, rng: R) -> Self {
        // A state that has been stepped already carries valid forces
        let primed = state.step > 0;
        Self {
            state,
            integrator,
            thermostat,
            rng,
            primed,
        }
    }

    /// Evaluate forces on the current positions without spreading infection.
    /// Returns potential energy.
    pub fn prime(&mut self, params: &SimulationParameters) -> Result<f64> {
        params.validate()?;
        let potential = LennardJones::new(params.epsilon, params.equilibrium_distance);
        let output = update_force(&mut self.state, &potential, &NoTransmission, &mut self.rng)?;
        self.primed = true;
        Ok(output.potential_energy)
    }

    /// Advance the state by one time step.
    ///
    /// Parameters are validated before anything is touched, an invalid set
    /// leaves the state as it was.
    pub fn step(&mut self, params: &SimulationParameters) -> Result<StepReport> {
        params.validate()?;
        if !self.primed {
            self.prime(params)?;
        }
        let delta_time = params.delta_time;
        let potential = LennardJones::new(params.epsilon, params.equilibrium_distance);
        let transmission = ExponentialTransmission::new(params.infection_threshold);

        self.integrator.propagate_positions(&mut self.state, delta_time);
        let forces = update_force(&mut self.state, &potential, &transmission, &mut self.rng)?;
        self.integrator.propagate_velocities(&mut self.state, delta_time);

        let kinetic_energy = get_kinetic_energy(&self.state);
        self.thermostat.rescale(&mut self.state, kinetic_energy, params.thermostat_target);

        let clock = EpidemicClock::from_parameters(params);
        let epidemic = clock.advance(&mut self.state, &mut self.rng)?;

        self.state.step += 1;
        let report = StepReport {
            step: self.state.step,
            potential_energy: forces.potential_energy,
            kinetic_energy,
            total_energy: forces.potential_energy + kinetic_energy,
            infected_count: epidemic.infected_count,
            new_infections: forces.infected.len(),
            recoveries: epidemic.recovered.len(),
        };
        trace!("{report:?}");
        if report.new_infections > 0 || report.recoveries > 0 {
            debug!("Step {}: {} new infections, {} recoveries, {} infected",
                   report.step, report.new_infections, report.recoveries, report.infected_count);
        }
        Ok(report)
    }

    /// Step until nobody is infected or `max_steps` steps are done.
    /// `on_step` sees every report, the last one is returned.
    pub fn run<F>(&mut self, params: &SimulationParameters, max_steps: u64,
                  mut on_step: F) -> Result<Option<StepReport>>
    where
        F: FnMut(&StepReport),
    {
        let mut last = None;
        for _ in 0..max_steps {
            let report = self.step(params)?;
            on_step(&report);
            let finished = report.infected_count == 0;
            last = Some(report);
            if finished {
                info!("Nobody is infected after {} steps", self.state.step);
                break;
            }
        }
        Ok(last)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.state.snapshot()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn get_final_state(self) -> State {
        self.state
    }
}
