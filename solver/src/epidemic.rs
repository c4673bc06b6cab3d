use log::debug;
use rand::Rng;
use epimd_core::{HealthStatus, Result, SimulationParameters, State};

/// Advances health states that don't depend on contacts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpidemicClock {
    /// Probability per step that an infected particle recovers
    pub recovery_probability: f64,
    /// Kept for parameter parity, no particle ever dies
    pub fatality_probability: f64,
}

/// Outcome of [EpidemicClock::advance]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpidemicReport {
    /// Indices of particles that recovered during this tick
    pub recovered: Vec<usize>,
    /// Infected particles left after the tick
    pub infected_count: usize,
}

impl EpidemicClock {
    pub fn new(recovery_probability: f64, fatality_probability: f64) -> Self {
        Self {
            recovery_probability,
            fatality_probability,
        }
    }

    pub fn from_parameters(params: &SimulationParameters) -> Self {
        Self::new(params.recovery_probability, params.fatality_probability)
    }

    /// Every infected particle draws once and recovers if the draw is below
    /// `recovery_probability`. Particles in other states draw nothing.
    pub fn advance<R: Rng + ?Sized>(&self, state: &mut State, rng: &mut R) -> Result<EpidemicReport> {
        let mut report = EpidemicReport::default();
        for (index, particle) in state.particles.iter_mut().enumerate() {
            if !particle.is_infected() {
                continue;
            }
            if rng.gen::<f64>() < self.recovery_probability {
                particle.set_status(HealthStatus::Recovered)?;
                debug!("Particle {} is {}", particle.id, particle.status());
                report.recovered.push(index);
            } else {
                report.infected_count += 1;
            }
        }
        Ok(report)
    }
}
