use serde::{Deserialize, Serialize};
use epimd_core::{HealthStatus, State};

/// Number of particles in every health state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub healthy: usize,
    pub infected: usize,
    pub recovered: usize,
}

impl Census {
    pub fn total(&self) -> usize {
        self.healthy + self.infected + self.recovered
    }
}

pub fn get_census(state: &State) -> Census {
    let mut census = Census::default();
    for particle in &state.particles {
        match particle.status() {
            HealthStatus::Healthy => census.healthy += 1,
            HealthStatus::Infected => census.infected += 1,
            HealthStatus::Recovered => census.recovered += 1,
        }
    }
    census
}
