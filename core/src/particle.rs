use std::collections::HashSet;
use na::Vector2;
use serde::{Deserialize, Serialize};
use crate::{HealthStatus, ParticleSnapshot, Result, SimulationError};

/// Maximum absolute value of every velocity component
pub const MAX_VELOCITY: f64 = 100.0;

/// Structure that keeps all data for particle
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// ID of particle. Unique inside one [State]
    pub id: u32,
    /// position of particle in the unit square
    pub position: Vector2<f64>,
    /// velocity of particle
    pub velocity: Vector2<f64>,
    /// The sum of the forces acting on the particle
    pub force: Vector2<f64>,
    /// The force from the previous evaluation, needed by velocity Verlet
    pub previous_force: Vector2<f64>,
    /// Mass of particle
    pub mass: f64,
    /// Radius of particle
    pub radius: f64,
    status: HealthStatus,
}

/// Structure that keeps current state
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct State {
    /// Particles that exists right now
    pub particles: Vec<Particle>,
    /// Number of steps done on this state
    pub step: u64,
}

/// Hands out particle IDs for one run. IDs are never reused.
#[derive(Debug, Default)]
pub struct ParticleIdGenerator {
    next: u32,
}

impl ParticleIdGenerator {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter(format!(
            "{name} must be positive and finite, got {value}"
        )))
    }
}

impl Particle {
    /// Create new healthy particle with zero force.
    ///
    /// # Arguments
    ///
    /// * `id` - ID of particle, see [ParticleIdGenerator].
    /// * `radius` - physical radius, must be positive
    /// * `mass` - mass, must be positive
    /// * `position` - coordinate of particle in the unit square
    /// * `velocity` - velocity of particle
    ///
    /// # Examples
    ///
    /// ```
    /// # use nalgebra::Vector2;
    /// # use epimd_core::{HealthStatus, Particle};
    /// let particle = Particle::new(0, -0.1, 1.0, Vector2::new(0.5, 0.5), Vector2::zeros());
    /// assert!(particle.is_err());
    /// let particle = Particle::new(0, 0.01, 1.0, Vector2::new(0.5, 0.5), Vector2::new(0.1, 0.0))
    ///     .unwrap();
    /// assert_eq!(particle.status(), HealthStatus::Healthy);
    /// assert_eq!(particle.velocity.x, 0.1);
    /// ```
    pub fn new(id: u32, radius: f64, mass: f64,
               position: Vector2<f64>, velocity: Vector2<f64>) -> Result<Self> {
        check_positive("radius", radius)?;
        check_positive("mass", mass)?;
        Ok(Particle {
            id,
            position,
            velocity,
            force: Vector2::zeros(),
            previous_force: Vector2::zeros(),
            mass,
            radius,
            status: HealthStatus::Healthy,
        })
    }

    /// Check radius and mass, e.g. of a particle read from a file.
    pub fn validate(&self) -> Result<()> {
        check_positive("radius", self.radius)?;
        check_positive("mass", self.mass)
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    /// Move particle along the health state machine.
    /// Same-status and backward requests fail with [SimulationError::IllegalTransition].
    pub fn set_status(&mut self, status: HealthStatus) -> Result<()> {
        self.status = self.status.transition(status)?;
        Ok(())
    }

    pub fn is_infected(&self) -> bool {
        self.status == HealthStatus::Infected
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.mass * self.velocity.dot(&self.velocity) / 2.0
    }
}

impl State {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles, step: 0 }
    }

    /// Every particle is valid and no ID is used twice.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::with_capacity(self.particles.len());
        for particle in &self.particles {
            particle.validate()?;
            if !ids.insert(particle.id) {
                return Err(SimulationError::InvalidParameter(format!(
                    "particle ID {} is used more than once", particle.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Number of particles with given health status
    pub fn count_status(&self, status: HealthStatus) -> usize {
        self.particles.iter().filter(|particle| particle.status() == status).count()
    }

    pub fn infected_count(&self) -> usize {
        self.count_status(HealthStatus::Infected)
    }

    /// The run is over when nobody is infected any more.
    pub fn is_finished(&self) -> bool {
        !self.particles.iter().any(Particle::is_infected)
    }

    /// Read-only view of every particle for renderers.
    pub fn snapshot(&self) -> Vec<ParticleSnapshot> {
        self.particles.iter().map(ParticleSnapshot::from).collect()
    }
}
