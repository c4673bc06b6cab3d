use na::Vector2;
use serde::{Deserialize, Serialize};
use crate::{HealthStatus, Particle};

/// What a renderer is allowed to see of a particle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSnapshot {
    pub id: u32,
    pub position: Vector2<f64>,
    pub radius: f64,
    pub status: HealthStatus,
}

impl From<&Particle> for ParticleSnapshot {
    fn from(particle: &Particle) -> Self {
        Self {
            id: particle.id,
            position: particle.position,
            radius: particle.radius,
            status: particle.status(),
        }
    }
}
