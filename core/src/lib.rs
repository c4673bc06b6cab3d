mod error;
mod health;
mod parameters;
mod particle;
mod snapshot;
extern crate nalgebra as na;
extern crate serde;

pub use error::{Result, SimulationError};
pub use health::HealthStatus;
pub use parameters::{ControlSettings, SimulationParameters};
pub use particle::{Particle, ParticleIdGenerator, State, MAX_VELOCITY};
pub use snapshot::ParticleSnapshot;
