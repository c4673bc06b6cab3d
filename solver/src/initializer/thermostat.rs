use log::warn;
use rayon::prelude::*;
use epimd_core::{Result, SimulationError, State, MAX_VELOCITY};

/// Thermostat enum object
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Thermostat {
    /// Scale every velocity by the same factor so the kinetic energy hits the target
    #[default]
    VelocityRescaling,
    /// Leave velocities alone
    Disabled,
}

/// Calculate velocity scaling coefficient `sqrt(target / current)`.
///
/// A system without kinetic energy can't be scaled to anything and is reported
/// as [SimulationError::DegenerateState].
pub fn velocity_scale_factor(current_kinetic_energy: f64, target_kinetic_energy: f64) -> Result<f64> {
    if current_kinetic_energy > 0.0 && current_kinetic_energy.is_finite() {
        Ok((target_kinetic_energy / current_kinetic_energy).sqrt())
    } else {
        Err(SimulationError::DegenerateState(format!(
            "can't rescale velocities of a system with kinetic energy {current_kinetic_energy}"
        )))
    }
}

impl Thermostat {
    /// Scale velocity. Returns the factor that was applied, 1.0 if nothing was done.
    ///
    /// Scaled components are clamped to [-MAX_VELOCITY, MAX_VELOCITY] again, so the
    /// kinetic energy may end up below the target.
    pub fn rescale(&self, state: &mut State,
                   current_kinetic_energy: f64, target_kinetic_energy: f64) -> f64 {
        match self {
            Thermostat::VelocityRescaling => {
                let lambda = match velocity_scale_factor(current_kinetic_energy, target_kinetic_energy) {
                    Ok(lambda) => lambda,
                    Err(err) => {
                        warn!("Thermostat skipped: {err}");
                        return 1.0;
                    }
                };
                state.particles.par_iter_mut().for_each(|particle| {
                    particle.velocity = (particle.velocity * lambda)
                        .map(|v| v.clamp(-MAX_VELOCITY, MAX_VELOCITY));
                });
                lambda
            }
            Thermostat::Disabled => 1.0,
        }
    }
}
