use rayon::prelude::*;
use epimd_core::{Particle, State, MAX_VELOCITY};

/// Two-phase time integrator. The force kernel runs between the phases.
pub trait Integrator {
    /// Move particles with current velocity and force.
    fn propagate_positions(&self, state: &mut State, delta_time: f64);
    /// Update velocities from the force before and after [Integrator::propagate_positions].
    fn propagate_velocities(&self, state: &mut State, delta_time: f64);
}

/// <https://en.wikipedia.org/wiki/Verlet_integration#Velocity_Verlet>
#[derive(Clone, Copy, Debug, Default)]
pub struct VelocityVerlet;

/// Wrap coordinate into [0, 1).
fn wrap(x: f64) -> f64 {
    let wrapped = x.rem_euclid(1.0);
    // rem_euclid rounds tiny negative values up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Negate velocity components that point out of the unit square
/// while the particle is less than one radius away from that wall.
pub fn reflect_from_walls(particle: &mut Particle) {
    let radius = particle.radius;
    for axis in 0..2 {
        let x = particle.position[axis];
        let v = particle.velocity[axis];
        if (x < radius && v < 0.0) || (x > 1.0 - radius && v > 0.0) {
            particle.velocity[axis] = -v;
        }
    }
}

impl Integrator for VelocityVerlet {
    fn propagate_positions(&self, state: &mut State, delta_time: f64) {
        state.particles.par_iter_mut().for_each(|particle| {
            let acceleration = particle.force / particle.mass;
            let position = particle.position + particle.velocity * delta_time +
                acceleration * delta_time * delta_time / 2.0;
            particle.position = position.map(wrap);
        });
    }

    fn propagate_velocities(&self, state: &mut State, delta_time: f64) {
        state.particles.par_iter_mut().for_each(|particle| {
            let acceleration = (particle.previous_force + particle.force) / (2.0 * particle.mass);
            particle.velocity += acceleration * delta_time;
            particle.velocity = particle.velocity.map(|v| v.clamp(-MAX_VELOCITY, MAX_VELOCITY));
            reflect_from_walls(particle);
        });
    }
}
