use epimd_core::{Particle, State};

/// Sum of `m v^2 / 2` over all particles.
///
/// Summed sequentially so the thermostat sees the same value on every run.
pub fn get_kinetic_energy(state: &State) -> f64 {
    state.particles.iter().map(Particle::kinetic_energy).sum()
}
