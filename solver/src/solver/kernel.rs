use log::{debug, warn};
use na::Vector2;
use rand::Rng;
use epimd_core::{HealthStatus, Particle, Result, SimulationError, State};
use crate::solver::{Potential, Transmission};

/// Everything one pass of [update_force] produced besides the forces themselves.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForceOutput {
    /// Total potential energy of all pairs
    pub potential_energy: f64,
    /// Indices of particles that became infected, in the order it happened
    pub infected: Vec<usize>,
    /// Pairs left out because their separation was degenerate
    pub skipped_pairs: usize,
}

/// Separation vector `r_i - r_j` and its length.
///
/// Coincident particles make the potential singular and are reported as
/// [SimulationError::DegenerateState].
pub fn pair_separation(p1: &Particle, p2: &Particle) -> Result<(Vector2<f64>, f64)> {
    let r = p1.position - p2.position;
    let distance = r.magnitude();
    if distance > 0.0 && distance.is_finite() {
        Ok((r, distance))
    } else {
        Err(SimulationError::DegenerateState(format!(
            "particles {} and {} are {} apart", p1.id, p2.id, distance
        )))
    }
}

/// Pick the healthy member of a pair with exactly one infected member.
fn exposed<'a>(p1: &'a mut Particle, p2: &'a mut Particle) -> Option<&'a mut Particle> {
    match (p1.status(), p2.status()) {
        (HealthStatus::Infected, HealthStatus::Healthy) => Some(p2),
        (HealthStatus::Healthy, HealthStatus::Infected) => Some(p1),
        _ => None,
    }
}

/// Recalculate forces for every particle and spread the infection.
///
/// Old forces are moved into `previous_force` first. Then every unordered pair
/// is visited once: its distance feeds the pair potential and, for an
/// infected/healthy pair, one draw against `transmission`. Infections are
/// applied immediately, so a particle infected earlier in the pass can infect
/// later pairs. Pairs with a degenerate separation are skipped.
pub fn update_force<P, T, R>(state: &mut State,
                             potential: &P,
                             transmission: &T,
                             rng: &mut R) -> Result<ForceOutput>
where
    P: Potential + ?Sized,
    T: Transmission + ?Sized,
    R: Rng + ?Sized,
{
    state.particles.iter_mut().for_each(|particle| {
        particle.previous_force = particle.force;
        particle.force = Vector2::zeros();
    });

    let mut output = ForceOutput::default();
    let number_particles = state.particles.len();
    for i in 0..number_particles {
        let (head, tail) = state.particles.split_at_mut(i + 1);
        let p1 = &mut head[i];
        for (offset, p2) in tail.iter_mut().enumerate() {
            let j = i + 1 + offset;
            let (r, distance) = match pair_separation(p1, p2) {
                Ok(separation) => separation,
                Err(err) => {
                    warn!("Skipping pair ({i}, {j}): {err}");
                    output.skipped_pairs += 1;
                    continue;
                }
            };
            let (energy, force) = potential.get_potential_and_force(distance);
            output.potential_energy += energy;
            let force_vec = r * force;
            p1.force += force_vec;
            p2.force -= force_vec;

            let Some(probability) = transmission.infection_probability(distance) else {
                continue;
            };
            let infected_index = if p1.status() == HealthStatus::Healthy { i } else { j };
            if let Some(target) = exposed(p1, p2) {
                if rng.gen::<f64>() < probability {
                    target.set_status(HealthStatus::Infected)?;
                    debug!("Particle {} is {} at distance {distance}", target.id, target.status());
                    output.infected.push(infected_index);
                }
            }
        }
    }
    Ok(output)
}
