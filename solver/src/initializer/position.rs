use log::info;
use na::Vector2;
use rand::seq::SliceRandom;
use rand::Rng;
use epimd_core::{HealthStatus, Particle, ParticleIdGenerator, Result, SimulationError, State};
use crate::initializer::{initial_velocity_distribution, sample_velocity};

/// Upper bound on the number of grid sites walked during placement
pub const MAX_GRID_SITES: u64 = 1_000_000;

/// Square grid the particles are placed on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacementGrid {
    /// Sites per axis
    pub sites_per_axis: usize,
    /// Distance from the walls to the first row and column
    pub margin: f64,
    /// Distance between neighbouring sites
    pub spacing: f64,
}

impl PlacementGrid {
    /// Grid for particles of `radius`: sites are `3 * radius` apart
    /// (50% more than touching spheres) and start `1.2 * radius` from the walls.
    pub fn new(radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "radius must be positive, got {radius}"
            )));
        }
        let spacing = 2.0 * radius * 1.5;
        Ok(Self {
            // float to int casts saturate
            sites_per_axis: (1.0 / spacing).floor() as usize,
            margin: 1.2 * radius,
            spacing,
        })
    }

    pub fn capacity(&self) -> usize {
        self.sites_per_axis.saturating_mul(self.sites_per_axis)
    }

    /// Position of site `index` in row-major order
    pub fn site_position(&self, index: usize) -> Vector2<f64> {
        let row = index / self.sites_per_axis;
        let column = index % self.sites_per_axis;
        Vector2::new(self.margin + self.spacing * row as f64,
                     self.margin + self.spacing * column as f64)
    }
}

/// Create `count` non-overlapping particles of `radius` and infect one of them.
///
/// Particles occupy a random subset of the [PlacementGrid] sites, get uniform
/// random velocities in [-0.3, 0.3] per axis and mass 1. Site order is
/// row-major, IDs go 0, 1, 2, ... in that order, and the particle with index
/// `count / 2` starts infected.
///
/// # Errors
///
/// * [SimulationError::InvalidParameter] if `count` is zero or `radius` isn't positive
/// * [SimulationError::CapacityExceeded] if the grid has fewer than `count` sites
/// * [SimulationError::TooExpensive] if the grid has more than [MAX_GRID_SITES] sites
pub fn initialize_particles<R: Rng + ?Sized>(count: usize, radius: f64, rng: &mut R) -> Result<State> {
    if count == 0 {
        return Err(SimulationError::InvalidParameter(
            String::from("particle count must be positive")));
    }
    let grid = PlacementGrid::new(radius)?;
    let capacity = grid.capacity();
    if capacity < count {
        return Err(SimulationError::CapacityExceeded {
            requested: count,
            capacity,
        });
    }
    if capacity as u64 > MAX_GRID_SITES {
        return Err(SimulationError::TooExpensive {
            sites: capacity as u64,
            limit: MAX_GRID_SITES,
        });
    }

    let mut occupied = vec![false; capacity];
    occupied[..count].fill(true);
    occupied.shuffle(rng);

    let velocity_distribution = initial_velocity_distribution();
    let mut ids = ParticleIdGenerator::default();
    let mut particles = Vec::with_capacity(count);
    for (site, &is_occupied) in occupied.iter().enumerate() {
        if !is_occupied {
            continue;
        }
        let velocity = sample_velocity(&velocity_distribution, rng);
        let particle = Particle::new(ids.next_id(), radius, 1.0,
                                     grid.site_position(site), velocity)?;
        particles.push(particle);
    }
    particles[count / 2].set_status(HealthStatus::Infected)?;
    info!("Placed {count} particles on a {0}x{0} grid", grid.sites_per_axis);
    Ok(State::new(particles))
}
