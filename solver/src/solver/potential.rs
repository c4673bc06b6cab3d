use serde::{Deserialize, Serialize};

/// Pair potential evaluated by the force kernel.
pub trait Potential {
    /// Returns potential energy of a pair at distance `r` and `-dU/dr / r`.
    ///
    /// The second value multiplied by `r_i - r_j` is the force acting on `i`.
    fn get_potential_and_force(&self, r: f64) -> (f64, f64);
}

/// 12-6 potential written around the equilibrium distance:
/// `U(r) = eps * ((r_m / r)^12 - 2 * (r_m / r)^6)`, minimum `-eps` at `r = r_m`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LennardJones {
    pub eps: f64,
    pub r_m: f64,
}

impl LennardJones {
    pub fn new(eps: f64, r_m: f64) -> Self {
        Self { eps, r_m }
    }
}

impl Potential for LennardJones {
    fn get_potential_and_force(&self, r: f64) -> (f64, f64) {
        let r_m_r = self.r_m / r;
        let r_m_r_6 = r_m_r.powi(6);
        let r_m_r_12 = r_m_r_6 * r_m_r_6;
        let r_squared = r * r;
        (
            self.eps * (r_m_r_12 - 2.0f64 * r_m_r_6),
            12.0f64 * self.eps * (r_m_r_12 - r_m_r_6) / r_squared,
        )
    }
}
