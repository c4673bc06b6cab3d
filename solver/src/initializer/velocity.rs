use na::Vector2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Largest absolute value of an initial velocity component
pub const INITIAL_VELOCITY_SCALE: f64 = 0.3;

/// Uniform distribution every initial velocity component is drawn from
pub fn initial_velocity_distribution() -> Uniform<f64> {
    Uniform::new_inclusive(-INITIAL_VELOCITY_SCALE, INITIAL_VELOCITY_SCALE)
}

/// Draw x then y component.
pub fn sample_velocity<R: Rng + ?Sized>(distribution: &Uniform<f64>, rng: &mut R) -> Vector2<f64> {
    let x = distribution.sample(rng);
    let y = distribution.sample(rng);
    Vector2::new(x, y)
}
