mod integrator;
mod kernel;
mod potential;
mod solver;
mod transmission;

pub use integrator::*;
pub use kernel::*;
pub use potential::*;
pub use solver::*;
pub use transmission::*;
