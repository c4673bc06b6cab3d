mod census;
mod energy;

pub use census::*;
pub use energy::*;
