use thiserror::Error;
use crate::HealthStatus;

/// Every failure the engine can report.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// A parameter is outside of its admissible range. Rejected before anything is mutated.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The placement grid has fewer sites than requested particles.
    #[error("Can't place {requested} particles on a grid with {capacity} sites")]
    CapacityExceeded {
        requested: usize,
        capacity: usize,
    },

    /// The placement grid would be too big to walk.
    #[error("Placement grid with {sites} sites is too expensive (limit is {limit})")]
    TooExpensive {
        sites: u64,
        limit: u64,
    },

    /// The state can't be evaluated as is (coincident particles, stationary system).
    #[error("Degenerate state: {0}")]
    DegenerateState(String),

    /// The requested health transition is not an edge of the state machine.
    #[error("Illegal health transition {from:?} -> {to:?}")]
    IllegalTransition {
        from: HealthStatus,
        to: HealthStatus,
    },
}

pub type Result<T> = std::result::Result<T, SimulationError>;
