use serde::{Deserialize, Serialize};

/// Chance that an infected particle infects a healthy one at a given distance.
pub trait Transmission {
    /// `None` when the pair is out of reach and no draw must be made.
    fn infection_probability(&self, distance: f64) -> Option<f64>;
}

/// `p = exp(-r / threshold)` for `r < 3 * threshold`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExponentialTransmission {
    pub threshold: f64,
}

impl ExponentialTransmission {
    /// Pairs further than this many thresholds apart never interact
    pub const REACH: f64 = 3.0;

    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl Transmission for ExponentialTransmission {
    fn infection_probability(&self, distance: f64) -> Option<f64> {
        if distance < Self::REACH * self.threshold {
            Some((-distance / self.threshold).exp())
        } else {
            None
        }
    }
}

/// Mechanics only, nobody gets infected.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransmission;

impl Transmission for NoTransmission {
    fn infection_probability(&self, _distance: f64) -> Option<f64> {
        None
    }
}
