use serde::{Deserialize, Serialize};
use crate::{Result, SimulationError};

/// Health state of an individual.
///
/// The only edges are `Healthy -> Infected` and `Infected -> Recovered`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Infected,
    Recovered,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [
        HealthStatus::Healthy,
        HealthStatus::Infected,
        HealthStatus::Recovered,
    ];

    /// Check if `self -> next` is an edge of the state machine.
    pub fn can_transition_to(self, next: HealthStatus) -> bool {
        matches!(
            (self, next),
            (HealthStatus::Healthy, HealthStatus::Infected)
                | (HealthStatus::Infected, HealthStatus::Recovered)
        )
    }

    /// Returns `next` if the transition is allowed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use epimd_core::HealthStatus;
    /// assert_eq!(HealthStatus::Healthy.transition(HealthStatus::Infected), Ok(HealthStatus::Infected));
    /// assert!(HealthStatus::Recovered.transition(HealthStatus::Infected).is_err());
    /// assert!(HealthStatus::Infected.transition(HealthStatus::Infected).is_err());
    /// ```
    pub fn transition(self, next: HealthStatus) -> Result<HealthStatus> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(SimulationError::IllegalTransition { from: self, to: next })
        }
    }

    /// Ordinal along Healthy -> Infected -> Recovered
    pub fn rank(self) -> u8 {
        match self {
            HealthStatus::Healthy => 0,
            HealthStatus::Infected => 1,
            HealthStatus::Recovered => 2,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Infected => "infected",
            HealthStatus::Recovered => "recovered",
        };
        f.write_str(name)
    }
}
