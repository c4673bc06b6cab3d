use serde::{Deserialize, Serialize};
use crate::{Result, SimulationError};

/// Scalar inputs of one simulation step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Lennard-Jones energy scale
    pub epsilon: f64,
    /// Lennard-Jones equilibrium distance r_m
    pub equilibrium_distance: f64,
    /// Distance scale of the infection probability exp(-r / threshold)
    pub infection_threshold: f64,
    pub delta_time: f64,
    /// Total kinetic energy the thermostat holds the system at
    pub thermostat_target: f64,
    /// Probability per step that an infected particle recovers
    pub recovery_probability: f64,
    /// Accepted and validated, has no effect on transitions
    pub fatality_probability: f64,
}

/// The three user controls the parameters are derived from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlSettings {
    /// Pushes the Lennard-Jones equilibrium distance up
    pub social_distancing: f64,
    /// Shrinks the infection distance scale
    pub handwashing_frequency: f64,
    /// Kinetic energy of the system
    pub economic_activity: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            epsilon: 1e-13,
            equilibrium_distance: 0.2,
            infection_threshold: 0.02,
            delta_time: 0.0005,
            thermostat_target: 20.0,
            recovery_probability: 0.001,
            fatality_probability: 0.01,
        }
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            social_distancing: 40.0,
            handwashing_frequency: 50.0,
            economic_activity: 20.0,
        }
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter(format!("{name} must be positive, got {value}")))
    }
}

fn probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimulationError::InvalidParameter(format!("{name} must be in [0, 1], got {value}")))
    }
}

impl SimulationParameters {
    /// Check every parameter. Called before a step touches the state.
    pub fn validate(&self) -> Result<()> {
        positive("epsilon", self.epsilon)?;
        positive("equilibrium_distance", self.equilibrium_distance)?;
        positive("infection_threshold", self.infection_threshold)?;
        positive("delta_time", self.delta_time)?;
        if !self.thermostat_target.is_finite() || self.thermostat_target < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "thermostat_target must be non-negative, got {}", self.thermostat_target
            )));
        }
        probability("recovery_probability", self.recovery_probability)?;
        probability("fatality_probability", self.fatality_probability)?;
        Ok(())
    }

    /// Derive parameters from user controls, everything else is taken from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use epimd_core::{ControlSettings, SimulationParameters};
    /// let controls = ControlSettings {
    ///     social_distancing: 40.0,
    ///     handwashing_frequency: 4.0,
    ///     economic_activity: 30.0,
    /// };
    /// let params = SimulationParameters::default().with_controls(&controls).unwrap();
    /// assert!((params.equilibrium_distance - 0.2).abs() < 1e-12);
    /// assert_eq!(params.infection_threshold, 0.25);
    /// assert_eq!(params.thermostat_target, 30.0);
    /// ```
    pub fn with_controls(&self, controls: &ControlSettings) -> Result<Self> {
        positive("handwashing_frequency", controls.handwashing_frequency)?;
        if !controls.social_distancing.is_finite() || controls.social_distancing < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "social_distancing must be non-negative, got {}", controls.social_distancing
            )));
        }
        let params = Self {
            equilibrium_distance: 0.1 + controls.social_distancing / 400.0,
            infection_threshold: 1.0 / controls.handwashing_frequency,
            thermostat_target: controls.economic_activity,
            ..self.clone()
        };
        params.validate()?;
        Ok(params)
    }
}
