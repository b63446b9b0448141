//! Configuration errors
//!
//! The step itself never fails; these are raised when a world is built from
//! bad parameters.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Radius must be positive and finite
    InvalidRadius(f32),
    /// Box must be wider than one sphere diameter on every axis
    BoxTooSmall { low: f32, high: f32, radius: f32 },
    /// Elasticity must be in [0, 1]
    InvalidElasticity(f32),
    /// Gravity must be finite
    InvalidGravity(f32),
    /// Sphere mass must be positive and finite
    InvalidMass { index: usize, mass: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRadius(r) => {
                write!(f, "radius must be positive and finite (got {})", r)
            }
            ConfigError::BoxTooSmall { low, high, radius } => write!(
                f,
                "box [{}, {}] cannot hold a sphere of radius {}",
                low, high, radius
            ),
            ConfigError::InvalidElasticity(e) => {
                write!(f, "elasticity must be in [0, 1] (got {})", e)
            }
            ConfigError::InvalidGravity(g) => write!(f, "gravity must be finite (got {})", g),
            ConfigError::InvalidMass { index, mass } => {
                write!(f, "sphere {} has invalid mass {}", index, mass)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
