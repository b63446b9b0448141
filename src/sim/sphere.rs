//! Sphere entity
//!
//! Radius is not stored per sphere; every sphere in a world shares
//! `WorldConfig::radius`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A single body in the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Constant for the sphere's lifetime
    pub acceleration: Vec3,
    /// Always positive
    pub mass: f32,
    /// Render-only, RGB in [0, 1]
    pub color: Vec3,
}

impl Sphere {
    /// Unit-mass sphere at rest, white
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            mass: 1.0,
            color: Vec3::ONE,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Set acceleration from a gravity magnitude (positive pulls toward -z)
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.acceleration = gravity_acceleration(gravity);
        self
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub fn momentum(&self) -> Vec3 {
        self.velocity * self.mass
    }
}

/// Acceleration vector for a scalar gravity magnitude
#[inline]
pub fn gravity_acceleration(gravity: f32) -> Vec3 {
    Vec3::new(0.0, 0.0, -gravity)
}
