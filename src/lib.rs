//! Sphere Box - bouncing spheres inside a cube
//!
//! Core modules:
//! - `sim`: Deterministic sphere dynamics (integration, wall and pair collisions)
//! - `clock`: Frame clock turning animation timestamps into step deltas
//! - `render`: Read-only snapshot handed to the renderer
//! - `settings`: User parameters (sphere count, gravity)
//! - `platform`: Browser bindings

pub mod clock;
pub mod error;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use error::ConfigError;
pub use render::SphereInstance;
pub use settings::Settings;
pub use sim::{Boundary, Sphere, World, WorldConfig};

/// Default world constants
pub mod consts {
    /// Lower bound of the box on every axis
    pub const BOX_LOW: f32 = -1.0;
    pub const BOX_HIGH: f32 = 1.0;

    /// Shared sphere diameter
    pub const DIAMETER: f32 = 0.15;
    pub const RADIUS: f32 = DIAMETER / 2.0;

    /// Restitution for both wall and sphere-sphere contacts
    pub const ELASTICITY: f32 = 0.9;

    /// Standard gravity (m/s²), applied along -z
    pub const GRAVITY: f32 = 9.80665;

    /// Distance kept between the spawn cube and each wall
    pub const SPAWN_MARGIN: f32 = 0.2;

    /// Sphere count used on first load
    pub const DEFAULT_SPHERE_COUNT: u32 = 3;
    /// Fallback when the count field is empty or zero
    pub const FALLBACK_SPHERE_COUNT: u32 = 2;

    /// Largest frame delta fed into a step (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;
}
