//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure:
//! - Time only advances through `step(dt)`
//! - Seeded RNG only
//! - Stable iteration order (by population index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod integrate;
pub mod scene;
pub mod sphere;
pub mod step;
pub mod vector;
pub mod world;

pub use collision::{
    Contact, PairOutcome, resolve_pair, resolve_sphere_collisions, resolve_wall_collision,
    resolve_wall_collisions, sphere_contact,
};
pub use integrate::{integrate, integrate_all};
pub use scene::{generate_spheres, spawn_half_extent};
pub use sphere::{Sphere, gravity_acceleration};
pub use step::{StepStats, step};
pub use world::{Boundary, RngState, World, WorldConfig};
