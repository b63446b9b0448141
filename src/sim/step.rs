//! World step
//!
//! One step runs three passes in a fixed order:
//! 1. integrate every sphere by `dt`
//! 2. wall collisions for every sphere
//! 3. sphere-sphere collisions for every pair `i < j`
//!
//! Collisions run last so the population handed to the renderer always
//! satisfies wall containment.

use super::collision::{resolve_sphere_collisions, resolve_wall_collisions};
use super::integrate::integrate_all;
use super::world::World;

/// Counters from a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Spheres that touched at least one wall
    pub wall_hits: usize,
    /// Pairs that received an impulse
    pub pair_impulses: usize,
}

/// Advance the world by one step of `dt` seconds
pub fn step(world: &mut World, dt: f32) -> StepStats {
    integrate_all(&mut world.spheres, dt);

    let wall_hits = resolve_wall_collisions(&mut world.spheres, &world.config);
    let pair_impulses = resolve_sphere_collisions(&mut world.spheres, &world.config);

    world.time += dt;
    world.steps += 1;

    StepStats {
        wall_hits,
        pair_impulses,
    }
}
