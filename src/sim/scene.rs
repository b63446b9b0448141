//! Initial population generation
//!
//! Spheres spawn inside a centered cube that stays `SPAWN_MARGIN` clear of
//! every wall, so no sphere starts in wall contact.

use glam::Vec3;
use rand::Rng;

use super::sphere::Sphere;
use super::world::{Boundary, WorldConfig};
use crate::consts::SPAWN_MARGIN;

/// Half the side of the spawn cube for a box and sphere radius
///
/// Uses `SPAWN_MARGIN` unless the radius alone is bigger, in which case the
/// cube shrinks to keep a small gap from the walls.
pub fn spawn_half_extent(boundary: &Boundary, radius: f32) -> f32 {
    let margin = SPAWN_MARGIN.max(radius * 1.01);
    (boundary.width() / 2.0 - margin).max(0.0)
}

/// Uniform random vector with components in [0, 1)
fn random_unit_cube<R: Rng>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.random(), rng.random(), rng.random())
}

/// Build `count` spheres for a world
///
/// Each sphere gets a random position in the spawn cube, a random velocity
/// with components in [0, 1), a random color, mass 1 and acceleration
/// `[0, 0, -gravity]`.
pub fn generate_spheres<R: Rng>(
    rng: &mut R,
    count: usize,
    config: &WorldConfig,
) -> Vec<Sphere> {
    let half = spawn_half_extent(&config.boundary, config.radius);
    let center = Vec3::splat(config.boundary.center());

    let mut spheres = Vec::with_capacity(count);
    for _ in 0..count {
        let position = center + random_unit_cube(rng) * (2.0 * half) - Vec3::splat(half);
        let color = random_unit_cube(rng);
        let velocity = random_unit_cube(rng);

        spheres.push(
            Sphere::new(position)
                .with_velocity(velocity)
                .with_color(color)
                .with_mass(1.0)
                .with_gravity(config.gravity),
        );
    }

    spheres
}
