//! Explicit Euler integration

use super::sphere::Sphere;

/// Advance one sphere by `dt` seconds
///
/// Position moves with the velocity from before this call, then velocity
/// picks up the acceleration. `dt` is not validated.
#[inline]
pub fn integrate(sphere: &mut Sphere, dt: f32) {
    sphere.position += sphere.velocity * dt;
    sphere.velocity += sphere.acceleration * dt;
}

/// Advance every sphere in index order
pub fn integrate_all(spheres: &mut [Sphere], dt: f32) {
    for sphere in spheres.iter_mut() {
        integrate(sphere, dt);
    }
}
