//! Collision detection and response for spheres in a box
//!
//! Two passes: every sphere against the six walls, then every unordered pair
//! of spheres in ascending index order. Pairs are resolved one at a time, so
//! a pair sees the velocities left behind by the pairs before it.

use glam::Vec3;

use super::sphere::Sphere;
use super::vector::{dot, mag, mul, normalize, sub};
use super::world::{Boundary, WorldConfig};

/// Centers closer than this are treated as coincident
pub const COINCIDENT_EPSILON: f32 = 1e-6;

/// Geometry of two spheres in contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal from the first sphere toward the second
    pub normal: Vec3,
    /// Distance between centers
    pub distance: f32,
    /// How far the spheres overlap (0 when just touching)
    pub penetration: f32,
}

/// What happened to a pair during resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// Not touching
    Apart,
    /// Centers coincide, no usable normal
    Degenerate,
    /// Touching but already moving apart; velocities untouched
    Separating,
    /// Impulse applied
    Resolved,
}

/// Keep one sphere inside the box
///
/// Each axis is checked on its own against the low wall first, then the high
/// wall. A hit reflects that velocity component scaled by `elasticity` and
/// puts the sphere back against the wall. Returns true if any axis was hit.
pub fn resolve_wall_collision(
    sphere: &mut Sphere,
    boundary: &Boundary,
    radius: f32,
    elasticity: f32,
) -> bool {
    let lo = boundary.min_center(radius);
    let hi = boundary.max_center(radius);
    let mut hit = false;

    for axis in 0..3 {
        if sphere.position[axis] <= lo {
            sphere.velocity[axis] = -sphere.velocity[axis] * elasticity;
            sphere.position[axis] = lo;
            hit = true;
        } else if sphere.position[axis] >= hi {
            sphere.velocity[axis] = -sphere.velocity[axis] * elasticity;
            sphere.position[axis] = hi;
            hit = true;
        }
    }

    hit
}

/// Wall pass over the whole population; returns the number of spheres hit
pub fn resolve_wall_collisions(spheres: &mut [Sphere], config: &WorldConfig) -> usize {
    let mut hits = 0;
    for sphere in spheres.iter_mut() {
        if resolve_wall_collision(
            sphere,
            &config.boundary,
            config.radius,
            config.elasticity,
        ) {
            hits += 1;
        }
    }
    hits
}

/// Contact between two equal spheres, if they touch
///
/// Touching counts (`distance == 2 * radius`). Fails with
/// `PairOutcome::Apart` or `PairOutcome::Degenerate` when there is no contact
/// to resolve.
pub fn sphere_contact(pos_a: Vec3, pos_b: Vec3, radius: f32) -> Result<Contact, PairOutcome> {
    let delta = sub(pos_b, pos_a);
    let distance = mag(delta);

    if distance > 2.0 * radius {
        return Err(PairOutcome::Apart);
    }
    if distance <= COINCIDENT_EPSILON {
        return Err(PairOutcome::Degenerate);
    }
    let normal = normalize(delta).ok_or(PairOutcome::Degenerate)?;

    Ok(Contact {
        normal,
        distance,
        penetration: 2.0 * radius - distance,
    })
}

/// Resolve a single pair of spheres
///
/// The impulse is applied only when the spheres close along the normal
/// (`s = v_a·n - v_b·n > 0`). With `depenetrate` the overlap is split evenly
/// between both spheres along the normal, whether or not they were closing.
pub fn resolve_pair(
    a: &mut Sphere,
    b: &mut Sphere,
    radius: f32,
    elasticity: f32,
    depenetrate: bool,
) -> PairOutcome {
    let contact = match sphere_contact(a.position, b.position, radius) {
        Ok(contact) => contact,
        Err(outcome) => return outcome,
    };
    let d = contact.normal;

    // Closing speed along the normal
    let s = dot(a.velocity, d) - dot(b.velocity, d);

    let outcome = if s > 0.0 {
        let total = a.mass + b.mass;
        let w_a = a.mass / total;
        let w_b = b.mass / total;

        let impulse_a = -w_a * (1.0 + elasticity) * s;
        let impulse_b = w_b * (1.0 + elasticity) * s;

        a.velocity += mul(d, impulse_a);
        b.velocity += mul(d, impulse_b);
        PairOutcome::Resolved
    } else {
        PairOutcome::Separating
    };

    if depenetrate && contact.penetration > 0.0 {
        let push = mul(d, contact.penetration / 2.0);
        a.position -= push;
        b.position += push;
    }

    outcome
}

/// Pairwise pass over every `i < j` in ascending order
///
/// Positions moved by de-penetration are clamped back into the box.
/// Returns the number of pairs that received an impulse.
pub fn resolve_sphere_collisions(spheres: &mut [Sphere], config: &WorldConfig) -> usize {
    let n = spheres.len();
    let radius = config.radius;
    let mut resolved = 0;

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = spheres.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            let outcome = resolve_pair(a, b, radius, config.elasticity, config.depenetration);
            match outcome {
                PairOutcome::Apart => continue,
                PairOutcome::Degenerate => {
                    log::trace!("Skipping coincident spheres {} and {}", i, j);
                    continue;
                }
                PairOutcome::Resolved => resolved += 1,
                PairOutcome::Separating => {}
            }

            if config.depenetration {
                a.position = config.boundary.clamp(a.position, radius);
                b.position = config.boundary.clamp(b.position, radius);
            }
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const R: f32 = 0.075;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_wall_low_reflects_and_clamps() {
        let b = Boundary::default();
        let mut s = Sphere::new(Vec3::new(-0.99, 0.0, 0.0)).with_velocity(Vec3::new(-2.0, 1.0, 0.0));

        assert!(resolve_wall_collision(&mut s, &b, R, 0.9));
        assert!(approx(s.position.x, -1.0 + R));
        assert!(approx(s.velocity.x, 1.8));
        // Untouched axes
        assert_eq!(s.velocity.y, 1.0);
        assert_eq!(s.position.y, 0.0);
    }

    #[test]
    fn test_wall_high_reflects_and_clamps() {
        let b = Boundary::default();
        let mut s = Sphere::new(Vec3::new(0.0, 0.0, 1.2)).with_velocity(Vec3::new(0.0, 0.0, 3.0));

        assert!(resolve_wall_collision(&mut s, &b, R, 0.5));
        assert!(approx(s.position.z, 1.0 - R));
        assert!(approx(s.velocity.z, -1.5));
    }

    #[test]
    fn test_wall_corner_hits_every_axis() {
        let b = Boundary::default();
        let mut s = Sphere::new(Vec3::new(-1.0, 1.0, -1.0)).with_velocity(Vec3::new(-1.0, 1.0, -1.0));

        resolve_wall_collision(&mut s, &b, R, 1.0);
        assert_eq!(s.velocity, Vec3::new(1.0, -1.0, 1.0));
        assert!(b.contains(s.position, R));
    }

    #[test]
    fn test_wall_inside_untouched() {
        let b = Boundary::default();
        let mut s = Sphere::new(Vec3::new(0.2, -0.3, 0.4)).with_velocity(Vec3::ONE);
        let before = s.clone();

        assert!(!resolve_wall_collision(&mut s, &b, R, 0.9));
        assert_eq!(s, before);
    }

    #[test]
    fn test_wall_contact_reflects_even_when_leaving() {
        // Exactly touching the wall while already moving away still flips
        let b = Boundary::default();
        let mut s = Sphere::new(Vec3::new(-1.0 + R, 0.0, 0.0)).with_velocity(Vec3::new(1.0, 0.0, 0.0));

        assert!(resolve_wall_collision(&mut s, &b, R, 0.9));
        assert!(approx(s.velocity.x, -0.9));
    }

    #[test]
    fn test_head_on_equal_mass() {
        let v = 1.5;
        let e = 0.9;
        let mut a = Sphere::new(Vec3::new(-R, 0.0, 0.0)).with_velocity(Vec3::new(v, 0.0, 0.0));
        let mut b = Sphere::new(Vec3::new(R, 0.0, 0.0)).with_velocity(Vec3::new(-v, 0.0, 0.0));

        let outcome = resolve_pair(&mut a, &mut b, R, e, true);
        assert_eq!(outcome, PairOutcome::Resolved);
        assert!(approx(a.velocity.x, -v * e));
        assert!(approx(b.velocity.x, v * e));
        assert!(approx(a.velocity.y, 0.0) && approx(b.velocity.z, 0.0));
        // Exactly touching: nothing to push apart
        assert!(approx(a.position.x, -R));
        assert!(approx(b.position.x, R));
    }

    #[test]
    fn test_elastic_exchange_conserves_momentum() {
        let mut a = Sphere::new(Vec3::new(0.0, 0.0, 0.0)).with_velocity(Vec3::new(1.0, 0.0, 0.0));
        let mut b = Sphere::new(Vec3::new(0.1, 0.0, 0.0));

        resolve_pair(&mut a, &mut b, R, 1.0, false);
        assert!(approx(a.velocity.x, 0.0));
        assert!(approx(b.velocity.x, 1.0));
    }

    #[test]
    fn test_separating_pair_keeps_velocity() {
        let mut a = Sphere::new(Vec3::new(-0.05, 0.0, 0.0)).with_velocity(Vec3::new(-1.0, 0.0, 0.0));
        let mut b = Sphere::new(Vec3::new(0.05, 0.0, 0.0)).with_velocity(Vec3::new(1.0, 0.0, 0.0));

        let outcome = resolve_pair(&mut a, &mut b, R, 0.9, false);
        assert_eq!(outcome, PairOutcome::Separating);
        assert_eq!(a.velocity.x, -1.0);
        assert_eq!(b.velocity.x, 1.0);
    }

    #[test]
    fn test_depenetration_splits_overlap() {
        let mut a = Sphere::new(Vec3::new(0.0, 0.0, 0.0));
        let mut b = Sphere::new(Vec3::new(0.0, 0.1, 0.0));

        resolve_pair(&mut a, &mut b, R, 0.9, true);
        let gap = (b.position - a.position).length();
        assert!(approx(gap, 2.0 * R));
        assert!(approx(a.position.y, -0.025));
        assert!(approx(b.position.y, 0.125));
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let mut a = Sphere::new(Vec3::splat(0.3)).with_velocity(Vec3::X);
        let mut b = Sphere::new(Vec3::splat(0.3)).with_velocity(-Vec3::X);
        let (a0, b0) = (a.clone(), b.clone());

        assert_eq!(resolve_pair(&mut a, &mut b, R, 0.9, true), PairOutcome::Degenerate);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
        assert!(a.velocity.is_finite() && a.position.is_finite());
    }

    #[test]
    fn test_unequal_mass_weights() {
        let mut a = Sphere::new(Vec3::ZERO)
            .with_mass(3.0)
            .with_velocity(Vec3::new(1.0, 0.0, 0.0));
        let mut b = Sphere::new(Vec3::new(0.1, 0.0, 0.0)).with_mass(1.0);

        resolve_pair(&mut a, &mut b, R, 1.0, false);
        // s = 1, w_a = 0.75, w_b = 0.25
        assert!(approx(a.velocity.x, 1.0 - 0.75 * 2.0));
        assert!(approx(b.velocity.x, 0.25 * 2.0));
    }

    #[test]
    fn test_pair_order_is_index_order() {
        // Sphere 0 hits 1 first, then the updated 1 meets 2
        let config = WorldConfig::default()
            .with_elasticity(1.0)
            .with_depenetration(false);
        let mut spheres = vec![
            Sphere::new(Vec3::new(-0.14, 0.0, 0.0)).with_velocity(Vec3::new(1.0, 0.0, 0.0)),
            Sphere::new(Vec3::new(0.0, 0.0, 0.0)),
            Sphere::new(Vec3::new(0.14, 0.0, 0.0)),
        ];

        let resolved = resolve_sphere_collisions(&mut spheres, &config);
        assert_eq!(resolved, 2);
        assert!(approx(spheres[0].velocity.x, 0.0));
        assert!(approx(spheres[1].velocity.x, 0.0));
        assert!(approx(spheres[2].velocity.x, 1.0));
    }

    #[test]
    fn test_depenetration_stays_in_box() {
        let config = WorldConfig::default();
        let lo = config.boundary.min_center(config.radius);
        let mut spheres = vec![
            Sphere::new(Vec3::new(lo, 0.0, 0.0)),
            Sphere::new(Vec3::new(lo + 0.05, 0.0, 0.0)),
        ];

        resolve_sphere_collisions(&mut spheres, &config);
        for s in &spheres {
            assert!(config.boundary.contains(s.position, config.radius));
        }
    }

    proptest! {
        #[test]
        fn prop_wall_pass_contains(
            p in prop::array::uniform3(-3.0f32..3.0),
            v in prop::array::uniform3(-10.0f32..10.0),
            e in 0.0f32..=1.0,
        ) {
            let b = Boundary::default();
            let mut s = Sphere::new(Vec3::from(p)).with_velocity(Vec3::from(v));
            resolve_wall_collision(&mut s, &b, R, e);
            prop_assert!(b.contains(s.position, R));
        }

        #[test]
        fn prop_distant_pair_untouched(
            p in prop::array::uniform3(-1.0f32..1.0),
            dir in prop::array::uniform3(-1.0f32..1.0),
            extra in 0.01f32..1.0,
            va in prop::array::uniform3(-5.0f32..5.0),
            vb in prop::array::uniform3(-5.0f32..5.0),
        ) {
            let dir = Vec3::from(dir);
            prop_assume!(dir.length() > 0.1);
            let offset = dir.normalize() * (2.0 * R + extra);

            let mut a = Sphere::new(Vec3::from(p)).with_velocity(Vec3::from(va));
            let mut b = Sphere::new(Vec3::from(p) + offset).with_velocity(Vec3::from(vb));
            let (a0, b0) = (a.clone(), b.clone());

            prop_assert_eq!(resolve_pair(&mut a, &mut b, R, 0.9, true), PairOutcome::Apart);
            prop_assert_eq!(a, a0);
            prop_assert_eq!(b, b0);
        }
    }
}
