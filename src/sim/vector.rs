//! Three-component vector helpers
//!
//! Thin free functions over `glam::Vec3` so collision code reads like the
//! formulas it implements.

use glam::Vec3;

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    a + b
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    a - b
}

#[inline]
pub fn mul(v: Vec3, scalar: f32) -> Vec3 {
    v * scalar
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.dot(b)
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Euclidean norm
#[inline]
pub fn mag(v: Vec3) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`
///
/// Returns `None` for a zero-length or non-finite vector.
#[inline]
pub fn normalize(v: Vec3) -> Option<Vec3> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Some(v / len)
    } else {
        None
    }
}

/// Scale every element of a slice in place
pub fn scale_each(values: &mut [f32], scalar: f32) {
    for value in values.iter_mut() {
        *value *= scalar;
    }
}
