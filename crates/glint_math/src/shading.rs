//! Direction helpers shared by the shading code.

use crate::Vec3;

/// Tolerance used for degenerate-case detection, never for exact equality.
pub const EPSILON: f32 = 1e-4;

/// Sentinel distance meaning "no intersection".
///
/// Intersection tests return this instead of failing when a ray misses,
/// so nearest-hit searches can compare distances unconditionally.
pub const NO_HIT: f32 = f32::MAX;

/// Reflect a direction about a unit normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit direction through a surface via Snell's law.
///
/// `eta` is the incident medium's refractive index over the transmitted
/// medium's. Returns `Vec3::ZERO` when total internal reflection leaves
/// no transmitted direction.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Vec3 {
    let cos_i = -v.dot(n);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * v + (eta * cos_i - k.sqrt()) * n
    }
}
