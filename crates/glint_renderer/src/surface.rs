//! Surface trait for ray-intersectable geometry.

use crate::{Color, Material};
use glint_math::{Ray, Vec3, NO_HIT};

/// Trait for surfaces that can be hit by rays.
///
/// Scenes are heterogeneous collections assembled at runtime, so surfaces
/// are registered as trait objects and dispatched dynamically.
pub trait Surface: Send + Sync {
    /// Forward distance along `ray` to the first intersection, or
    /// [`NO_HIT`] if the ray misses.
    fn intersect(&self, ray: &Ray) -> f32;

    /// Unit surface normal at a point on the surface.
    fn normal(&self, point: Vec3) -> Vec3;

    /// The material this surface shades with.
    fn material(&self) -> &Material;

    /// Surface color at a point. Defaults to the material's base color;
    /// textured surfaces sample by position.
    fn color(&self, _point: Vec3) -> Color {
        self.material().color
    }
}

/// Find the nearest surface hit by `ray`, scanning the whole slice.
///
/// Returns the winning distance ([`NO_HIT`] when nothing is hit) and the
/// surface that produced it. On exact distance ties the earlier entry
/// wins. Complexity is linear in the number of surfaces.
pub fn nearest_surface<'a>(
    ray: &Ray,
    surfaces: &[&'a dyn Surface],
) -> (f32, Option<&'a dyn Surface>) {
    let mut distance = NO_HIT;
    let mut nearest = None;

    for surface in surfaces {
        let length = surface.intersect(ray);
        if length < distance {
            distance = length;
            nearest = Some(*surface);
        }
    }

    (distance, nearest)
}
