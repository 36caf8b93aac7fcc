//! Light trait and concrete light sources.

use crate::{nearest_surface, Color, Surface};
use glint_math::{Ray, Vec3, EPSILON, NO_HIT};

/// Light arriving at a scene point.
///
/// `direction` is the incoming light direction, pointing from the light
/// toward the point. A fully occluded light reports both fields zero;
/// there are no partial or soft shadows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Illumination {
    pub direction: Vec3,
    pub intensity: Color,
}

impl Illumination {
    /// No light reaches the point.
    pub const NONE: Self = Self {
        direction: Vec3::ZERO,
        intensity: Vec3::ZERO,
    };
}

/// Trait for light sources.
///
/// Lights take part in nearest-hit search like surfaces, so a light with
/// a finite `intersect` distance can be seen directly by the camera.
pub trait Light: Send + Sync {
    /// Forward distance at which `ray` hits the light itself, or
    /// [`NO_HIT`] if it cannot be hit.
    fn intersect(&self, ray: &Ray) -> f32;

    /// Color returned when the light wins the nearest-hit search.
    fn color(&self) -> Color;

    /// Light arriving at `point`, with occlusion tested against
    /// `surfaces` via a shadow ray.
    fn illuminate(&self, point: Vec3, surfaces: &[&dyn Surface]) -> Illumination;
}

/// A direction-only light at infinity, like the sun.
pub struct DistantLight {
    color: Color,
    intensity: f32,
    direction: Vec3,
}

impl DistantLight {
    /// Create a new distant light shining along `direction`
    /// (normalized here).
    pub fn new(color: Color, intensity: f32, direction: Vec3) -> Self {
        Self {
            color,
            intensity,
            direction: direction.normalize(),
        }
    }
}

impl Light for DistantLight {
    fn intersect(&self, _ray: &Ray) -> f32 {
        // At infinity, never closer than any surface
        NO_HIT
    }

    fn color(&self) -> Color {
        self.color
    }

    fn illuminate(&self, point: Vec3, surfaces: &[&dyn Surface]) -> Illumination {
        // Shadow ray toward the light, against the light's direction
        let shadow = Ray::new(point, -self.direction);
        let (distance, _) = nearest_surface(&shadow, surfaces);

        if distance < NO_HIT {
            Illumination::NONE
        } else {
            Illumination {
                direction: self.direction,
                intensity: self.color * self.intensity,
            }
        }
    }
}

/// A positional light with inverse-square falloff.
pub struct PointLight {
    color: Color,
    intensity: f32,
    position: Vec3,
}

impl PointLight {
    /// Create a new point light at `position`.
    pub fn new(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            color,
            intensity,
            position,
        }
    }
}

impl Light for PointLight {
    fn intersect(&self, _ray: &Ray) -> f32 {
        // A point has no extent to hit
        NO_HIT
    }

    fn color(&self) -> Color {
        self.color
    }

    fn illuminate(&self, point: Vec3, surfaces: &[&dyn Surface]) -> Illumination {
        let offset = self.position - point;
        let range = offset.length();
        if range < EPSILON {
            // Degenerate: the light sits on the point itself
            return Illumination {
                direction: Vec3::ZERO,
                intensity: self.color * self.intensity,
            };
        }

        let toward = offset / range;
        let shadow = Ray::new(point, toward);
        let (distance, _) = nearest_surface(&shadow, surfaces);

        // Only blockers strictly before the light occlude it
        if distance < range {
            Illumination::NONE
        } else {
            Illumination {
                direction: -toward,
                intensity: self.color * (self.intensity / (range * range)),
            }
        }
    }
}
