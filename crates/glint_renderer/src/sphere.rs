//! Sphere surface.

use crate::{Material, Surface};
use glint_math::{Ray, Vec3, EPSILON, NO_HIT};

/// A sphere defined by center and radius.
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
        }
    }
}

impl Surface for Sphere {
    fn intersect(&self, ray: &Ray) -> f32 {
        // Ray directions are unit length, so the quadratic's leading
        // coefficient is 1.
        let oc = self.center - ray.origin;
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        // Prefer the nearest forward root
        let sqrtd = discriminant.sqrt();
        let near = h - sqrtd;
        if near > EPSILON {
            return near;
        }
        let far = h + sqrtd;
        if far > EPSILON {
            return far;
        }

        NO_HIT
    }

    fn normal(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
