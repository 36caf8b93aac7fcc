//! Infinite plane surface.

use crate::{Color, Material, Surface};
use glint_math::{Ray, Vec3, EPSILON, NO_HIT};

/// An infinite plane defined by a point and a unit normal.
pub struct Plane {
    point: Vec3,
    normal: Vec3,
    material: Material,
    /// Alternate checker color and cell size, when set
    checker: Option<(Color, f32)>,
}

impl Plane {
    /// Create a new plane. `normal` is normalized here.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normal.normalize(),
            material,
            checker: None,
        }
    }

    /// Shade alternating cells of `size` with `other` instead of the
    /// material's base color.
    pub fn with_checker(mut self, other: Color, size: f32) -> Self {
        self.checker = Some((other, size));
        self
    }

    /// A tangent basis spanning the plane, derived from the normal.
    fn tangent_basis(&self) -> (Vec3, Vec3) {
        let tangent = if self.normal.x.abs() > self.normal.y.abs() {
            Vec3::new(self.normal.z, 0.0, -self.normal.x).normalize()
        } else {
            Vec3::new(0.0, -self.normal.z, self.normal.y).normalize()
        };
        (tangent, self.normal.cross(tangent))
    }
}

impl Surface for Plane {
    fn intersect(&self, ray: &Ray) -> f32 {
        let denominator = self.normal.dot(ray.direction);
        // Near-parallel rays never meet the plane
        if denominator.abs() < EPSILON {
            return NO_HIT;
        }

        let distance = (self.point - ray.origin).dot(self.normal) / denominator;
        // A small negative tolerance keeps grazing starts on the plane
        if distance > -EPSILON {
            distance
        } else {
            NO_HIT
        }
    }

    fn normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn color(&self, point: Vec3) -> Color {
        match self.checker {
            Some((other, size)) => {
                let (tangent, bitangent) = self.tangent_basis();
                let relative = point - self.point;
                let u = (relative.dot(tangent) / size).floor() as i64;
                let v = (relative.dot(bitangent) / size).floor() as i64;
                if (u + v).rem_euclid(2) == 0 {
                    self.material.color
                } else {
                    other
                }
            }
            None => self.material.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::ZERO, Vec3::Y, Material::default())
    }

    #[test]
    fn test_plane_hit_distance() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let distance = plane.intersect(&ray);
        assert!((distance - 2.0).abs() < 1e-6);
        assert_eq!(plane.normal(ray.at(distance)), Vec3::Y);
    }

    #[test]
    fn test_plane_parallel_ray_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);

        assert_eq!(plane.intersect(&ray), NO_HIT);
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);

        assert_eq!(plane.intersect(&ray), NO_HIT);
    }

    #[test]
    fn test_plane_grazing_start_tolerated() {
        // Origin a hair above the plane, pointing away: the solved
        // distance is slightly negative but within tolerance.
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 5e-5, 0.0), Vec3::Y);

        let distance = plane.intersect(&ray);
        assert!(distance < 0.0 && distance > -EPSILON);
    }

    #[test]
    fn test_checker_alternates() {
        let plane = floor().with_checker(Color::ZERO, 1.0);

        let base = plane.material().color;
        assert_eq!(plane.color(Vec3::new(0.5, 0.0, 0.5)), base);
        assert_eq!(plane.color(Vec3::new(1.5, 0.0, 0.5)), Color::ZERO);
        assert_eq!(plane.color(Vec3::new(1.5, 0.0, 1.5)), base);
        assert_eq!(plane.color(Vec3::new(-0.5, 0.0, 0.5)), Color::ZERO);
    }
}
