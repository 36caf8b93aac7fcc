//! Camera interface and a pinhole implementation.

use glint_math::{Ray, Vec3};

/// Interface the renderer expects from a camera: a pixel grid and a
/// primary ray for every coordinate in it.
pub trait Camera: Send + Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Primary ray through pixel (x, y).
    fn ray(&self, x: u32, y: u32) -> Ray;
}

/// A pinhole camera generating deterministic rays through pixel centers.
#[derive(Debug, Clone)]
pub struct PinholeCamera {
    width: u32,
    height: u32,

    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,
    /// Vertical field of view in degrees
    vfov: f32,

    // Cached values derived from the fields above
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
}

impl PinholeCamera {
    /// Create a camera with the given resolution, looking down -Z.
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Self {
            width,
            height,
            look_from: Vec3::ZERO,
            look_at: -Vec3::Z,
            vup: Vec3::Y,
            vfov: 90.0,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
        };
        camera.update();
        camera
    }

    /// Set camera position and orientation.
    pub fn with_view(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self.update();
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_vfov(mut self, vfov: f32) -> Self {
        self.vfov = vfov;
        self.update();
        self
    }

    /// Recompute the viewport from the current settings.
    fn update(&mut self) {
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = viewport_height * (self.width as f32 / self.height as f32);

        // Orthonormal camera basis
        let w = (self.look_from - self.look_at).normalize();
        let u = self.vup.cross(w).normalize();
        let v = w.cross(u);

        let viewport_u = viewport_width * u;
        let viewport_v = -viewport_height * v;

        self.pixel_delta_u = viewport_u / self.width as f32;
        self.pixel_delta_v = viewport_v / self.height as f32;

        let viewport_upper_left = self.look_from - w - viewport_u / 2.0 - viewport_v / 2.0;
        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);
    }
}

impl Camera for PinholeCamera {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn ray(&self, x: u32, y: u32) -> Ray {
        let pixel_center =
            self.pixel00_loc + (x as f32) * self.pixel_delta_u + (y as f32) * self.pixel_delta_v;
        Ray::new(self.look_from, pixel_center - self.look_from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = PinholeCamera::new(101, 101)
            .with_view(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0), Vec3::Y);

        // Center ray should point roughly towards -Z
        let ray = camera.ray(50, 50);
        assert!(ray.direction.z < -0.99);
    }

    #[test]
    fn test_rays_are_unit_length() {
        let camera = PinholeCamera::new(16, 9)
            .with_view(Vec3::new(3.0, 2.0, 1.0), Vec3::ZERO, Vec3::Y)
            .with_vfov(40.0);

        for (x, y) in [(0, 0), (15, 0), (0, 8), (15, 8), (7, 4)] {
            let ray = camera.ray(x, y);
            assert!((ray.direction.length() - 1.0).abs() < 1e-5);
            assert_eq!(ray.origin, Vec3::new(3.0, 2.0, 1.0));
        }
    }

    #[test]
    fn test_image_edges_span_fov() {
        let camera = PinholeCamera::new(100, 100).with_vfov(90.0);

        // With a 90 degree fov the top and bottom rays diverge strongly.
        let top = camera.ray(50, 0);
        let bottom = camera.ray(50, 99);
        assert!(top.direction.y > 0.5);
        assert!(bottom.direction.y < -0.5);
    }
}
