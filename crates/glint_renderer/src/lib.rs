//! Glint - Whitted-style CPU ray tracing
//!
//! Recursive ray tracer with direct illumination, hard shadows, mirror
//! reflection and refraction, driven over a worker pool that computes
//! every pixel exactly once.

mod camera;
mod light;
mod material;
mod plane;
mod scene;
mod sphere;
mod surface;
mod tracer;

pub use camera::{Camera, PinholeCamera};
pub use light::{DistantLight, Illumination, Light, PointLight};
pub use material::{Color, Material};
pub use plane::Plane;
pub use scene::{RenderConfig, RenderError, Scene};
pub use sphere::Sphere;
pub use surface::{nearest_surface, Surface};
pub use tracer::trace;

/// Re-export the math types used throughout the public API
pub use glint_math::{reflect, refract, Ray, Vec3, EPSILON, NO_HIT};
