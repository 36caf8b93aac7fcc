// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod ray;
mod shading;

pub use ray::Ray;
pub use shading::{reflect, refract, EPSILON, NO_HIT};
