//! Material coefficients for surface shading.

use glint_math::Vec3;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Shading coefficients for a surface.
///
/// The `k_*` coefficients are nominally in `[0, 1]` but are not clamped;
/// a material is shared read-only by the surface that holds it and is
/// never mutated during a render.
#[derive(Debug, Clone)]
pub struct Material {
    /// Base surface color, sampled per hit point by `Surface::color`
    pub color: Color,
    /// Lambertian diffuse weight
    pub k_diffusive: f32,
    /// Phong specular weight
    pub k_specular: f32,
    /// Mirror reflection weight
    pub k_reflective: f32,
    /// Transmission weight
    pub k_refractive: f32,
    /// Refractive index of the material's medium (> 0)
    pub k_refractive_index: f32,
}

impl Material {
    /// A matte surface with the given color.
    pub fn diffuse(color: Color) -> Self {
        Self {
            color,
            k_diffusive: 1.0,
            k_specular: 0.0,
            k_reflective: 0.0,
            k_refractive: 0.0,
            k_refractive_index: 1.0,
        }
    }

    /// A polished mirror with a specular highlight.
    pub fn mirror() -> Self {
        Self {
            color: Color::ONE,
            k_diffusive: 0.0,
            k_specular: 0.8,
            k_reflective: 0.9,
            k_refractive: 0.0,
            k_refractive_index: 1.0,
        }
    }

    /// A transparent surface with the given refractive index
    /// (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn glass(k_refractive_index: f32) -> Self {
        Self {
            color: Color::ONE,
            k_diffusive: 0.0,
            k_specular: 0.5,
            k_reflective: 0.1,
            k_refractive: 0.9,
            k_refractive_index,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::ONE)
    }
}
