//! Recursive Whitted-style tracer.
//!
//! Direct illumination with hard shadows, Phong highlights, mirror
//! reflection and refraction. Recursion is bounded by an explicit depth
//! accumulator, so termination holds for any scene topology including
//! mutually reflective surfaces.

use crate::{nearest_surface, Color, Light, RenderConfig, Surface};
use glint_math::{reflect, refract, Ray, Vec3};

/// Phong highlight hardness exponent.
const PHONG_HARDNESS: i32 = 20;

/// Compute the color seen by `ray`.
///
/// `refractive_index` is the index of the medium the ray currently
/// travels through; primary rays start in air with index 1 and depth 0.
pub fn trace(
    ray: &Ray,
    surfaces: &[&dyn Surface],
    lights: &[&dyn Light],
    config: &RenderConfig,
    refractive_index: f32,
    depth: u32,
) -> Color {
    if depth > config.trace_depth {
        return config.environment_color;
    }

    // Nearest hit over surfaces and lights, linear scan
    let (mut distance, nearest) = nearest_surface(ray, surfaces);
    let mut seen_light = None;
    for light in lights {
        let length = light.intersect(ray);
        if length < distance {
            distance = length;
            seen_light = Some(*light);
        }
    }

    // A light beating every surface is seen directly
    if let Some(light) = seen_light {
        return light.color();
    }
    let Some(surface) = nearest else {
        return config.environment_color;
    };

    let material = surface.material();
    let point = ray.at(distance);
    let normal = surface.normal(point);
    // Shadow rays start slightly off the surface to avoid shadow acne
    let shadow_origin = point + normal * config.trace_bias;

    let mut color = Color::ZERO;
    for light in lights {
        let illumination = light.illuminate(shadow_origin, surfaces);

        // Lambertian cosine law, clamped non-negative
        if material.k_diffusive > 0.0 {
            let lambert = normal.dot(-illumination.direction).max(0.0);
            color += material.k_diffusive * illumination.intensity * lambert;
        }
        // Phong highlight against the mirrored incoming direction
        if material.k_specular > 0.0 {
            let reflected = reflect(ray.direction, normal);
            let alignment = ray.direction.dot(reflected).max(0.0);
            color += material.k_specular * illumination.intensity * alignment.powi(PHONG_HARDNESS);
        }
    }

    if material.k_reflective > 0.0 {
        let reflected = reflect(ray.direction, normal);
        let bounce = Ray::new(point + reflected * config.trace_bias, reflected);
        color += material.k_reflective
            * trace(&bounce, surfaces, lights, config, refractive_index, depth + 1);
    }

    if material.k_refractive > 0.0 {
        let transmitted = refract(
            ray.direction,
            normal,
            refractive_index / material.k_refractive_index,
        );
        // Zero means total internal reflection, skip the contribution
        if transmitted != Vec3::ZERO {
            let bounce = Ray::new(point + transmitted * config.trace_bias, transmitted);
            color += material.k_refractive
                * trace(
                    &bounce,
                    surfaces,
                    lights,
                    config,
                    material.k_refractive_index,
                    depth + 1,
                );
        }
    }

    // The environment term is added even on a hit; see RenderConfig docs
    config.environment_color + color * surface.color(point)
}
