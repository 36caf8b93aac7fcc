//! Whitted ray tracer example.
//!
//! Renders a checkered floor with mirror, glass and matte spheres under
//! a distant sun and a point light, then saves a binary PPM.

use anyhow::Result;
use glint_renderer::{
    Color, DistantLight, Material, PinholeCamera, Plane, PointLight, Scene, Sphere, Vec3,
};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let camera = PinholeCamera::new(800, 450)
        .with_view(
            Vec3::new(0.0, 2.0, 6.0), // look_from
            Vec3::new(0.0, 1.0, 0.0), // look_at
            Vec3::Y,                  // vup
        )
        .with_vfov(50.0);

    let floor = Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(Color::splat(0.9)))
        .with_checker(Color::splat(0.2), 1.0);
    let mirror = Sphere::new(Vec3::new(-1.5, 1.0, 0.0), 1.0, Material::mirror());
    let glass = Sphere::new(Vec3::new(1.5, 1.0, 0.0), 1.0, Material::glass(1.5));
    let matte = Sphere::new(
        Vec3::new(0.0, 0.6, -2.0),
        0.6,
        Material::diffuse(Color::new(0.8, 0.3, 0.2)),
    );

    let sun = DistantLight::new(Color::ONE, 0.8, Vec3::new(-0.4, -1.0, -0.3));
    let lamp = PointLight::new(Color::new(1.0, 0.9, 0.7), 40.0, Vec3::new(0.0, 5.0, 2.0));

    let mut scene = Scene::new(&camera);
    scene.add_surface(&floor);
    scene.add_surface(&mirror);
    scene.add_surface(&glass);
    scene.add_surface(&matte);
    scene.add_light(&sun);
    scene.add_light(&lamp);
    scene.config.environment_color = Color::new(0.10, 0.12, 0.15);

    scene.render()?;

    let filename = "render.ppm";
    scene.save(filename)?;
    log::info!("saved {}", filename);

    Ok(())
}
