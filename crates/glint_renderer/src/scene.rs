//! Scene assembly, parallel render scheduling and PPM export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use thiserror::Error;

use crate::{trace, Camera, Color, Light, Surface};

/// Interval between progress reports while rendering.
const PROGRESS_INTERVAL: Duration = Duration::from_millis(50);

/// Render configuration owned by the scene.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Maximum recursion depth for reflection and refraction
    pub trace_depth: u32,
    /// Epsilon offset for secondary-ray origins (self-intersection guard)
    pub trace_bias: f32,
    /// Background color; also added unconditionally to every shaded hit,
    /// acting as a flat ambient term
    pub environment_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            trace_depth: 10,
            trace_bias: 1e-4,
            environment_color: Color::splat(0.5),
        }
    }
}

/// Errors surfaced by [`Scene::render`] and [`Scene::save`].
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
}

/// A renderable scene: a borrowed camera, borrowed lights and surfaces,
/// and an owned frame buffer.
///
/// The scene never takes ownership of the entities it renders; the
/// caller that assembled them keeps them alive for the scene's lifetime.
/// All of them are read-only during a render, so workers share them
/// without locking.
pub struct Scene<'a> {
    pub config: RenderConfig,
    camera: &'a dyn Camera,
    lights: Vec<&'a dyn Light>,
    surfaces: Vec<&'a dyn Surface>,
    /// Row-major width*height pixel colors, written exactly once per
    /// pixel during render
    frame: Vec<Color>,
}

impl<'a> Scene<'a> {
    /// Create a scene bound to `camera`, with an empty entity set and a
    /// black frame buffer.
    pub fn new(camera: &'a dyn Camera) -> Self {
        let pixels = (camera.width() * camera.height()) as usize;
        Self {
            config: RenderConfig::default(),
            camera,
            lights: Vec::new(),
            surfaces: Vec::new(),
            frame: vec![Color::ZERO; pixels],
        }
    }

    /// Register a light.
    pub fn add_light(&mut self, light: &'a dyn Light) {
        self.lights.push(light);
    }

    /// Register a surface.
    pub fn add_surface(&mut self, surface: &'a dyn Surface) {
        self.surfaces.push(surface);
    }

    /// The rendered frame, row-major.
    pub fn frame(&self) -> &[Color] {
        &self.frame
    }

    /// Render the full frame, blocking until every pixel is computed.
    ///
    /// Pixels are scheduled over a pool of `config.workers` threads;
    /// each pixel index is delivered to exactly one worker and written
    /// to its own frame slot, so scheduling order never affects the
    /// result. Progress is reported on a fixed interval while the
    /// workers drain the grid. There is no cancellation path.
    pub fn render(&mut self) -> Result<(), RenderError> {
        let width = self.camera.width() as usize;
        let total = self.frame.len();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()?;

        log::info!(
            "rendering {}x{} with {} workers",
            self.camera.width(),
            self.camera.height(),
            self.config.workers
        );
        let start = Instant::now();
        let counter = AtomicUsize::new(0);

        let camera = self.camera;
        let surfaces = self.surfaces.as_slice();
        let lights = self.lights.as_slice();
        let config = &self.config;
        let frame = &mut self.frame;

        thread::scope(|scope| {
            // Reporter: polls the pixel counter until the frame is done.
            scope.spawn(|| loop {
                let done = counter.load(Ordering::Relaxed);
                if done >= total {
                    break;
                }
                log::info!(
                    "rendered {}/{} pixels in {:.2}s",
                    done,
                    total,
                    start.elapsed().as_secs_f32()
                );
                thread::sleep(PROGRESS_INTERVAL);
            });

            pool.install(|| {
                frame.par_iter_mut().enumerate().for_each(|(index, pixel)| {
                    let x = (index % width) as u32;
                    let y = (index / width) as u32;
                    *pixel = trace(&camera.ray(x, y), surfaces, lights, config, 1.0, 0);
                    counter.fetch_add(1, Ordering::Relaxed);
                });
            });
        });

        log::info!("done in {:.2}s", start.elapsed().as_secs_f32());
        Ok(())
    }

    /// Save the frame buffer as a binary PPM (`P6`) image.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut writer = BufWriter::new(File::create(path)?);
        write!(
            writer,
            "P6\n{} {}\n255\n",
            self.camera.width(),
            self.camera.height()
        )?;
        for color in &self.frame {
            writer.write_all(&[
                channel_to_byte(color.x),
                channel_to_byte(color.y),
                channel_to_byte(color.z),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Quantize one channel to 8 bits.
#[inline]
fn channel_to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DistantLight, Material, PinholeCamera, Plane, Sphere, Vec3};

    fn looking_down_camera(width: u32, height: u32) -> PinholeCamera {
        PinholeCamera::new(width, height)
            .with_view(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::Z)
            .with_vfov(45.0)
    }

    #[test]
    fn test_flat_plane_end_to_end() {
        let camera = looking_down_camera(4, 4);
        let floor = Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(Color::ONE));
        let sun = DistantLight::new(Color::ONE, 1.0, Vec3::new(0.0, -1.0, 0.0));

        let mut scene = Scene::new(&camera);
        scene.add_surface(&floor);
        scene.add_light(&sun);
        scene.config.environment_color = Color::splat(0.25);
        scene.config.trace_bias = 1e-3;
        scene.render().unwrap();

        // The light shines straight down onto a flat diffuse plane, so
        // the cosine term is 1 everywhere regardless of the view ray.
        let expected = Color::splat(0.25) + Color::ONE;
        for pixel in scene.frame() {
            assert!(
                (*pixel - expected).length() < 1e-4,
                "pixel {:?} != {:?}",
                pixel,
                expected
            );
        }
    }

    #[test]
    fn test_worker_count_does_not_change_output() {
        let camera = looking_down_camera(8, 6);
        let floor = Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(Color::splat(0.8)))
            .with_checker(Color::splat(0.2), 0.25);
        let ball = Sphere::new(Vec3::new(0.0, 0.3, 0.0), 0.2, Material::mirror());
        let sun = DistantLight::new(Color::ONE, 1.0, Vec3::new(-0.3, -1.0, -0.2));

        let parallelism = thread::available_parallelism().map(|n| n.get()).unwrap_or(4);
        let mut frames = Vec::new();
        for workers in [1, 2, parallelism] {
            let mut scene = Scene::new(&camera);
            scene.add_surface(&floor);
            scene.add_surface(&ball);
            scene.add_light(&sun);
            scene.config.workers = workers;
            scene.config.trace_bias = 1e-3;
            scene.render().unwrap();
            frames.push(scene.frame().to_vec());
        }

        // Bit-identical regardless of scheduling order
        assert_eq!(frames[0], frames[1]);
        assert_eq!(frames[0], frames[2]);
    }

    #[test]
    fn test_save_writes_p6_ppm() {
        let camera = looking_down_camera(8, 6);
        let floor = Plane::new(Vec3::ZERO, Vec3::Y, Material::diffuse(Color::ONE));

        let mut scene = Scene::new(&camera);
        scene.add_surface(&floor);
        scene.config.trace_bias = 1e-3;
        scene.render().unwrap();

        let path = std::env::temp_dir().join("glint_save_test.ppm");
        scene.save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let header = b"P6\n8 6\n255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(bytes.len(), header.len() + 3 * 8 * 6);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_channel_quantization() {
        assert_eq!(channel_to_byte(-1.0), 0);
        assert_eq!(channel_to_byte(0.0), 0);
        assert_eq!(channel_to_byte(0.5), 128);
        assert_eq!(channel_to_byte(1.0), 255);
        assert_eq!(channel_to_byte(2.0), 255);
    }
}
