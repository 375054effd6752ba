// Copyright @yucwang 2026

use std::ops::Range;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use log::{debug, info};

use crate::core::sampler::Sampler;
use crate::core::scene::Scene;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};

pub use super::renderer::Renderer;

/// Pixel rectangle [x0, x1) x [y0, y1).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Tile {
    pub x0: usize,
    pub x1: usize,
    pub y0: usize,
    pub y1: usize,
}

impl Tile {
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }
}

/// Row major grid of tiles covering the image; the last row and column are
/// clipped to the image.
pub fn prepare_tiles(width: usize, height: usize, tile_width: usize, tile_height: usize) -> Vec<Tile> {
    if width == 0 || height == 0 || tile_width == 0 || tile_height == 0 {
        return Vec::new();
    }

    let x_tiles = (width + tile_width - 1) / tile_width;
    let y_tiles = (height + tile_height - 1) / tile_height;
    let mut tiles = Vec::with_capacity(x_tiles * y_tiles);
    for j in 0..y_tiles {
        for i in 0..x_tiles {
            let x0 = i * tile_width;
            let y0 = j * tile_height;
            tiles.push(Tile {
                x0,
                x1: (x0 + tile_width).min(width),
                y0,
                y1: (y0 + tile_height).min(height),
            });
        }
    }
    tiles
}

/// Split `count` tiles into at most `workers` contiguous ranges.
pub fn partition_tiles(count: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1).min(count.max(1));
    let chunk = (count + workers - 1) / workers;
    (0..workers)
        .map(|w| (w * chunk).min(count)..((w + 1) * chunk).min(count))
        .filter(|range| !range.is_empty())
        .collect()
}

/// Renders a fixed wavelength tile by tile. Each worker owns a contiguous
/// range of tiles and one random stream seeded from that range, so the
/// output only depends on the worker count.
pub struct TiledRenderer {
    tile_width: usize,
    tile_height: usize,
    samples: u32,
    wavelength: Float,
    threads: usize,
}

impl TiledRenderer {
    pub fn new(tile_width: usize, tile_height: usize, samples: u32, wavelength: Float, threads: usize) -> Self {
        Self {
            tile_width,
            tile_height,
            samples: samples.max(1),
            wavelength,
            threads: threads.max(1),
        }
    }

    /// Average of `samples` estimates over the footprint of pixel (x, y).
    /// Film positions the camera does not see count as zero.
    pub fn render_pixel(&self, scene: &Scene, sampler: &mut Sampler, x: usize, y: usize) -> f32 {
        let inv_size = Vector2f::new(1.0 / scene.camera.width() as Float,
                                     1.0 / scene.camera.height() as Float);
        let pixel = Vector2f::new(x as Float, y as Float);
        let mut accum = 0.0;
        for _ in 0..self.samples {
            let uv = (pixel + sampler.next_2d()).component_mul(&inv_size);
            if let Some(ray) = scene.camera.sample_ray(&uv) {
                accum += scene.integrator.li(scene, sampler, &ray, self.wavelength);
            }
        }
        (accum / self.samples as Float) as f32
    }

    fn render_tile(&self, scene: &Scene, sampler: &mut Sampler, tile: &Tile) -> Vec<f32> {
        let mut block = Vec::with_capacity(tile.width() * tile.height());
        for y in tile.y0..tile.y1 {
            for x in tile.x0..tile.x1 {
                block.push(self.render_pixel(scene, sampler, x, y));
            }
        }
        block
    }
}

impl Renderer for TiledRenderer {
    fn render(&self, scene: &Scene) -> Bitmap {
        let width = scene.camera.width();
        let height = scene.camera.height();
        let mut bitmap = Bitmap::new(width, height);

        let tiles = prepare_tiles(width, height, self.tile_width, self.tile_height);
        if tiles.is_empty() {
            return bitmap;
        }
        let ranges = partition_tiles(tiles.len(), self.threads);

        info!("Rendering {}x{} at {} nm, {} spp, {} tiles on {} threads.",
              width, height, self.wavelength, self.samples, tiles.len(), ranges.len());

        let progress = ProgressBar::new(tiles.len() as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} tiles")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let start = Instant::now();
        let tiles_ref: &[Tile] = &tiles;
        let (tx, rx) = mpsc::channel::<(Tile, Vec<f32>)>();

        thread::scope(|scope| {
            for range in ranges.iter().cloned() {
                let tx = tx.clone();
                scope.spawn(move || {
                    debug!("Worker takes tiles {}..{}", range.start, range.end);
                    let mut sampler = Sampler::new(range.start as u64, range.end as u64);
                    for tile in &tiles_ref[range] {
                        let block = self.render_tile(scene, &mut sampler, tile);
                        if tx.send((*tile, block)).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for (tile, block) in rx.iter() {
                bitmap.blit(tile.x0, tile.y0, tile.width(), tile.height(), &block);
                progress.inc(1);
            }
        });

        progress.finish_and_clear();
        info!("Rendering finished in {}.", HumanDuration(start.elapsed()));
        bitmap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::medium::Medium;
    use crate::core::sensor::Sensor;
    use crate::emitters::directional::DirectionalEmitter;
    use crate::integrators::path::PathIntegrator;
    use crate::integrators::transmittance::TransmittanceIntegrator;
    use crate::math::constants::{ATMOSPHERE_THICKNESS, Vector3f};
    use crate::math::ray::Ray3f;
    use crate::media::atmosphere::CompositeAtmosphere;
    use crate::sensors::fisheye::FisheyeCamera;

    struct ZenithSensor;

    impl Sensor for ZenithSensor {
        fn sample_ray(&self, _uv: &Vector2f) -> Option<Ray3f> {
            Some(Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0)))
        }

        fn width(&self) -> usize {
            1
        }

        fn height(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_tiles_cover_image_once() {
        let (width, height) = (70, 45);
        let tiles = prepare_tiles(width, height, 32, 16);
        assert_eq!(tiles.len(), 3 * 3);
        assert_eq!(tiles[2], Tile { x0: 64, x1: 70, y0: 0, y1: 16 });
        assert_eq!(tiles[8], Tile { x0: 64, x1: 70, y0: 32, y1: 45 });

        let mut hits = vec![0; width * height];
        for tile in tiles.iter() {
            for y in tile.y0..tile.y1 {
                for x in tile.x0..tile.x1 {
                    hits[x + y * width] += 1;
                }
            }
        }
        assert!(hits.iter().all(|&h| h == 1));
        assert!(prepare_tiles(0, 10, 4, 4).is_empty());
    }

    #[test]
    fn test_partition_tiles() {
        assert_eq!(partition_tiles(10, 3), vec![0..4, 4..8, 8..10]);
        assert_eq!(partition_tiles(2, 8), vec![0..1, 1..2]);
        assert_eq!(partition_tiles(5, 0), vec![0..5]);
        assert!(partition_tiles(0, 4).is_empty());
    }

    #[test]
    fn test_zenith_transmittance_matches_quadrature() {
        let atmosphere = CompositeAtmosphere::new(0, 1.0, "none");
        // Midpoint rule for the vertical optical depth.
        let steps = 100_000;
        let dh = ATMOSPHERE_THICKNESS / steps as Float;
        let optical_depth: Float = (0..steps)
            .map(|i| atmosphere.extinction((i as Float + 0.5) * dh, 550.0) * dh)
            .sum();
        let expected = (-optical_depth).exp();

        let scene = Scene::new(Box::new(atmosphere),
                               Box::new(ZenithSensor),
                               Box::new(TransmittanceIntegrator::new()),
                               Box::new(DirectionalEmitter::new(Vector3f::new(0.0, 0.0, 1.0))),
                               0.3);
        let renderer = TiledRenderer::new(32, 32, 100_000, 550.0, 1);
        let image = renderer.render(&scene);
        let value = image[(0, 0)] as Float;
        assert!((value - expected).abs() < 0.01, "rendered {} expected {}", value, expected);
        assert!(expected > 0.8 && expected < 0.95);
    }

    #[test]
    fn test_render_is_deterministic_per_thread_count() {
        let scene = Scene::new(Box::new(CompositeAtmosphere::new(5, 1.0, "rural")),
                               Box::new(FisheyeCamera::new(0.0, 12, 8)),
                               Box::new(PathIntegrator::new(4, false)),
                               Box::new(DirectionalEmitter::new(Vector3f::new(1.0, 0.0, 1.0))),
                               0.3);
        let renderer = TiledRenderer::new(4, 4, 64, 500.0, 3);
        let a = renderer.render(&scene);
        let b = renderer.render(&scene);
        assert_eq!(a.data(), b.data());

        // Corners of the film are outside the fisheye circle.
        assert_eq!(a[(0, 0)], 0.0);
        assert_eq!(a[(11, 7)], 0.0);
        assert!(a[(6, 4)] > 0.0);
    }
}
