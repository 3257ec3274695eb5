use std::f64::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use noise::{NoiseFn, Perlin};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::BackdropConfig;

// Cycles of nebula detail across one tile.
const NOISE_SCALE: f64 = 3.0;

/// Generate the starfield backdrop texture.
///
/// Perlin noise is sampled on a torus (each texture axis mapped to a circle
/// in 4D noise space) so opposite edges line up and the tile repeats without
/// seams. Stars come from a seeded RNG; identical settings always produce
/// the identical backdrop.
pub fn generate_backdrop(config: &BackdropConfig) -> Image {
    let size = config.size_px;
    let perlin = Perlin::new(config.seed);
    let mut data = vec![0u8; (size * size * 4) as usize];

    for y in 0..size {
        for x in 0..size {
            let s = x as f64 / size as f64;
            let t = y as f64 / size as f64;
            let (sin_s, cos_s) = (TAU * s).sin_cos();
            let (sin_t, cos_t) = (TAU * t).sin_cos();
            let value = perlin.get([
                NOISE_SCALE * cos_s,
                NOISE_SCALE * sin_s,
                NOISE_SCALE * cos_t,
                NOISE_SCALE * sin_t,
            ]);
            let glow = ((value + 1.0) / 2.0).powi(2);

            let i = ((y * size + x) * 4) as usize;
            data[i] = (10.0 + glow * 50.0) as u8;
            data[i + 1] = (8.0 + glow * 30.0) as u8;
            data[i + 2] = (24.0 + glow * 90.0) as u8;
            data[i + 3] = 255;
        }
    }

    let mut rng = StdRng::seed_from_u64(config.seed as u64);
    for _ in 0..config.star_count {
        let x = rng.gen_range(0..size);
        let y = rng.gen_range(0..size);
        let brightness = rng.gen_range(120u8..=255);
        let i = ((y * size + x) * 4) as usize;
        data[i] = brightness;
        data[i + 1] = brightness;
        data[i + 2] = brightness;
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    )
}
