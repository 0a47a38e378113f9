//! CPU-side geometry for line and point primitives.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// Closed circle of radius `distance` in the y = 0 plane.
/// Returns `segments + 1` points; the last repeats the first.
pub fn orbit_path(distance: f32, segments: u32) -> Vec<Vec3> {
    (0..=segments)
        .map(|i| {
            let theta = i as f32 / segments as f32 * TAU;
            Vec3::new(distance * theta.cos(), 0.0, distance * theta.sin())
        })
        .collect()
}

/// `count` points uniformly distributed in the cube `[-extent, extent]³`.
pub fn starfield<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: f32) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
                rng.gen_range(-extent..=extent),
            )
        })
        .collect()
}
