//! Mutable per-body runtime state.
//!
//! One `BodyState` per descriptor, in registry order. Angles are kept in f64
//! and only narrowed to f32 when a world position is produced.

use std::f64::consts::TAU;

use glam::Vec3;
use rand::Rng;

use super::registry::{BodyDescriptor, BodyRegistry};

/// Multiplier every body starts with.
pub const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Orbital angle in radians. Grows without bound; only used through cos/sin.
    pub angle: f64,
    /// Accumulated self-rotation in radians.
    pub spin: f64,
    speed_multiplier: f64,
}

impl BodyState {
    pub fn at_angle(angle: f64) -> Self {
        Self {
            angle,
            spin: 0.0,
            speed_multiplier: DEFAULT_SPEED_MULTIPLIER,
        }
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Accepts any value. The UI range is advisory and not enforced here.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = multiplier;
    }

    /// `base_angular_speed * speed_multiplier`.
    pub fn effective_speed(&self, descriptor: &BodyDescriptor) -> f64 {
        descriptor.base_angular_speed * self.speed_multiplier
    }

    /// World position on the orbit plane (y = 0).
    pub fn position(&self, descriptor: &BodyDescriptor) -> Vec3 {
        orbital_position(descriptor.distance, self.angle)
    }
}

/// `(distance·cos θ, 0, distance·sin θ)`.
pub fn orbital_position(distance: f64, angle: f64) -> Vec3 {
    Vec3::new(
        (distance * angle.cos()) as f32,
        0.0,
        (distance * angle.sin()) as f32,
    )
}

/// Create the state list for a registry.
///
/// Orbiting bodies start at an angle drawn uniformly from [0, 2π); the
/// central body starts at 0.
pub fn initialize<R: Rng + ?Sized>(registry: &BodyRegistry, rng: &mut R) -> Vec<BodyState> {
    registry
        .iter()
        .map(|(_, body)| {
            let angle = if body.is_central() {
                0.0
            } else {
                rng.gen_range(0.0..TAU)
            };
            BodyState::at_angle(angle)
        })
        .collect()
}
