use std::f32::consts::PI;

use glam::{Vec2, Vec3};

use super::camera::PerspectiveCamera;

const EPS: f32 = 1e-6;

/// Orbit-style camera controller.
///
/// Rotates the camera around its target on a sphere, dollies toward/away
/// from the target, and optionally damps motion so it eases out over several
/// frames. Call `update` once per frame.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    pub enable_damping: bool,
    /// Fraction of the pending rotation applied per frame when damping.
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Pending (azimuth, polar) rotation in radians.
    spherical_delta: Vec2,
    /// Pending radius scale.
    scale: f32,
    saved_position: Vec3,
    saved_target: Vec3,
    /// Last pointer position (NDC) while a drag is active.
    drag_from: Option<Vec2>,
}

impl OrbitControls {
    /// Create controls for a camera and save its current view for `reset`.
    pub fn new(camera: &PerspectiveCamera) -> Self {
        Self {
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            spherical_delta: Vec2::ZERO,
            scale: 1.0,
            saved_position: camera.position,
            saved_target: camera.target,
            drag_from: None,
        }
    }

    pub fn with_damping(mut self, damping_factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = damping_factor.clamp(0.0, 1.0);
        self
    }

    /// Remember the camera's current view as the `reset` target.
    pub fn save_state(&mut self, camera: &PerspectiveCamera) {
        self.saved_position = camera.position;
        self.saved_target = camera.target;
    }

    /// Restore the saved view and drop any pending motion.
    pub fn reset(&mut self, camera: &mut PerspectiveCamera) {
        camera.position = self.saved_position;
        camera.target = self.saved_target;
        self.spherical_delta = Vec2::ZERO;
        self.scale = 1.0;
        self.drag_from = None;
    }

    /// Rotate around the target. Positive `left` swings the camera to the left.
    pub fn rotate(&mut self, left: f32, up: f32) {
        self.spherical_delta.x -= left * self.rotate_speed;
        self.spherical_delta.y -= up * self.rotate_speed;
    }

    /// Dolly by wheel steps. Positive steps move toward the target.
    /// Non-finite steps are ignored.
    pub fn zoom(&mut self, steps: f32) {
        if !steps.is_finite() {
            return;
        }
        self.scale *= 0.95_f32.powf(self.zoom_speed * steps);
    }

    pub fn begin_drag(&mut self, ndc: Vec2) {
        self.drag_from = Some(ndc);
    }

    /// Continue a drag to `ndc`. A full-height drag turns the camera by 2π.
    /// Returns false when no drag is active.
    pub fn drag_to(&mut self, ndc: Vec2, aspect: f32) -> bool {
        let Some(from) = self.drag_from else {
            return false;
        };
        let delta = ndc - from;
        self.rotate(PI * delta.x * aspect, -PI * delta.y);
        self.drag_from = Some(ndc);
        true
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Apply pending motion to the camera. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut PerspectiveCamera) -> bool {
        let offset = camera.position - camera.target;
        let radius = offset.length();
        if radius < EPS {
            return false;
        }

        let applied = if self.enable_damping {
            self.spherical_delta * self.damping_factor
        } else {
            self.spherical_delta
        };

        let theta = offset.x.atan2(offset.z) + applied.x;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + applied.y).clamp(EPS, PI - EPS);
        let radius = (radius * self.scale).clamp(self.min_distance.max(EPS), self.max_distance);

        let new_offset = Vec3::new(
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
            radius * phi.sin() * theta.cos(),
        );
        let old_position = camera.position;
        camera.position = camera.target + new_offset;

        if self.enable_damping {
            self.spherical_delta *= 1.0 - self.damping_factor;
        } else {
            self.spherical_delta = Vec2::ZERO;
        }
        self.scale = 1.0;

        (camera.position - old_position).length_squared() > EPS
    }
}
