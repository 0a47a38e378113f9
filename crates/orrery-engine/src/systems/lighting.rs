//! Scene lighting: one ambient color plus directional lights.
//!
//! Lights are persistent. They stay until explicitly removed and are
//! serialized for the renderer's shading pass every frame.

use glam::Vec3;

use crate::components::mesh::MeshColor;

/// A directional light shining from `position` toward the origin.
///
/// Wire format (8 floats / 32 bytes):
/// `[dir_x, dir_y, dir_z, intensity, r, g, b, _pad]`
/// where `dir` is the unit vector pointing *toward* the light.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirectionalLight {
    pub dir_x: f32,
    pub dir_y: f32,
    pub dir_z: f32,
    pub intensity: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad: f32,
}

impl DirectionalLight {
    pub const FLOATS: usize = 8;

    /// Light placed at `position`, aimed at the origin.
    pub fn new(position: Vec3, color: MeshColor, intensity: f32) -> Self {
        let dir = position.normalize_or_zero();
        Self {
            dir_x: dir.x,
            dir_y: dir.y,
            dir_z: dir.z,
            intensity,
            r: color.r,
            g: color.g,
            b: color.b,
            _pad: 0.0,
        }
    }

    pub fn direction(&self) -> Vec3 {
        Vec3::new(self.dir_x, self.dir_y, self.dir_z)
    }
}

/// Manages active lights and the ambient color.
///
/// Ambient defaults to white, which leaves lit meshes at full color when no
/// directional lights exist.
pub struct LightState {
    lights: Vec<DirectionalLight>,
    ambient: MeshColor,
    max_lights: usize,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(crate::bridge::protocol::DEFAULT_MAX_LIGHTS)
    }

    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            ambient: MeshColor::WHITE,
            max_lights,
        }
    }

    /// Add a light. Returns false when the light table is full.
    pub fn add(&mut self, light: DirectionalLight) -> bool {
        if self.lights.len() >= self.max_lights {
            log::warn!("light table full ({}), dropping light", self.max_lights);
            return false;
        }
        self.lights.push(light);
        true
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &DirectionalLight> {
        self.lights.iter()
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: MeshColor) {
        self.ambient = color;
    }

    pub fn ambient(&self) -> MeshColor {
        self.ambient
    }

    /// Pointer to the lights data for host reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}
