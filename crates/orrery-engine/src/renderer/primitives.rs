//! Static line and point geometry buffers (orbit paths, starfield).
//!
//! Filled once at scene setup and read by the browser renderer as flat f32
//! arrays.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::MeshColor;

/// One endpoint of a line segment: `[x, y, z, r, g, b]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LineVertex {
    pub const FLOATS: usize = 6;

    pub fn new(pos: Vec3, color: MeshColor) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Line list: every two consecutive vertices form one segment.
#[derive(Debug, Default)]
pub struct LineBuffer {
    vertices: Vec<LineVertex>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a polyline as independent segments.
    pub fn push_strip(&mut self, points: &[Vec3], color: MeshColor) {
        for pair in points.windows(2) {
            self.vertices.push(LineVertex::new(pair[0], color));
            self.vertices.push(LineVertex::new(pair[1], color));
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    pub fn vertices_ptr(&self) -> *const f32 {
        self.vertices.as_ptr() as *const f32
    }
}

/// Point sprite: `[x, y, z, size, r, g, b, pad]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub size: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub _pad: f32,
}

impl PointVertex {
    pub const FLOATS: usize = 8;
}

#[derive(Debug, Default)]
pub struct PointBuffer {
    points: Vec<PointVertex>,
}

impl PointBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pos: Vec3, size: f32, color: MeshColor) {
        self.points.push(PointVertex {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            size,
            r: color.r,
            g: color.g,
            b: color.b,
            _pad: 0.0,
        });
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[PointVertex] {
        &self.points
    }

    pub fn point_count(&self) -> u32 {
        self.points.len() as u32
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_becomes_segment_pairs() {
        let mut lines = LineBuffer::new();
        let grey = MeshColor::from_hex(0x555555);
        lines.push_strip(&[Vec3::ZERO, Vec3::X, Vec3::Y], grey);
        assert_eq!(lines.vertex_count(), 4);
        assert_eq!(lines.vertices()[1].x, 1.0);
        assert_eq!(lines.vertices()[2].x, 1.0);
        assert_eq!(lines.vertices()[3].y, 1.0);
    }

    #[test]
    fn single_point_strip_draws_nothing() {
        let mut lines = LineBuffer::new();
        lines.push_strip(&[Vec3::ONE], MeshColor::WHITE);
        assert_eq!(lines.vertex_count(), 0);
    }

    #[test]
    fn wire_sizes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), LineVertex::FLOATS * 4);
        assert_eq!(std::mem::size_of::<PointVertex>(), PointVertex::FLOATS * 4);
    }

    #[test]
    fn point_buffer_records_size_and_color() {
        let mut points = PointBuffer::new();
        points.push(Vec3::new(1.0, 2.0, 3.0), 0.1, MeshColor::WHITE);
        assert_eq!(points.point_count(), 1);
        let p = points.points()[0];
        assert_eq!((p.x, p.y, p.z, p.size), (1.0, 2.0, 3.0, 0.1));
        assert_eq!((p.r, p.g, p.b), (1.0, 1.0, 1.0));
    }
}
