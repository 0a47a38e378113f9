//! Host buffer layout.
//! Must stay in sync with the TypeScript `protocol.ts` on the browser side.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 20 floats]
//! [Instances: max_instances × 16 floats]
//! [Lines: max_line_vertices × 6 floats]
//! [Points: max_points × 8 floats]
//! [Events: max_events × 4 floats]
//! [Lights: max_lights × 8 floats]
//! ```
//!
//! Capacities are written once into the header at init.
//! TypeScript reads them from the header to compute offsets dynamically.

use crate::api::game::GameConfig;
use crate::api::types::GameEvent;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::MeshInstance;
use crate::renderer::primitives::{LineVertex, PointVertex};
use crate::systems::lighting::DirectionalLight;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_PROTOCOL_VERSION: usize = 2;
pub const HEADER_MAX_INSTANCES: usize = 3;
pub const HEADER_INSTANCE_COUNT: usize = 4;
pub const HEADER_MAX_LINE_VERTICES: usize = 5;
pub const HEADER_LINE_VERTEX_COUNT: usize = 6;
pub const HEADER_MAX_POINTS: usize = 7;
pub const HEADER_POINT_COUNT: usize = 8;
pub const HEADER_MAX_EVENTS: usize = 9;
pub const HEADER_EVENT_COUNT: usize = 10;
pub const HEADER_MAX_LIGHTS: usize = 11;
pub const HEADER_LIGHT_COUNT: usize = 12;
pub const HEADER_AMBIENT_R: usize = 13;
pub const HEADER_AMBIENT_G: usize = 14;
pub const HEADER_AMBIENT_B: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block: view-projection matrix + eye.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;
/// Floats per mesh instance.
pub const INSTANCE_FLOATS: usize = MeshInstance::FLOATS;
/// Floats per line vertex: x, y, z, r, g, b.
pub const LINE_VERTEX_FLOATS: usize = LineVertex::FLOATS;
/// Floats per point: x, y, z, size, r, g, b, pad.
pub const POINT_FLOATS: usize = PointVertex::FLOATS;
/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = GameEvent::FLOATS;
/// Floats per directional light.
pub const LIGHT_FLOATS: usize = DirectionalLight::FLOATS;

pub const DEFAULT_MAX_LIGHTS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_line_vertices: usize,
    pub max_points: usize,
    pub max_events: usize,
    pub max_lights: usize,

    pub camera_offset: usize,
    pub instance_data_offset: usize,
    pub line_data_offset: usize,
    pub point_data_offset: usize,
    pub event_data_offset: usize,
    pub light_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_line_vertices: usize,
        max_points: usize,
        max_events: usize,
        max_lights: usize,
    ) -> Self {
        let camera_offset = HEADER_FLOATS;
        let instance_data_offset = camera_offset + CAMERA_FLOATS;
        let line_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let point_data_offset = line_data_offset + max_line_vertices * LINE_VERTEX_FLOATS;
        let event_data_offset = point_data_offset + max_points * POINT_FLOATS;
        let light_data_offset = event_data_offset + max_events * EVENT_FLOATS;
        let buffer_total_floats = light_data_offset + max_lights * LIGHT_FLOATS;

        Self {
            max_instances,
            max_line_vertices,
            max_points,
            max_events,
            max_lights,
            camera_offset,
            instance_data_offset,
            line_data_offset,
            point_data_offset,
            event_data_offset,
            light_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_line_vertices,
            config.max_points,
            config.max_events,
            config.max_lights,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 1024, 5000, 16, 4);
        let expected_total = HEADER_FLOATS + 20 + 32 * 16 + 1024 * 6 + 5000 * 8 + 16 * 4 + 4 * 8;
        assert_eq!(layout.buffer_total_floats, expected_total);
        assert_eq!(layout.buffer_total_bytes, expected_total * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(10, 20, 30, 40, 2);
        assert_eq!(layout.camera_offset, HEADER_FLOATS);
        assert_eq!(layout.instance_data_offset, layout.camera_offset + CAMERA_FLOATS);
        assert_eq!(layout.line_data_offset, layout.instance_data_offset + 10 * INSTANCE_FLOATS);
        assert_eq!(layout.point_data_offset, layout.line_data_offset + 20 * LINE_VERTEX_FLOATS);
        assert_eq!(layout.event_data_offset, layout.point_data_offset + 30 * POINT_FLOATS);
        assert_eq!(layout.light_data_offset, layout.event_data_offset + 40 * EVENT_FLOATS);
        assert_eq!(layout.buffer_total_floats, layout.light_data_offset + 2 * LIGHT_FLOATS);
    }

    #[test]
    fn default_config_fits_solar_system() {
        let config = GameConfig::default();
        let layout = ProtocolLayout::from_config(&config);
        // Nine bodies plus one ring, eight orbits of 64 segments, 5000 stars.
        assert!(layout.max_instances >= 10);
        assert!(layout.max_line_vertices >= 8 * 64 * 2);
        assert!(layout.max_points >= 5000);
        assert_eq!(layout.max_lights, DEFAULT_MAX_LIGHTS);
    }

    #[test]
    fn header_indices_fit_header() {
        assert!(HEADER_AMBIENT_B < HEADER_FLOATS);
        assert_eq!(HEADER_LOCK, 0);
        assert_eq!(HEADER_FRAME_COUNTER, 1);
        assert_eq!(PROTOCOL_VERSION, 1.0);
    }
}
