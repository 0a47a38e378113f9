use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::api::error::ConfigError;
use crate::api::types::{EntityId, GameEvent};
use crate::bridge::protocol::DEFAULT_MAX_LIGHTS;
use crate::components::entity::Entity;
use crate::components::mesh::MeshColor;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::PerspectiveCamera;
use crate::renderer::instance::InstanceBuffer;
use crate::renderer::primitives::{LineBuffer, PointBuffer};
use crate::systems::lighting::LightState;

/// Seed used when the host does not provide one.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in CSS pixels.
    pub viewport_width: f32,
    /// Initial viewport height in CSS pixels.
    pub viewport_height: f32,
    /// Maximum number of mesh instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of line vertices (default: 2048).
    pub max_line_vertices: usize,
    /// Maximum number of points (default: 8192).
    pub max_points: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Maximum number of directional lights (default: 4).
    pub max_lights: usize,
    /// Longest frame delta handed to the simulation, in seconds (default: 0.1).
    pub max_frame_dt: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            max_instances: 64,
            max_line_vertices: 2048,
            max_points: 8192,
            max_events: 32,
            max_lights: DEFAULT_MAX_LIGHTS,
            max_frame_dt: 0.1,
        }
    }
}

impl GameConfig {
    pub fn aspect(&self) -> f32 {
        if self.viewport_height > 0.0 {
            self.viewport_width / self.viewport_height
        } else {
            1.0
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Replace the game's data table from host-provided JSON.
    /// Called before `init`; the runner re-runs `init` afterwards.
    fn configure(&mut self, _json: &str) -> Result<(), ConfigError> {
        log::warn!("this game does not accept external configuration");
        Ok(())
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The frame tick. `dt` is the clamped frame delta in seconds.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f64);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}

    /// UI state for the host overlay, serialized to JSON by the runner.
    fn ui_snapshot(&self) -> serde_json::Value {
        serde_json::Value::Null
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub lights: LightState,
    pub lines: LineBuffer,
    pub points: PointBuffer,
    pub events: Vec<GameEvent>,
    pub rng: ChaCha8Rng,
    max_events: usize,
    max_line_vertices: usize,
    max_points: usize,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(&GameConfig::default(), DEFAULT_SEED)
    }

    /// Context sized by `config` with a seeded random source.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(75.0, config.aspect(), 0.1, 1000.0),
            lights: LightState::with_capacity(config.max_lights),
            lines: LineBuffer::new(),
            points: PointBuffer::new(),
            events: Vec::with_capacity(config.max_events),
            rng: ChaCha8Rng::seed_from_u64(seed),
            max_events: config.max_events,
            max_line_vertices: config.max_line_vertices,
            max_points: config.max_points,
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn an entity. Returns its ID.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.scene.spawn(entity);
        id
    }

    /// Append a polyline to the line buffer. Dropped when it would overflow.
    pub fn add_line_strip(&mut self, points: &[glam::Vec3], color: MeshColor) -> bool {
        let needed = points.len().saturating_sub(1) * 2;
        if self.lines.vertex_count() as usize + needed > self.max_line_vertices {
            log::warn!("line buffer full ({}), dropping strip", self.max_line_vertices);
            return false;
        }
        self.lines.push_strip(points, color);
        true
    }

    /// Add a point sprite. Dropped when the point buffer is full.
    pub fn add_point(&mut self, pos: glam::Vec3, size: f32, color: MeshColor) -> bool {
        if self.points.point_count() as usize >= self.max_points {
            return false;
        }
        self.points.push(pos, size, color);
        true
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full ({}), dropping kind {}", self.max_events, event.kind);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Drop everything the previous `init` created.
    pub fn reset_scene(&mut self) {
        self.scene.clear();
        self.lights.clear();
        self.lines.clear();
        self.points.clear();
        self.events.clear();
        self.next_id = 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for optional custom render commands.
pub struct RenderContext<'a> {
    pub instances: &'a mut InstanceBuffer,
}
