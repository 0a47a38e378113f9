use orrery_engine::systems::render::build_instance_buffer;
use orrery_engine::{
    CameraUniform, EngineContext, FrameClock, Game, GameConfig, InputEvent, InputQueue,
    InstanceBuffer, ProtocolLayout, RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game (e.g., `solar-orrery`) creates a `thread_local!` GameRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    instances: InstanceBuffer,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    seed: u64,
    initialized: bool,
    camera: CameraUniform,
    ui_json: String,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);
        let ctx = EngineContext::with_seed(&config, seed);
        let camera = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            instances: InstanceBuffer::with_capacity(config.max_instances),
            clock: FrameClock::new(config.max_frame_dt),
            layout,
            config,
            seed,
            initialized: false,
            camera,
            ui_json: String::from("null"),
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.ctx = EngineContext::with_seed(&self.config, self.seed);
        self.clock = FrameClock::new(self.config.max_frame_dt);
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.publish_frame();
    }

    /// Replace the game's body table from JSON and rebuild the scene.
    /// On error the current table stays in place.
    pub fn load_bodies(&mut self, json: &str) -> bool {
        match self.game.configure(json) {
            Ok(()) => {
                if self.initialized {
                    self.ctx.reset_scene();
                    self.game.init(&mut self.ctx);
                    self.publish_frame();
                }
                true
            }
            Err(e) => {
                log::error!("rejected body table: {}", e);
                false
            }
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update game, rebuild render buffers.
    pub fn tick(&mut self, frame_dt: f64) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        let dt = self.clock.tick(frame_dt);
        self.game.update(&mut self.ctx, &self.input, dt);

        // Drain input after update
        self.input.drain();

        self.publish_frame();
    }

    fn publish_frame(&mut self) {
        build_instance_buffer(&self.ctx.scene, &mut self.instances, self.layout.max_instances);
        {
            let mut render_ctx = RenderContext {
                instances: &mut self.instances,
            };
            self.game.render(&mut render_ctx);
        }
        self.camera = self.ctx.camera.uniform();
        self.ui_json = self.game.ui_snapshot().to_string();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame()
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.instance_count()
    }

    pub fn line_vertices_ptr(&self) -> *const f32 {
        self.ctx.lines.vertices_ptr()
    }

    pub fn line_vertex_count(&self) -> u32 {
        self.ctx.lines.vertex_count()
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.ctx.points.points_ptr()
    }

    pub fn point_count(&self) -> u32 {
        self.ctx.points.point_count()
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient(&self) -> [f32; 3] {
        let c = self.ctx.lights.ambient();
        [c.r, c.g, c.b]
    }

    /// View-projection matrix (column-major) followed by the eye position.
    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn ui_json(&self) -> String {
        self.ui_json.clone()
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_line_vertices(&self) -> u32 {
        self.layout.max_line_vertices as u32
    }

    pub fn max_points(&self) -> u32 {
        self.layout.max_points as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::{ConfigError, GameEvent};

    #[derive(Default)]
    struct Probe {
        inits: u32,
        updates: u32,
        last_dt: f64,
        seen: usize,
        reject: bool,
    }

    impl Game for Probe {
        fn configure(&mut self, _json: &str) -> Result<(), ConfigError> {
            if self.reject {
                Err(ConfigError::Empty)
            } else {
                Ok(())
            }
        }

        fn init(&mut self, _ctx: &mut EngineContext) {
            self.inits += 1;
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f64) {
            self.updates += 1;
            self.last_dt = dt;
            self.seen += input.len();
            ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        }

        fn ui_snapshot(&self) -> serde_json::Value {
            serde_json::json!({ "updates": self.updates })
        }
    }

    #[test]
    fn tick_before_init_is_ignored() {
        let mut runner = GameRunner::new(Probe::default(), 1);
        runner.tick(0.016);
        assert_eq!(runner.game().updates, 0);
    }

    #[test]
    fn tick_clamps_delta_and_drains_input() {
        let mut runner = GameRunner::new(Probe::default(), 1);
        runner.init();
        runner.push_input(InputEvent::Click { target: 0 });
        runner.tick(5.0);
        assert_eq!(runner.game().seen, 1);
        assert!((runner.game().last_dt - 0.1).abs() < 1e-12);
        runner.tick(0.016);
        assert_eq!(runner.game().seen, 1);
        assert_eq!(runner.game_events_len(), 1);
        assert_eq!(runner.ui_json(), r#"{"updates":2}"#);
    }

    #[test]
    fn load_bodies_reinitializes() {
        let mut runner = GameRunner::new(Probe::default(), 1);
        runner.init();
        assert!(runner.load_bodies("[]"));
        assert_eq!(runner.game().inits, 2);
    }

    #[test]
    fn rejected_bodies_keep_state() {
        let probe = Probe {
            reject: true,
            ..Default::default()
        };
        let mut runner = GameRunner::new(probe, 1);
        runner.init();
        assert!(!runner.load_bodies("{"));
        assert_eq!(runner.game().inits, 1);
    }
}
