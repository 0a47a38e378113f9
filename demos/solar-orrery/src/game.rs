//! Solar orrery: nine bodies on circular orbits around a fixed sun.
//!
//! Pointer hover shows body info, per-planet sliders scale orbital speed,
//! pause/reset buttons control the animation and the camera.

use glam::{Vec2, Vec3};

use orrery_engine::systems::geometry;
use orrery_engine::{
    BodyDescriptor, BodyId, BodyRegistry, ConfigError, DirectionalLight, EngineContext,
    Entity, EntityId, EventChannel, EventRouter, Game, GameConfig, GameEvent, InputEvent,
    InputQueue, Material, MeshColor, MeshComponent, OrbitControls, PerspectiveCamera,
    SimContext, ValidationError,
};

use crate::bodies;
use crate::ui::{HoverInfo, UiState};

// ── Click targets from the host ──────────────────────────────────────

pub const CLICK_PAUSE: u32 = 0;
pub const CLICK_RESET: u32 = 1;

// ── Game event kinds to the host ─────────────────────────────────────

/// a = hovered body index or -1, b = its orbital distance.
pub const EVENT_HOVER: f32 = 1.0;
/// a = 1 paused, 0 running.
pub const EVENT_PLAY_STATE: f32 = 2.0;
/// a = body index, b = new multiplier. Sent once per applied slider change.
pub const EVENT_SPEED: f32 = 3.0;

fn home_camera(aspect: f32) -> PerspectiveCamera {
    let mut camera = PerspectiveCamera::new(bodies::CAMERA_FOV_DEG, aspect, bodies::CAMERA_NEAR, bodies::CAMERA_FAR)
        .with_position(Vec3::from(bodies::CAMERA_HOME));
    camera.look_at(Vec3::ZERO);
    camera
}

pub struct SolarOrrery {
    /// Body table used by the next `init`.
    table: Vec<BodyDescriptor>,
    sim: Option<SimContext>,
    controls: OrbitControls,
    router: EventRouter<SolarOrrery>,
    /// Scene entity per body, in registry order.
    body_ids: Vec<EntityId>,
    hovered: Option<BodyId>,
    ui: UiState,
}

impl SolarOrrery {
    pub fn new() -> Self {
        let router = EventRouter::<Self>::new()
            .on(EventChannel::PointerMove, Self::on_pointer_move)
            .on(EventChannel::PointerDown, Self::on_pointer_down)
            .on(EventChannel::PointerUp, Self::on_pointer_up)
            .on(EventChannel::Wheel, Self::on_wheel)
            .on(EventChannel::Input, Self::on_slider)
            .on(EventChannel::Click, Self::on_click)
            .on(EventChannel::Resize, Self::on_resize);

        Self {
            table: bodies::solar_system(),
            sim: None,
            controls: OrbitControls::new(&home_camera(1.0)).with_damping(bodies::CONTROLS_DAMPING),
            router,
            body_ids: Vec::new(),
            hovered: None,
            ui: UiState::default(),
        }
    }

    #[cfg(test)]
    pub fn sim(&self) -> Option<&SimContext> {
        self.sim.as_ref()
    }

    #[cfg(test)]
    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    #[cfg(test)]
    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    // ── Scene setup ────────────────────────────────────────────────

    fn spawn_starfield(ctx: &mut EngineContext) {
        let stars = geometry::starfield(&mut ctx.rng, bodies::STAR_COUNT, bodies::STAR_EXTENT);
        for star in stars {
            ctx.add_point(star, bodies::STAR_SIZE, MeshColor::WHITE);
        }
    }

    fn spawn_bodies(&mut self, ctx: &mut EngineContext, sim: &SimContext) {
        self.body_ids.clear();
        for ((_, body), state) in sim.registry().iter().zip(sim.states()) {
            let color = MeshColor::from_hex(body.color);
            let mut mesh = MeshComponent::sphere(body.radius as f32, color);
            if body.is_central() {
                mesh = mesh.with_emissive(bodies::SUN_EMISSIVE);
            }

            let id = ctx.next_id();
            ctx.spawn(
                Entity::new(id)
                    .with_tag(body.name.as_str())
                    .with_pos(state.position(body))
                    .with_rotation(Vec3::new(0.0, state.spin as f32, 0.0))
                    .with_mesh(mesh),
            );
            self.body_ids.push(id);

            if !body.is_central() {
                let path = geometry::orbit_path(body.distance as f32, bodies::ORBIT_SEGMENTS);
                ctx.add_line_strip(&path, MeshColor::from_hex(bodies::ORBIT_COLOR));
            }

            if body.has_rings {
                let r = body.radius as f32;
                let ring_id = ctx.next_id();
                ctx.spawn(
                    Entity::new(ring_id)
                        .with_tag(format!("{} rings", body.name))
                        .with_parent(id)
                        .with_rotation(Vec3::new(bodies::RING_TILT, 0.0, 0.0))
                        .with_mesh(
                            MeshComponent::ring(
                                r * bodies::RING_INNER_SCALE,
                                r * bodies::RING_OUTER_SCALE,
                                MeshColor::from_hex(bodies::RING_COLOR),
                            )
                            .with_material(Material::Basic)
                            .double_sided(),
                        ),
                );
            }
        }
    }

    /// Copy orbital positions and spins onto the body entities.
    fn sync_transforms(&self, ctx: &mut EngineContext) {
        let Some(sim) = &self.sim else { return };
        for (((_, body), state), &id) in sim.registry().iter().zip(sim.states()).zip(&self.body_ids) {
            if let Some(entity) = ctx.scene.get_mut(id) {
                entity.pos = state.position(body);
                entity.rotation.y = state.spin as f32;
            }
        }
    }

    // ── Speed control ──────────────────────────────────────────────

    /// Apply slider text to a body's multiplier and update its row.
    fn apply_speed(&mut self, id: BodyId, raw: &str) -> Result<f64, ValidationError> {
        let unknown = ValidationError::UnknownBody { index: id.0 };
        let row = self.ui.row_mut(id).ok_or_else(|| unknown.clone())?;
        let sim = self.sim.as_mut().ok_or(unknown)?;
        let label = sim.apply_slider(id, raw)?;
        let multiplier = sim.state(id).map_or(1.0, |s| s.speed_multiplier());
        row.value = multiplier;
        row.label = label;
        Ok(multiplier)
    }

    // ── Channel handlers ───────────────────────────────────────────

    fn on_pointer_move(game: &mut Self, ctx: &mut EngineContext, event: &InputEvent) {
        let &InputEvent::PointerMove { x, y } = event else { return };
        let ndc = Vec2::new(x, y);
        game.controls.drag_to(ndc, ctx.camera.aspect);

        let Some(sim) = &game.sim else { return };
        game.hovered = sim.pick(ndc, &ctx.camera);
        game.ui.hover = game
            .hovered
            .and_then(|id| sim.registry().get(id))
            .map(HoverInfo::for_body);
    }

    fn on_pointer_down(game: &mut Self, _ctx: &mut EngineContext, event: &InputEvent) {
        if let &InputEvent::PointerDown { x, y } = event {
            game.controls.begin_drag(Vec2::new(x, y));
        }
    }

    fn on_pointer_up(game: &mut Self, _ctx: &mut EngineContext, _event: &InputEvent) {
        game.controls.end_drag();
    }

    /// Scrolling down (positive delta) dollies out. Zero and non-finite deltas
    /// carry no vertical scroll and leave the camera alone.
    fn on_wheel(game: &mut Self, _ctx: &mut EngineContext, event: &InputEvent) {
        let &InputEvent::Wheel { delta } = event else { return };
        if !delta.is_finite() {
            return;
        }
        if delta > 0.0 {
            game.controls.zoom(-1.0);
        } else if delta < 0.0 {
            game.controls.zoom(1.0);
        }
    }

    fn on_slider(game: &mut Self, ctx: &mut EngineContext, event: &InputEvent) {
        let InputEvent::Input { control, value } = event else { return };
        let id = BodyId(*control as usize);
        match game.apply_speed(id, value) {
            Ok(multiplier) => {
                ctx.emit_event(GameEvent::new(EVENT_SPEED, id.0 as f32, multiplier as f32, 0.0));
            }
            Err(e) => log::warn!("speed slider {}: {}", control, e),
        }
    }

    fn on_click(game: &mut Self, ctx: &mut EngineContext, event: &InputEvent) {
        let &InputEvent::Click { target } = event else { return };
        match target {
            CLICK_PAUSE => {
                if let Some(sim) = game.sim.as_mut() {
                    let state = sim.toggle_pause();
                    game.ui.set_play_state(state);
                }
            }
            CLICK_RESET => {
                ctx.camera.position = Vec3::from(bodies::CAMERA_HOME);
                game.controls.reset(&mut ctx.camera);
            }
            other => log::warn!("unknown click target {}", other),
        }
    }

    fn on_resize(_game: &mut Self, ctx: &mut EngineContext, event: &InputEvent) {
        if let &InputEvent::Resize { width, height } = event {
            ctx.camera.resize(width, height);
        }
    }

    // ── Events ─────────────────────────────────────────────────────

    fn emit_frame_events(&self, ctx: &mut EngineContext) {
        let Some(sim) = &self.sim else { return };

        let (index, distance) = self
            .hovered
            .and_then(|id| sim.registry().get(id).map(|b| (id.0 as f32, b.distance as f32)))
            .unwrap_or((-1.0, 0.0));
        ctx.emit_event(GameEvent::new(EVENT_HOVER, index, distance, 0.0));

        let paused = if sim.is_paused() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent::new(EVENT_PLAY_STATE, paused, 0.0, 0.0));
    }
}

impl Default for SolarOrrery {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarOrrery {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 32,
            max_line_vertices: 2048,
            max_points: bodies::STAR_COUNT,
            max_events: 64,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), ConfigError> {
        let registry = BodyRegistry::from_json(json)?;
        log::info!("loaded {} bodies", registry.len());
        self.table = registry.descriptors().to_vec();
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.camera = home_camera(ctx.camera.aspect);
        self.controls = OrbitControls::new(&ctx.camera).with_damping(bodies::CONTROLS_DAMPING);

        ctx.lights.set_ambient(MeshColor::from_hex(bodies::AMBIENT_COLOR));
        ctx.lights.add(DirectionalLight::new(
            Vec3::from(bodies::SUN_LIGHT_POS),
            MeshColor::WHITE,
            bodies::SUN_LIGHT_INTENSITY,
        ));

        Self::spawn_starfield(ctx);

        let registry = match BodyRegistry::new(self.table.clone()) {
            Ok(registry) => registry,
            Err(e) => {
                log::error!("body table rejected: {}", e);
                self.sim = None;
                return;
            }
        };
        let sim = SimContext::new(registry, &mut ctx.rng);
        self.spawn_bodies(ctx, &sim);
        self.ui = UiState::new(sim.registry());
        self.hovered = None;
        self.sim = Some(sim);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f64) {
        let router = self.router;
        for event in input.iter() {
            router.dispatch(self, ctx, event);
        }

        if let Some(sim) = self.sim.as_mut() {
            sim.advance(dt);
        }
        self.sync_transforms(ctx);
        self.controls.update(&mut ctx.camera);

        self.emit_frame_events(ctx);
    }

    fn ui_snapshot(&self) -> serde_json::Value {
        match serde_json::to_value(&self.ui) {
            Ok(value) => value,
            Err(e) => {
                log::error!("ui snapshot failed: {}", e);
                serde_json::Value::Null
            }
        }
    }
}
