//! Simulation context: the registry, its body states and the pause flag,
//! owned by the game and passed to the pure `advance` / `pick` functions.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::api::error::ValidationError;
use crate::bodies::registry::{BodyDescriptor, BodyId, BodyRegistry};
use crate::bodies::simulation::{self, PlayState};
use crate::bodies::state::{self, BodyState};
use crate::interaction::{picking, speed};
use crate::renderer::camera::PerspectiveCamera;

pub struct SimContext {
    registry: BodyRegistry,
    states: Vec<BodyState>,
    play: PlayState,
}

impl SimContext {
    /// Build states for every body in `registry`, drawing start angles from `rng`.
    pub fn new<R: Rng + ?Sized>(registry: BodyRegistry, rng: &mut R) -> Self {
        let states = state::initialize(&registry, rng);
        Self {
            registry,
            states,
            play: PlayState::Running,
        }
    }

    /// Advance all bodies unless paused.
    pub fn advance(&mut self, delta_seconds: f64) {
        simulation::advance(&self.registry, &mut self.states, delta_seconds, self.play.is_paused());
    }

    pub fn toggle_pause(&mut self) -> PlayState {
        let next = self.play.toggle();
        log::info!("simulation {:?}", next);
        next
    }

    pub fn play_state(&self) -> PlayState {
        self.play
    }

    pub fn is_paused(&self) -> bool {
        self.play.is_paused()
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn states(&self) -> &[BodyState] {
        &self.states
    }

    pub fn state(&self, id: BodyId) -> Option<&BodyState> {
        self.states.get(id.0)
    }

    pub fn body(&self, id: BodyId) -> Option<(&BodyDescriptor, &BodyState)> {
        Some((self.registry.get(id)?, self.states.get(id.0)?))
    }

    /// Current world position of a body.
    pub fn body_position(&self, id: BodyId) -> Option<Vec3> {
        self.body(id).map(|(desc, state)| state.position(desc))
    }

    pub fn set_speed_multiplier(&mut self, id: BodyId, multiplier: f64) -> Result<(), ValidationError> {
        let state = self
            .states
            .get_mut(id.0)
            .ok_or(ValidationError::UnknownBody { index: id.0 })?;
        state.set_speed_multiplier(multiplier);
        Ok(())
    }

    /// Apply raw slider text to a body. Returns the new label.
    pub fn apply_slider(&mut self, id: BodyId, raw: &str) -> Result<String, ValidationError> {
        let state = self
            .states
            .get_mut(id.0)
            .ok_or(ValidationError::UnknownBody { index: id.0 })?;
        speed::on_slider_change(state, raw)
    }

    /// Body under the pointer, if any.
    pub fn pick(&self, pointer_ndc: Vec2, camera: &PerspectiveCamera) -> Option<BodyId> {
        picking::pick(pointer_ndc, camera, &self.registry, &self.states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn context() -> SimContext {
        let registry = BodyRegistry::new(vec![
            BodyDescriptor::new("Sun", 10.0, 0xffff00, 0.0, 0.0, 0.01),
            BodyDescriptor::new("Earth", 2.7, 0x3498db, 40.0, 0.01, 0.02),
        ])
        .unwrap();
        SimContext::new(registry, &mut ChaCha8Rng::seed_from_u64(7))
    }

    #[test]
    fn advance_uses_multiplier() {
        let mut ctx = context();
        let start = ctx.state(BodyId(1)).unwrap().angle;
        ctx.advance(1.0);
        assert!((ctx.state(BodyId(1)).unwrap().angle - start - 0.01).abs() < 1e-12);

        ctx.set_speed_multiplier(BodyId(1), 2.0).unwrap();
        let before = ctx.state(BodyId(1)).unwrap().angle;
        ctx.advance(1.0);
        assert!((ctx.state(BodyId(1)).unwrap().angle - before - 0.02).abs() < 1e-12);
    }

    #[test]
    fn paused_context_does_not_move() {
        let mut ctx = context();
        assert_eq!(ctx.toggle_pause(), PlayState::Paused);
        let before = ctx.states().to_vec();
        ctx.advance(100.0);
        assert_eq!(ctx.states(), &before[..]);
        assert_eq!(ctx.toggle_pause(), PlayState::Running);
    }

    #[test]
    fn unknown_body_is_rejected() {
        let mut ctx = context();
        assert_eq!(
            ctx.apply_slider(BodyId(9), "2"),
            Err(ValidationError::UnknownBody { index: 9 })
        );
        assert!(ctx.set_speed_multiplier(BodyId(2), 2.0).is_err());
    }

    #[test]
    fn slider_updates_state() {
        let mut ctx = context();
        assert_eq!(ctx.apply_slider(BodyId(1), "3.27").unwrap(), "3.3x");
        assert_eq!(ctx.state(BodyId(1)).unwrap().speed_multiplier(), 3.27);
    }

    #[test]
    fn central_body_sits_at_origin() {
        let ctx = context();
        assert_eq!(ctx.body_position(BodyId(0)), Some(Vec3::ZERO));
        let earth = ctx.body_position(BodyId(1)).unwrap();
        assert!((earth.length() - 40.0).abs() < 1e-3);
    }
}
