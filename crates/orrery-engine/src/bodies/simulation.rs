//! The per-frame simulation step and the pause state machine.

use super::registry::BodyRegistry;
use super::state::BodyState;

/// Pause state machine. `Running` is initial; one user action flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Running,
    Paused,
}

impl PlayState {
    /// Flip between running and paused. Returns the new state.
    pub fn toggle(&mut self) -> PlayState {
        *self = match self {
            PlayState::Running => PlayState::Paused,
            PlayState::Paused => PlayState::Running,
        };
        *self
    }

    pub fn is_paused(self) -> bool {
        self == PlayState::Paused
    }
}

/// Advance every body by `delta_seconds`.
///
/// While paused this is a no-op. Otherwise orbiting bodies move by
/// `effective_speed * dt` and every body spins by `rotation_speed * dt`.
/// `states` must be the list created from `registry`.
pub fn advance(registry: &BodyRegistry, states: &mut [BodyState], delta_seconds: f64, paused: bool) {
    if paused {
        return;
    }
    debug_assert_eq!(registry.len(), states.len());

    for ((_, body), state) in registry.iter().zip(states.iter_mut()) {
        if !body.is_central() {
            state.angle += state.effective_speed(body) * delta_seconds;
        }
        state.spin += body.rotation_speed * delta_seconds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::registry::BodyDescriptor;

    fn registry() -> BodyRegistry {
        BodyRegistry::new(vec![
            BodyDescriptor::new("Sun", 10.0, 0xffff00, 0.0, 0.0, 0.01),
            BodyDescriptor::new("Earth", 2.7, 0x3498db, 40.0, 0.01, 0.02),
            BodyDescriptor::new("Jupiter", 6.0, 0xf1c40f, 70.0, 0.002, 0.04),
        ])
        .unwrap()
    }

    fn states() -> Vec<BodyState> {
        vec![
            BodyState::at_angle(0.0),
            BodyState::at_angle(1.25),
            BodyState::at_angle(4.5),
        ]
    }

    fn bits(states: &[BodyState]) -> Vec<(u64, u64, u64)> {
        states
            .iter()
            .map(|s| (s.angle.to_bits(), s.spin.to_bits(), s.speed_multiplier().to_bits()))
            .collect()
    }

    #[test]
    fn toggle_flips_between_two_states() {
        let mut play = PlayState::default();
        assert_eq!(play, PlayState::Running);
        assert_eq!(play.toggle(), PlayState::Paused);
        assert!(play.is_paused());
        assert_eq!(play.toggle(), PlayState::Running);
        assert!(!play.is_paused());
    }

    #[test]
    fn unpaused_step_adds_effective_speed() {
        let registry = registry();
        let mut states = states();
        states[2].set_speed_multiplier(2.5);
        let before = states.clone();

        advance(&registry, &mut states, 0.5, false);

        assert!((states[1].angle - (before[1].angle + 0.01 * 0.5)).abs() < 1e-12);
        assert!((states[2].angle - (before[2].angle + 0.002 * 2.5 * 0.5)).abs() < 1e-12);
        assert!((states[1].spin - 0.02 * 0.5).abs() < 1e-12);
    }

    #[test]
    fn central_body_never_orbits() {
        let registry = registry();
        let mut states = states();
        states[0].set_speed_multiplier(4.0);
        for dt in [0.016, 1.0, 100.0, 0.0, 3.5] {
            advance(&registry, &mut states, dt, false);
            assert_eq!(states[0].angle, 0.0);
        }
        // It still spins.
        assert!(states[0].spin > 0.0);
    }

    #[test]
    fn paused_step_is_bit_identical() {
        let registry = registry();
        let mut states = states();
        let before = bits(&states);
        advance(&registry, &mut states, 100.0, true);
        assert_eq!(bits(&states), before);
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let registry = registry();
        let mut states = states();
        let before = bits(&states);
        advance(&registry, &mut states, 0.0, false);
        assert_eq!(bits(&states), before);
    }

    #[test]
    fn single_body_scenario() {
        let registry = BodyRegistry::new(vec![BodyDescriptor::new(
            "Earth", 2.7, 0x3498db, 40.0, 0.01, 0.02,
        )])
        .unwrap();
        let mut states = vec![BodyState::at_angle(0.3)];

        advance(&registry, &mut states, 1.0, false);
        assert!((states[0].angle - 0.31).abs() < 1e-12);

        states[0].set_speed_multiplier(2.0);
        advance(&registry, &mut states, 1.0, false);
        assert!((states[0].angle - 0.33).abs() < 1e-12);
    }

    #[test]
    fn pause_then_resume_scenario() {
        let registry = registry();
        let mut states = states();
        let mut play = PlayState::Running;

        play.toggle();
        let start = states[1].angle;
        advance(&registry, &mut states, 100.0, play.is_paused());
        assert_eq!(states[1].angle, start);

        play.toggle();
        advance(&registry, &mut states, 1.0, play.is_paused());
        assert!((states[1].angle - (start + 0.01)).abs() < 1e-12);
    }
}
