//! Overlay state published to the host as JSON.

use serde::Serialize;

use orrery_engine::interaction::speed::{INITIAL_LABEL, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use orrery_engine::{BodyDescriptor, BodyId, BodyRegistry, PlayState};

/// The hover info panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverInfo {
    pub name: String,
    pub description: String,
}

impl HoverInfo {
    pub fn for_body(body: &BodyDescriptor) -> Self {
        Self {
            name: body.name.clone(),
            description: format!("{} is {} units from the Sun.", body.name, body.distance),
        }
    }
}

/// One speed slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedRow {
    /// Registry index of the body; also the slider's control id.
    pub body: usize,
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub pause_label: &'static str,
    /// `None` hides the info panel.
    pub hover: Option<HoverInfo>,
    pub speed_rows: Vec<SpeedRow>,
}

impl UiState {
    /// One slider per orbiting body, in registry order.
    pub fn new(registry: &BodyRegistry) -> Self {
        let speed_rows = registry
            .iter()
            .filter(|(_, body)| !body.is_central())
            .map(|(id, body)| SpeedRow {
                body: id.0,
                name: body.name.clone(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: 1.0,
                label: INITIAL_LABEL.to_string(),
            })
            .collect();

        Self {
            pause_label: pause_label(PlayState::Running),
            hover: None,
            speed_rows,
        }
    }

    pub fn row_mut(&mut self, body: BodyId) -> Option<&mut SpeedRow> {
        self.speed_rows.iter_mut().find(|row| row.body == body.0)
    }

    pub fn set_play_state(&mut self, state: PlayState) {
        self.pause_label = pause_label(state);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            pause_label: pause_label(PlayState::Running),
            hover: None,
            speed_rows: Vec::new(),
        }
    }
}

/// Text of the pause button for a state.
pub fn pause_label(state: PlayState) -> &'static str {
    match state {
        PlayState::Running => "Pause",
        PlayState::Paused => "Resume",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::solar_system;

    #[test]
    fn rows_skip_the_sun() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        let ui = UiState::new(&registry);
        assert_eq!(ui.speed_rows.len(), 8);
        assert_eq!(ui.speed_rows[0].name, "Mercury");
        assert_eq!(ui.speed_rows[0].body, 1);
        assert!(ui.speed_rows.iter().all(|r| r.label == "1x" && r.value == 1.0));
    }

    #[test]
    fn hover_text_uses_distance() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        let earth = registry.get(BodyId(3)).unwrap();
        let info = HoverInfo::for_body(earth);
        assert_eq!(info.name, "Earth");
        assert_eq!(info.description, "Earth is 40 units from the Sun.");
    }

    #[test]
    fn pause_label_follows_state() {
        let mut ui = UiState::default();
        assert_eq!(ui.pause_label, "Pause");
        ui.set_play_state(PlayState::Paused);
        assert_eq!(ui.pause_label, "Resume");
    }

    #[test]
    fn serializes_camel_case() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        let json = serde_json::to_value(UiState::new(&registry)).unwrap();
        assert_eq!(json["pauseLabel"], "Pause");
        assert!(json["hover"].is_null());
        assert_eq!(json["speedRows"][0]["label"], "1x");
        assert_eq!(json["speedRows"][0]["max"], 4.0);
    }
}
