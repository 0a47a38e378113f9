//! Slider binding: raw slider text to a speed multiplier and its label.

use crate::api::error::ValidationError;
use crate::bodies::state::BodyState;

pub const SLIDER_MIN: f64 = 1.0;
pub const SLIDER_MAX: f64 = 4.0;
pub const SLIDER_STEP: f64 = 0.1;

/// Label shown before any slider input.
pub const INITIAL_LABEL: &str = "1x";

/// Parse slider text into a finite multiplier.
pub fn parse_multiplier(raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw.trim().parse().map_err(|_| ValidationError::Unparsable {
        raw: raw.to_string(),
    })?;
    if !value.is_finite() {
        return Err(ValidationError::NonFinite {
            raw: raw.to_string(),
        });
    }
    Ok(value)
}

/// One decimal followed by `x`: `2.347 → "2.3x"`.
///
/// Exact ties round away from zero (`1.25 → "1.3x"`), matching the host's
/// `toFixed(1)`. Only quarter fractions can be exact ties in binary.
pub fn speed_label(multiplier: f64) -> String {
    let quarters = multiplier * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let tenths = (multiplier.abs() * 10.0).ceil().copysign(multiplier);
        return format!("{:.1}x", tenths / 10.0);
    }
    format!("{:.1}x", multiplier)
}

/// Apply slider input to a body. On error the previous multiplier is kept.
///
/// Values outside `[SLIDER_MIN, SLIDER_MAX]` are accepted.
pub fn on_slider_change(state: &mut BodyState, raw: &str) -> Result<String, ValidationError> {
    let multiplier = parse_multiplier(raw)?;
    if !(SLIDER_MIN..=SLIDER_MAX).contains(&multiplier) {
        log::debug!("speed multiplier {} outside slider range", multiplier);
    }
    state.set_speed_multiplier(multiplier);
    Ok(speed_label(multiplier))
}
