//! The solar system table and scene constants.

use orrery_engine::BodyDescriptor;

/// Index of the Sun in [`solar_system`].
#[cfg(test)]
pub const SUN: usize = 0;
#[cfg(test)]
pub const SATURN: usize = 6;
#[cfg(test)]
pub const BODY_COUNT: usize = 9;

/// Nine bodies in display order. Speeds are radians per second.
pub fn solar_system() -> Vec<BodyDescriptor> {
    vec![
        BodyDescriptor::new("Sun", 10.0, 0xffff00, 0.0, 0.0, 0.01),
        BodyDescriptor::new("Mercury", 1.5, 0xb5b5b5, 20.0, 0.04, 0.004),
        BodyDescriptor::new("Venus", 2.5, 0xe6c229, 30.0, 0.015, 0.002),
        BodyDescriptor::new("Earth", 2.7, 0x3498db, 40.0, 0.01, 0.02),
        BodyDescriptor::new("Mars", 2.2, 0xe67e22, 50.0, 0.008, 0.018),
        BodyDescriptor::new("Jupiter", 6.0, 0xf1c40f, 70.0, 0.002, 0.04),
        BodyDescriptor::new("Saturn", 5.0, 0xe5b849, 90.0, 0.0009, 0.038).with_rings(),
        BodyDescriptor::new("Uranus", 4.0, 0x5dade2, 110.0, 0.0004, 0.03),
        BodyDescriptor::new("Neptune", 3.8, 0x2980b9, 130.0, 0.0001, 0.032),
    ]
}

// ── Camera ───────────────────────────────────────────────────────────

pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_HOME: [f32; 3] = [0.0, 50.0, 100.0];
pub const CONTROLS_DAMPING: f32 = 0.05;

// ── Lights ───────────────────────────────────────────────────────────

pub const AMBIENT_COLOR: u32 = 0x333333;
pub const SUN_LIGHT_POS: [f32; 3] = [5.0, 3.0, 5.0];
pub const SUN_LIGHT_INTENSITY: f32 = 1.0;
pub const SUN_EMISSIVE: f32 = 1.0;

// ── Starfield ────────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 5000;
/// Stars fill the cube [-STAR_EXTENT, STAR_EXTENT]³.
pub const STAR_EXTENT: f32 = 1000.0;
pub const STAR_SIZE: f32 = 0.1;

// ── Orbits and rings ─────────────────────────────────────────────────

pub const ORBIT_SEGMENTS: u32 = 64;
pub const ORBIT_COLOR: u32 = 0x555555;

pub const RING_INNER_SCALE: f32 = 1.5;
pub const RING_OUTER_SCALE: f32 = 2.0;
pub const RING_COLOR: u32 = 0xc2b280;
/// Ring tilt about the planet's local X axis.
pub const RING_TILT: f32 = std::f32::consts::FRAC_PI_3;

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_engine::BodyRegistry;

    #[test]
    fn table_is_a_valid_registry() {
        let registry = BodyRegistry::new(solar_system()).unwrap();
        assert_eq!(registry.len(), BODY_COUNT);
    }

    #[test]
    fn only_the_sun_is_central() {
        let bodies = solar_system();
        assert!(bodies[SUN].is_central());
        assert!(bodies.iter().skip(1).all(|b| !b.is_central()));
    }

    #[test]
    fn only_saturn_has_rings() {
        let bodies = solar_system();
        let ringed: Vec<_> = bodies.iter().filter(|b| b.has_rings).map(|b| b.name.as_str()).collect();
        assert_eq!(ringed, ["Saturn"]);
        assert!(bodies[SATURN].has_rings);
    }
}
