//! Body registry: the static, ordered table of celestial bodies.
//!
//! Insertion order is display and control order. The table is fixed once the
//! registry is built; nothing mutates a descriptor afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Index of a body in its registry (and in the matching state list).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

/// Immutable description of one body.
///
/// Serialized as `{name, radius, color, distance, speed, rotationSpeed, hasRings}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDescriptor {
    pub name: String,
    /// Visual and picking radius in world units.
    pub radius: f64,
    /// Color as `0xRRGGBB`.
    pub color: u32,
    /// Orbit radius around the origin. Zero only for the central body.
    pub distance: f64,
    /// Orbital angular speed in radians per second at multiplier 1.0.
    #[serde(rename = "speed")]
    pub base_angular_speed: f64,
    /// Self-rotation speed in radians per second.
    pub rotation_speed: f64,
    #[serde(default)]
    pub has_rings: bool,
}

impl BodyDescriptor {
    pub fn new(
        name: impl Into<String>,
        radius: f64,
        color: u32,
        distance: f64,
        base_angular_speed: f64,
        rotation_speed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            radius,
            color,
            distance,
            base_angular_speed,
            rotation_speed,
            has_rings: false,
        }
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    /// The central body sits at the origin and never orbits.
    pub fn is_central(&self) -> bool {
        self.distance == 0.0
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &'static str, reason: &'static str| ConfigError::InvalidField {
            name: self.name.clone(),
            field,
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be empty"));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(invalid("radius", "must be greater than zero"));
        }
        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(invalid("distance", "must be zero or positive"));
        }
        if !self.base_angular_speed.is_finite() || self.base_angular_speed < 0.0 {
            return Err(invalid("speed", "must be zero or positive"));
        }
        if !self.rotation_speed.is_finite() || self.rotation_speed < 0.0 {
            return Err(invalid("rotationSpeed", "must be zero or positive"));
        }
        if self.color > 0xFF_FF_FF {
            return Err(invalid("color", "must fit in 0xRRGGBB"));
        }
        Ok(())
    }
}

/// Ordered, validated collection of body descriptors.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRegistry {
    bodies: Vec<BodyDescriptor>,
}

impl BodyRegistry {
    /// Build a registry, validating every descriptor and name uniqueness.
    pub fn new(bodies: Vec<BodyDescriptor>) -> Result<Self, ConfigError> {
        if bodies.is_empty() {
            return Err(ConfigError::Empty);
        }
        let mut names = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            body.validate()?;
            if !names.insert(body.name.as_str()) {
                return Err(ConfigError::DuplicateName(body.name.clone()));
            }
        }
        Ok(Self { bodies })
    }

    /// Parse a registry from a JSON array of descriptors.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let bodies: Vec<BodyDescriptor> = serde_json::from_str(json).map_err(ConfigError::Json)?;
        Self::new(bodies)
    }

    pub fn get(&self, id: BodyId) -> Option<&BodyDescriptor> {
        self.bodies.get(id.0)
    }

    /// Look up a body by exact name.
    pub fn find(&self, name: &str) -> Option<BodyId> {
        self.bodies.iter().position(|b| b.name == name).map(BodyId)
    }

    /// Iterate in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &BodyDescriptor)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    pub fn descriptors(&self) -> &[BodyDescriptor] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun() -> BodyDescriptor {
        BodyDescriptor::new("Sun", 10.0, 0xffff00, 0.0, 0.0, 0.01)
    }

    fn earth() -> BodyDescriptor {
        BodyDescriptor::new("Earth", 2.7, 0x3498db, 40.0, 0.01, 0.02)
    }

    #[test]
    fn preserves_insertion_order() {
        let registry = BodyRegistry::new(vec![sun(), earth()]).unwrap();
        let names: Vec<_> = registry.iter().map(|(_, b)| b.name.as_str()).collect();
        assert_eq!(names, ["Sun", "Earth"]);
        assert_eq!(registry.find("Earth"), Some(BodyId(1)));
        assert_eq!(registry.find("Pluto"), None);
        assert!(registry.get(BodyId(0)).unwrap().is_central());
    }

    #[test]
    fn parses_json_table() {
        let json = r#"[
            { "name": "Sun", "radius": 10, "color": 16776960, "distance": 0, "speed": 0, "rotationSpeed": 0.01 },
            { "name": "Saturn", "radius": 5, "color": 15054921, "distance": 90, "speed": 0.0009,
              "rotationSpeed": 0.038, "hasRings": true }
        ]"#;
        let registry = BodyRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        let saturn = registry.get(BodyId(1)).unwrap();
        assert!(saturn.has_rings);
        assert_eq!(saturn.color, 0xe5b849);
        assert!((saturn.base_angular_speed - 0.0009).abs() < 1e-12);
        assert!(!registry.get(BodyId(0)).unwrap().has_rings);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BodyRegistry::from_json(r#"[{ "name": "Sun" }]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(BodyRegistry::new(Vec::new()), Err(ConfigError::Empty)));
    }

    #[test]
    fn rejects_out_of_domain_fields() {
        let mut flat = earth();
        flat.radius = 0.0;
        let err = BodyRegistry::new(vec![flat]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "radius", .. }));

        let mut inside_out = earth();
        inside_out.distance = -1.0;
        let err = BodyRegistry::new(vec![inside_out]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "distance", .. }));

        let mut backwards = earth();
        backwards.base_angular_speed = f64::NAN;
        let err = BodyRegistry::new(vec![backwards]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidField { field: "speed", .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = BodyRegistry::new(vec![earth(), earth()]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName(name) if name == "Earth"));
    }
}
