use glam::{Quat, Vec3};

use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Parent chains longer than this are treated as cycles and cut.
const MAX_DEPTH: usize = 16;

/// Simple entity storage using a flat Vec.
/// Designed for small entity counts (a sun, planets, rings).
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(32),
        }
    }

    /// Add an entity to the scene.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    /// Resolve an entity's world position and rotation through its parents.
    pub fn world_transform(&self, entity: &Entity) -> (Vec3, Quat) {
        let mut pos = entity.pos;
        let mut rot = entity.local_rotation();
        let mut parent = entity.parent;
        let mut depth = 0;

        while let Some(parent_id) = parent {
            let Some(p) = self.get(parent_id) else { break };
            depth += 1;
            if depth > MAX_DEPTH {
                log::warn!("scene: parent chain of {:?} exceeds {} levels", entity.id, MAX_DEPTH);
                break;
            }
            let parent_rot = p.local_rotation();
            pos = p.pos + parent_rot * pos;
            rot = parent_rot * rot;
            parent = p.parent;
        }
        (pos, rot)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = EntityId(1);
        scene.spawn(Entity::new(id).with_pos(Vec3::new(10.0, 0.0, 20.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec3::new(10.0, 0.0, 20.0));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("Sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("Earth"));
        assert_eq!(scene.find_by_tag("Earth").unwrap().id, EntityId(2));
    }

    #[test]
    fn child_follows_parent_position_and_spin() {
        let mut scene = Scene::new();
        let planet = EntityId(1);
        let ring = EntityId(2);
        scene.spawn(
            Entity::new(planet)
                .with_pos(Vec3::new(90.0, 0.0, 0.0))
                .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)),
        );
        scene.spawn(
            Entity::new(ring)
                .with_parent(planet)
                .with_pos(Vec3::new(0.0, 0.0, 1.0)),
        );

        let (pos, rot) = scene.world_transform(scene.get(ring).unwrap());
        // Offset +Z rotated a quarter turn about Y lands on +X.
        assert!((pos - Vec3::new(91.0, 0.0, 0.0)).length() < 1e-5);
        assert!(rot.angle_between(Quat::from_rotation_y(FRAC_PI_2)) < 1e-5);
    }

    #[test]
    fn parent_cycle_terminates() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_parent(EntityId(2)));
        scene.spawn(Entity::new(EntityId(2)).with_parent(EntityId(1)));
        let _ = scene.world_transform(scene.get(EntityId(1)).unwrap());
    }
}
