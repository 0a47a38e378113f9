//! Pointer picking against body sphere proxies.

use glam::{Vec2, Vec3};

use crate::bodies::registry::{BodyId, BodyRegistry};
use crate::bodies::state::BodyState;
use crate::renderer::camera::PerspectiveCamera;

/// Half-line in world space. `dir` is always unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Ray-sphere intersection. Returns `(t_near, t_far)`, or `None` when the
/// line misses the sphere.
pub fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<(f32, f32)> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    Some((-b - sqrt_disc, -b + sqrt_disc))
}

/// Distance along the ray to the first visible surface point of a sphere.
/// A ray starting inside the sphere reports the exit point.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let (near, far) = ray_sphere_intersect(ray, center, radius)?;
    if near >= 0.0 {
        Some(near)
    } else if far >= 0.0 {
        Some(far)
    } else {
        None
    }
}

/// Nearest body under a ray. Equal distances resolve to the earlier body.
pub fn pick_ray(ray: &Ray, registry: &BodyRegistry, states: &[BodyState]) -> Option<BodyId> {
    let mut best: Option<(BodyId, f32)> = None;
    for ((id, body), state) in registry.iter().zip(states) {
        let center = state.position(body);
        let Some(t) = intersect_sphere(ray, center, body.radius as f32) else {
            continue;
        };
        if best.map_or(true, |(_, best_t)| t < best_t) {
            best = Some((id, t));
        }
    }
    best.map(|(id, _)| id)
}

/// Body under a pointer given in normalized device coordinates.
pub fn pick(
    pointer_ndc: Vec2,
    camera: &PerspectiveCamera,
    registry: &BodyRegistry,
    states: &[BodyState],
) -> Option<BodyId> {
    pick_ray(&camera.ray_from_ndc(pointer_ndc), registry, states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::registry::BodyDescriptor;

    fn registry() -> BodyRegistry {
        BodyRegistry::new(vec![
            BodyDescriptor::new("Sun", 10.0, 0xffff00, 0.0, 0.0, 0.001),
            BodyDescriptor::new("Earth", 3.0, 0x0000ff, 40.0, 0.01, 0.02),
            BodyDescriptor::new("Mars", 2.5, 0xff0000, 60.0, 0.008, 0.018),
        ])
        .unwrap()
    }

    fn states() -> Vec<BodyState> {
        // Earth on +X, Mars on +Z.
        vec![
            BodyState::at_angle(0.0),
            BodyState::at_angle(0.0),
            BodyState::at_angle(std::f64::consts::FRAC_PI_2),
        ]
    }

    #[test]
    fn sphere_hit_and_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = intersect_sphere(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);

        let away = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::Z);
        assert!(intersect_sphere(&away, Vec3::ZERO, 2.0).is_none());

        let offset = Ray::new(Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(intersect_sphere(&offset, Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = intersect_sphere(&ray, Vec3::ZERO, 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-5);
    }

    #[test]
    fn camera_looking_at_body_picks_it() {
        let reg = registry();
        let st = states();
        let earth = st[1].position(reg.get(BodyId(1)).unwrap());
        let mut cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0)
            .with_position(earth + Vec3::new(0.0, 20.0, 20.0));
        cam.look_at(earth);
        assert_eq!(pick(Vec2::ZERO, &cam, &reg, &st), Some(BodyId(1)));
    }

    #[test]
    fn ray_pointed_away_picks_nothing() {
        let reg = registry();
        let st = states();
        let mut cam = PerspectiveCamera::new(75.0, 1.0, 0.1, 1000.0)
            .with_position(Vec3::new(0.0, 50.0, 100.0));
        cam.look_at(Vec3::new(0.0, 100.0, 200.0));
        assert_eq!(pick(Vec2::ZERO, &cam, &reg, &st), None);
    }

    #[test]
    fn nearer_of_two_aligned_bodies_wins() {
        let reg = registry();
        let st = states();
        // Along -X from far out: passes Earth (x = 40) before the Sun (x = 0).
        let ray = Ray::new(Vec3::new(200.0, 0.0, 0.0), Vec3::NEG_X);
        assert_eq!(pick_ray(&ray, &reg, &st), Some(BodyId(1)));
        // From the other side the Sun comes first.
        let ray = Ray::new(Vec3::new(-200.0, 0.0, 0.0), Vec3::X);
        assert_eq!(pick_ray(&ray, &reg, &st), Some(BodyId(0)));
    }

    #[test]
    fn equal_distance_goes_to_first_in_order() {
        let reg = BodyRegistry::new(vec![
            BodyDescriptor::new("A", 2.0, 0xffffff, 10.0, 0.01, 0.0),
            BodyDescriptor::new("B", 2.0, 0xffffff, 10.0, 0.01, 0.0),
        ])
        .unwrap();
        let st = vec![BodyState::at_angle(0.0), BodyState::at_angle(0.0)];
        let ray = Ray::new(Vec3::new(10.0, 50.0, 0.0), Vec3::NEG_Y);
        assert_eq!(pick_ray(&ray, &reg, &st), Some(BodyId(0)));
    }
}
