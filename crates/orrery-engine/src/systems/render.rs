use crate::components::mesh::{Material, MeshShape};
use crate::core::scene::Scene;
use crate::renderer::instance::{
    InstanceBuffer, MeshInstance, FLAG_DOUBLE_SIDED, FLAG_LIT, SHAPE_RING, SHAPE_SPHERE,
};

/// Build the mesh instance buffer from every active entity with a mesh.
/// Child transforms are resolved to world space. At most `max_instances`
/// instances are written.
pub fn build_instance_buffer(scene: &Scene, buffer: &mut InstanceBuffer, max_instances: usize) {
    buffer.clear();

    for entity in scene.iter() {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        if buffer.instance_count() as usize >= max_instances {
            log::warn!("instance buffer full ({}), skipping remaining meshes", max_instances);
            break;
        }

        let (pos, rot) = scene.world_transform(entity);
        let (shape, inner_radius, radius) = match mesh.shape {
            MeshShape::Sphere { radius } => (SHAPE_SPHERE, 0.0, radius),
            MeshShape::Ring { inner, outer } => (SHAPE_RING, inner, outer),
        };
        let mut flags = 0;
        if mesh.material == Material::Phong {
            flags |= FLAG_LIT;
        }
        if mesh.double_sided {
            flags |= FLAG_DOUBLE_SIDED;
        }

        buffer.push(MeshInstance {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius,
            rotation: rot.to_array(),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            inner_radius,
            shininess: mesh.shininess,
            emissive: mesh.emissive,
            shape,
            flags: flags as f32,
        });
    }
}
