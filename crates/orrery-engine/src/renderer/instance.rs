use bytemuck::{Pod, Zeroable};

/// Shape discriminant written into `MeshInstance::shape`.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_RING: f32 = 1.0;

/// Bits of `MeshInstance::flags`.
pub const FLAG_LIT: u32 = 1;
pub const FLAG_DOUBLE_SIDED: u32 = 1 << 1;

/// Per-instance mesh data read by the browser renderer.
/// 16 floats = 64 bytes per instance.
///
/// Spheres use `radius`; rings span `inner_radius..radius` in their local
/// XY plane before `rotation` is applied.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub radius: f32,
    /// World rotation as a quaternion (x, y, z, w).
    pub rotation: [f32; 4],
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub inner_radius: f32,
    pub shininess: f32,
    pub emissive: f32,
    pub shape: f32,
    pub flags: f32,
}

impl MeshInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of mesh instances rebuilt every frame.
pub struct InstanceBuffer {
    instances: Vec<MeshInstance>,
}

impl InstanceBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MeshInstance) {
        self.instances.push(instance);
    }

    pub fn as_slice(&self) -> &[MeshInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for InstanceBuffer {
    fn default() -> Self {
        Self::new()
    }
}
