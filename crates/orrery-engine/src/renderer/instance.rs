use bytemuck::{Pod, Zeroable};

/// Per-instance render data read by the host renderer straight out of WASM memory.
/// Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Sphere radius, or outer radius for rings.
    pub radius: f32,
    /// Spin about the local Y axis, in radians.
    pub spin: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub emissive: f32,
    pub opacity: f32,
    /// 0 = sphere, 1 = ring (see `MeshShape`).
    pub shape: f32,
    /// Inner radius for rings, 0 for spheres.
    pub inner_radius: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Render buffer containing all mesh instances for one frame.
pub struct RenderBuffer {
    /// Opaque instances first, translucent instances from `translucent_split` on.
    pub instances: Vec<RenderInstance>,
    /// Index of the first translucent instance.
    pub translucent_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            translucent_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.translucent_split = 0;
    }

    pub fn set_translucent_split(&mut self, split: u32) {
        self.translucent_split = split;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to instance data for host reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 12);
    }

    #[test]
    fn clear_resets_split() {
        let mut buf = RenderBuffer::new();
        buf.instances.push(RenderInstance::default());
        buf.set_translucent_split(1);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
        assert_eq!(buf.translucent_split, 0);
    }
}
