/// Scene lights handed to the host renderer.
///
/// Lights are persistent: a game adds them at init and they stay until
/// cleared. The host reads the point lights as one packed buffer plus the
/// ambient term through separate accessors.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::components::mesh::MeshColor;

/// A 3D point light.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, range]`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Distance at which the light has faded out. 0 = no falloff.
    pub range: f32,
}

impl PointLight {
    pub const FLOATS: usize = 8;

    pub fn new(pos: Vec3, color: MeshColor, intensity: f32, range: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            range,
        }
    }
}

/// Active point lights plus a uniform ambient term.
///
/// Ambient defaults to white at full intensity, which leaves meshes unlit
/// when no point lights are present.
#[derive(Debug, Clone)]
pub struct LightState {
    lights: Vec<PointLight>,
    ambient: MeshColor,
    ambient_intensity: f32,
}

impl LightState {
    pub fn new() -> Self {
        Self {
            lights: Vec::new(),
            ambient: MeshColor::new(1.0, 1.0, 1.0),
            ambient_intensity: 1.0,
        }
    }

    pub fn add(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn clear(&mut self) {
        self.lights.clear();
    }

    pub fn count(&self) -> usize {
        self.lights.len()
    }

    pub fn set_ambient(&mut self, color: MeshColor, intensity: f32) {
        self.ambient = color;
        self.ambient_intensity = intensity;
    }

    /// `[r, g, b, intensity]`.
    pub fn ambient(&self) -> [f32; 4] {
        [self.ambient.r, self.ambient.g, self.ambient.b, self.ambient_intensity]
    }

    /// Pointer to the packed point lights for host reads.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_light_is_8_floats() {
        assert_eq!(std::mem::size_of::<PointLight>(), PointLight::FLOATS * 4);
    }

    #[test]
    fn point_light_packs_position_and_color() {
        let light = PointLight::new(Vec3::new(1.0, 2.0, 3.0), MeshColor::from_hex(0xff8000), 2.0, 200.0);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&light));
        assert_eq!(&floats[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(floats[3], 1.0);
        assert!((floats[4] - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(floats[5], 0.0);
        assert_eq!(&floats[6..], &[2.0, 200.0]);
    }

    #[test]
    fn ambient_defaults_to_unlit_white() {
        let state = LightState::new();
        assert_eq!(state.ambient(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(state.count(), 0);
    }

    #[test]
    fn add_and_clear() {
        let mut state = LightState::new();
        state.add(PointLight::new(Vec3::ZERO, MeshColor::default(), 1.0, 50.0));
        state.add(PointLight::new(Vec3::X, MeshColor::default(), 0.5, 0.0));
        assert_eq!(state.count(), 2);
        // SAFETY: two packed lights live behind the pointer.
        let floats = unsafe { std::slice::from_raw_parts(state.buffer_ptr(), 2 * PointLight::FLOATS) };
        assert_eq!(floats[PointLight::FLOATS], 1.0);
        assert_eq!(floats[PointLight::FLOATS + 6], 0.5);
        state.clear();
        assert_eq!(state.count(), 0);
    }
}
