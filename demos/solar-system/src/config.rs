use glam::Vec3;
use orrery_engine::EngineError;
use serde::{Deserialize, Serialize};

/// Host-tunable settings. Missing JSON fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub star_count: usize,
    /// Stars are scattered in `[-star_extent, star_extent]` on every axis.
    pub star_extent: f32,
    /// Margin added past the outermost orbit when framing.
    pub frame_buffer: f32,
    /// Viewports narrower than this (px) get `narrow_extra` more distance.
    pub narrow_threshold: f32,
    pub narrow_extra: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
    pub default_camera: [f32; 3],
    /// Fixed RNG seed. `None` keeps the host-provided seed.
    pub seed: Option<u64>,
}

pub const MAX_STARS: usize = 50_000;

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            star_count: 10_000,
            star_extent: 200.0,
            frame_buffer: 20.0,
            narrow_threshold: 768.0,
            narrow_extra: 30.0,
            min_camera_distance: 20.0,
            max_camera_distance: 200.0,
            zoom_in_factor: 0.8,
            zoom_out_factor: 1.2,
            default_camera: [0.0, 50.0, 100.0],
            seed: None,
        }
    }
}

impl OrreryConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidConfig(msg));

        if !(self.min_camera_distance > 0.0 && self.min_camera_distance < self.max_camera_distance) {
            return invalid(format!(
                "camera distance bounds [{}, {}] are not increasing and positive",
                self.min_camera_distance, self.max_camera_distance
            ));
        }
        if !(self.zoom_in_factor > 0.0 && self.zoom_in_factor < 1.0) {
            return invalid(format!("zoom_in_factor {} must lie in (0, 1)", self.zoom_in_factor));
        }
        if !(self.zoom_out_factor > 1.0 && self.zoom_out_factor.is_finite()) {
            return invalid(format!("zoom_out_factor {} must exceed 1", self.zoom_out_factor));
        }
        if self.star_count > MAX_STARS {
            return invalid(format!("star_count {} exceeds {}", self.star_count, MAX_STARS));
        }
        if !(self.star_extent > 0.0 && self.star_extent.is_finite()) {
            return invalid(format!("star_extent {} must be positive", self.star_extent));
        }
        if !(self.frame_buffer >= 0.0 && self.narrow_extra >= 0.0 && self.narrow_threshold >= 0.0) {
            return invalid("framing values must be non-negative".to_string());
        }
        let camera = self.default_camera_position();
        if !camera.is_finite() || camera.length_squared() == 0.0 {
            return invalid(format!("default_camera {:?} is not a usable position", self.default_camera));
        }
        Ok(())
    }

    pub fn default_camera_position(&self) -> Vec3 {
        Vec3::from_array(self.default_camera)
    }
}
