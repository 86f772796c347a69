/// Camera framing: fit every orbit in view, zoom along the view axis, reset.
///
/// The camera always looks at the origin, so its distance is the length of
/// its position vector.

use glam::Vec3;
use orrery_engine::Camera3D;

use crate::bodies::{max_distance, BodyDescriptor};
use crate::config::OrreryConfig;

pub fn is_narrow(viewport_width: f32, config: &OrreryConfig) -> bool {
    viewport_width < config.narrow_threshold
}

/// Camera position that keeps the outermost orbit in view.
/// Sits at `(0, d/2, d)` with `d = max orbit + buffer (+ narrow extra)`.
pub fn frame_all(bodies: &[BodyDescriptor], narrow: bool, config: &OrreryConfig) -> Vec3 {
    let mut distance = max_distance(bodies) + config.frame_buffer;
    if narrow {
        distance += config.narrow_extra;
    }
    Vec3::new(0.0, 0.5 * distance, distance)
}

/// Scale `position` by `factor`, then pull it back inside `[min, max]`.
pub fn zoom(position: Vec3, factor: f32, min: f32, max: f32) -> Vec3 {
    let scaled = position * factor;
    let length = scaled.length();
    if length == 0.0 || !length.is_finite() {
        return position;
    }
    if length > max {
        scaled * (max / length)
    } else if length < min {
        scaled * (min / length)
    } else {
        scaled
    }
}

pub fn zoom_camera(camera: &mut Camera3D, factor: f32, config: &OrreryConfig) {
    let position = zoom(
        camera.position,
        factor,
        config.min_camera_distance,
        config.max_camera_distance,
    );
    camera.look_at(position, Vec3::ZERO);
}

/// Fixed default view, independent of the framed distance.
pub fn reset_camera(camera: &mut Camera3D, config: &OrreryConfig) {
    camera.look_at(config.default_camera_position(), Vec3::ZERO);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::all_bodies;

    fn at_distance(d: f32) -> Vec3 {
        Vec3::new(0.0, 0.5, 1.0).normalize() * d
    }

    #[test]
    fn frame_all_wide() {
        let position = frame_all(all_bodies(), false, &OrreryConfig::default());
        assert_eq!(position, Vec3::new(0.0, 36.0, 72.0));
    }

    #[test]
    fn frame_all_narrow_adds_extra() {
        let position = frame_all(all_bodies(), true, &OrreryConfig::default());
        assert_eq!(position, Vec3::new(0.0, 51.0, 102.0));
    }

    #[test]
    fn frame_all_is_idempotent() {
        let config = OrreryConfig::default();
        assert_eq!(
            frame_all(all_bodies(), false, &config),
            frame_all(all_bodies(), false, &config)
        );
    }

    #[test]
    fn narrow_threshold() {
        let config = OrreryConfig::default();
        assert!(is_narrow(767.0, &config));
        assert!(!is_narrow(768.0, &config));
    }

    #[test]
    fn zoom_out_within_bounds() {
        let zoomed = zoom(at_distance(150.0), 1.2, 20.0, 200.0);
        assert!((zoomed.length() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_out_clamps_to_max() {
        let zoomed = zoom(at_distance(180.0), 1.2, 20.0, 200.0);
        assert!((zoomed.length() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_in_clamps_to_min() {
        let zoomed = zoom(at_distance(25.0), 0.1, 20.0, 200.0);
        assert!((zoomed.length() - 20.0).abs() < 1e-3);
    }

    #[test]
    fn zoom_keeps_direction() {
        let start = at_distance(100.0);
        let zoomed = zoom(start, 0.8, 20.0, 200.0);
        assert!(zoomed.normalize().abs_diff_eq(start.normalize(), 1e-6));
    }

    #[test]
    fn zoom_camera_and_reset() {
        let config = OrreryConfig::default();
        let mut camera = Camera3D::new(Vec3::new(0.0, 36.0, 72.0), 1.5);
        zoom_camera(&mut camera, config.zoom_in_factor, &config);
        let expected = Vec3::new(0.0, 36.0, 72.0).length() * 0.8;
        assert!((camera.distance() - expected).abs() < 1e-3);
        reset_camera(&mut camera, &config);
        assert_eq!(camera.position, Vec3::new(0.0, 50.0, 100.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }
}
