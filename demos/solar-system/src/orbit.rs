/// Circular-orbit state per planet. Pure math over glam vectors, no engine state.

use glam::Vec3;
use orrery_engine::Rng;
use std::f32::consts::TAU;

use crate::bodies::BodyDescriptor;

/// Catalog speeds are multiplied by this to get radians per simulated second.
pub const SPEED_SCALE: f32 = 0.005;
/// Visual time scale applied to every angle advance.
pub const VISUAL_TIME_SCALE: f32 = 10.0;
/// Largest elapsed time one advance will integrate.
pub const MAX_STEP: f32 = 0.1;
/// Own-axis spin per frame at multiplier 1.
pub const SPIN_STEP: f32 = 0.02;

pub const MIN_MULTIPLIER: f32 = 0.0;
pub const MAX_MULTIPLIER: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    /// Radians in `[0, 2π)`.
    pub angle: f32,
    /// Scaled catalog speed (rad/s at multiplier 1).
    pub base_speed: f32,
    pub distance: f32,
    pub speed_multiplier: f32,
    pub current_speed: f32,
    /// Derived from `angle`; always on the XZ plane.
    pub position: Vec3,
    pub spin: f32,
}

impl OrbitState {
    pub fn new(body: &BodyDescriptor, angle: f32) -> Self {
        let base_speed = body.base_speed * SPEED_SCALE;
        let mut state = Self {
            angle: angle.rem_euclid(TAU),
            base_speed,
            distance: body.distance,
            speed_multiplier: 1.0,
            current_speed: base_speed,
            position: Vec3::ZERO,
            spin: 0.0,
        };
        state.update_position();
        state
    }

    /// Advance by one frame of `elapsed` seconds, capped at `MAX_STEP`.
    pub fn advance(&mut self, elapsed: f32) {
        let dt = if elapsed.is_finite() { elapsed.clamp(0.0, MAX_STEP) } else { 0.0 };
        self.advance_by(dt);
    }

    /// Advance by exactly `dt` seconds with no cap.
    pub fn advance_by(&mut self, dt: f32) {
        self.angle = (self.angle + self.current_speed * dt * VISUAL_TIME_SCALE).rem_euclid(TAU);
        self.update_position();
        self.spin = (self.spin + SPIN_STEP * self.speed_multiplier).rem_euclid(TAU);
    }

    /// Clamp `m` into `[0, 5]` and derive the current speed. NaN counts as 0.
    pub fn set_speed_multiplier(&mut self, m: f32) {
        let m = if m.is_nan() { MIN_MULTIPLIER } else { m.clamp(MIN_MULTIPLIER, MAX_MULTIPLIER) };
        self.speed_multiplier = m;
        self.current_speed = self.base_speed * m;
    }

    /// New starting angle, multiplier back to 1.
    pub fn reset(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
        self.set_speed_multiplier(1.0);
        self.update_position();
    }

    fn update_position(&mut self) {
        self.position = Vec3::new(
            self.angle.cos() * self.distance,
            0.0,
            self.angle.sin() * self.distance,
        );
    }
}

/// Orbit states for `bodies`, each starting at a random angle.
pub fn initial_states(bodies: &[BodyDescriptor], rng: &mut Rng) -> Vec<OrbitState> {
    bodies.iter().map(|b| OrbitState::new(b, rng.next_angle())).collect()
}

/// Randomize every angle and restore every multiplier to 1.
pub fn reset_all(states: &mut [OrbitState], rng: &mut Rng) {
    for state in states.iter_mut() {
        state.reset(rng.next_angle());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{all_bodies, PLANETS};

    const EARTH: usize = 2;

    fn earth() -> OrbitState {
        OrbitState::new(&PLANETS[EARTH], 0.0)
    }

    #[test]
    fn position_stays_on_orbit_circle() {
        let mut rng = Rng::new(7);
        let mut states = initial_states(all_bodies(), &mut rng);
        for tick in 0..500 {
            for state in states.iter_mut() {
                state.advance(0.016 + (tick % 7) as f32 * 0.02);
                let r2 = state.position.x.powi(2) + state.position.z.powi(2);
                let d2 = state.distance * state.distance;
                assert!((r2 - d2).abs() < d2 * 1e-4);
                assert_eq!(state.position.y, 0.0);
            }
        }
    }

    #[test]
    fn one_second_step_matches_formula() {
        let mut state = earth();
        let expected_speed = 2.98 * 0.005;
        assert!((state.current_speed - expected_speed).abs() < 1e-7);

        state.advance_by(1.0);
        let expected_angle = expected_speed * 1.0 * VISUAL_TIME_SCALE;
        assert!((state.angle - expected_angle).abs() < 1e-6);
        assert!((state.position.x - expected_angle.cos() * 16.0).abs() < 1e-4);
        assert!((state.position.z - expected_angle.sin() * 16.0).abs() < 1e-4);
    }

    #[test]
    fn advance_caps_elapsed_time() {
        let mut capped = earth();
        let mut reference = earth();
        capped.advance(5.0);
        reference.advance_by(MAX_STEP);
        assert!((capped.angle - reference.angle).abs() < 1e-7);
    }

    #[test]
    fn zero_multiplier_freezes_orbit() {
        let mut state = earth();
        state.set_speed_multiplier(0.0);
        let before = state.angle;
        state.advance(0.05);
        assert_eq!(state.angle, before);
        assert_eq!(state.spin, 0.0);
    }

    #[test]
    fn spin_scales_with_multiplier() {
        let mut state = earth();
        state.set_speed_multiplier(2.0);
        state.advance(0.016);
        assert!((state.spin - 0.04).abs() < 1e-6);
    }

    #[test]
    fn multiplier_clamps() {
        let mut state = earth();
        state.set_speed_multiplier(-1.0);
        assert_eq!(state.speed_multiplier, 0.0);
        assert_eq!(state.current_speed, 0.0);
        state.set_speed_multiplier(9.0);
        assert_eq!(state.speed_multiplier, 5.0);
        assert!((state.current_speed - state.base_speed * 5.0).abs() < 1e-7);
    }

    #[test]
    fn multiplier_nan_is_zero() {
        let mut state = earth();
        state.set_speed_multiplier(f32::NAN);
        assert_eq!(state.speed_multiplier, 0.0);
        assert_eq!(state.current_speed, 0.0);
    }

    #[test]
    fn multiplier_is_idempotent() {
        let mut once = earth();
        once.set_speed_multiplier(2.5);
        let mut twice = earth();
        twice.set_speed_multiplier(2.5);
        twice.set_speed_multiplier(2.5);
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut rng = Rng::new(99);
        let mut states = initial_states(all_bodies(), &mut rng);
        for (i, state) in states.iter_mut().enumerate() {
            state.set_speed_multiplier(i as f32 * 0.7);
            state.advance(0.1);
        }
        reset_all(&mut states, &mut rng);
        for state in &states {
            assert_eq!(state.speed_multiplier, 1.0);
            assert_eq!(state.current_speed, state.base_speed);
            assert!(state.angle >= 0.0 && state.angle < TAU);
        }
    }

    #[test]
    fn angle_wraps() {
        let mut state = OrbitState::new(&PLANETS[0], TAU - 0.001);
        state.set_speed_multiplier(5.0);
        state.advance(0.1);
        assert!(state.angle >= 0.0 && state.angle < TAU);
    }
}
