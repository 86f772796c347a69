use glam::{Vec2, Vec3};
use orrery_engine::Camera3D;

use crate::bodies::{BodyDescriptor, BodyId, SUN_RADIUS};
use crate::orbit::OrbitState;

/// A sphere that can be hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub id: BodyId,
    pub center: Vec3,
    pub radius: f32,
}

/// The Sun plus every planet at its current position. Decorations are not included.
pub fn pickable_bodies(bodies: &[BodyDescriptor], orbits: &[OrbitState]) -> Vec<PickTarget> {
    let mut targets = Vec::with_capacity(bodies.len() + 1);
    targets.push(PickTarget { id: BodyId::Sun, center: Vec3::ZERO, radius: SUN_RADIUS });
    targets.extend(bodies.iter().zip(orbits).enumerate().map(|(i, (body, orbit))| PickTarget {
        id: BodyId::Planet(i),
        center: orbit.position,
        radius: body.radius,
    }));
    targets
}

/// Nearest body under `ndc`, if any.
pub fn pick(ndc: Vec2, camera: &Camera3D, targets: &[PickTarget]) -> Option<BodyId> {
    let ray = camera.ray_from_ndc(ndc);
    targets
        .iter()
        .filter_map(|t| ray.intersect_sphere(t.center, t.radius).map(|hit| (t.id, hit)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Pick from a viewport pixel coordinate.
pub fn pick_pixel(
    x: f32,
    y: f32,
    viewport: (f32, f32),
    camera: &Camera3D,
    targets: &[PickTarget],
) -> Option<BodyId> {
    if viewport.0 <= 0.0 || viewport.1 <= 0.0 {
        return None;
    }
    pick(Camera3D::pixel_to_ndc(x, y, viewport.0, viewport.1), camera, targets)
}
