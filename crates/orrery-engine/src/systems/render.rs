use crate::components::entity::Entity;
use crate::components::mesh::MeshShape;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Opaque meshes first, translucent meshes after `translucent_split`,
/// each group in entity order. At most `max_instances` are written.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
    max_instances: usize,
) {
    buffer.clear();

    let mut opaque: Vec<RenderInstance> = Vec::new();
    let mut translucent: Vec<RenderInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let (shape, radius, inner_radius) = match mesh.shape {
            MeshShape::Sphere { radius } => (MeshShape::SPHERE_ID, radius, 0.0),
            MeshShape::Ring { inner, outer } => (MeshShape::RING_ID, outer, inner),
        };

        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            radius,
            spin: entity.spin,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
            opacity: mesh.opacity,
            shape,
            inner_radius,
        };

        if mesh.is_translucent() {
            translucent.push(instance);
        } else {
            opaque.push(instance);
        }
    }

    let total = opaque.len() + translucent.len();
    if total > max_instances {
        log::debug!("render buffer full: dropping {} of {} instances", total - max_instances, total);
    }

    let opaque_len = opaque.len().min(max_instances);
    buffer.instances.extend(opaque.into_iter().take(opaque_len));
    buffer.set_translucent_split(opaque_len as u32);
    let room = max_instances - opaque_len;
    buffer.instances.extend(translucent.into_iter().take(room));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{MeshColor, MeshComponent};
    use glam::Vec3;

    #[test]
    fn build_buffer_groups_by_opacity() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_mesh(MeshComponent::ring(7.8, 8.2, MeshColor::default()).with_opacity(0.4)),
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(8.0, 0.0, 0.0))
                .with_mesh(MeshComponent::sphere(0.4, MeshColor::default())),
            Entity::new(EntityId(3))
                .with_mesh(MeshComponent::sphere(3.0, MeshColor::default())),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer, 64);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.translucent_split, 2);
        assert_eq!(buffer.instances[0].x, 8.0);
        assert_eq!(buffer.instances[2].shape, MeshShape::RING_ID);
        assert_eq!(buffer.instances[2].inner_radius, 7.8);
    }

    #[test]
    fn inactive_and_meshless_entities_are_skipped() {
        let mut hidden = Entity::new(EntityId(1))
            .with_mesh(MeshComponent::default());
        hidden.active = false;
        let entities = vec![hidden, Entity::new(EntityId(2))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer, 64);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn capacity_is_respected() {
        let entities: Vec<Entity> = (0..10)
            .map(|i| Entity::new(EntityId(i)).with_mesh(MeshComponent::default()))
            .collect();
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer, 4);
        assert_eq!(buffer.instance_count(), 4);
    }
}
