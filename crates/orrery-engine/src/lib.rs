pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::error::EngineError;
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{EntityId, GameEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshShape, MeshColor};
pub use crate::core::ray::Ray;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use input::queue::{InputEvent, InputKind, InputQueue};
pub use bridge::protocol::ProtocolLayout;
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_render_buffer;
pub use systems::rng::Rng;
