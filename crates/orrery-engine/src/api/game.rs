use crate::api::error::EngineError;
use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderBuffer;
use crate::systems::lighting::LightState;
use crate::systems::rng::Rng;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Largest elapsed time handed to a single update, in seconds (default: 0.1).
    pub max_frame_dt: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_frame_dt: 0.1,
            max_instances: 256,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply host-supplied JSON settings. Games without tunables ignore it.
    fn configure(&mut self, _json: &str) -> Result<(), EngineError> {
        Ok(())
    }

    /// Setup initial state and spawn entities for a viewport of the given size.
    fn init(&mut self, ctx: &mut EngineContext, viewport: (f32, f32)) -> Result<(), EngineError>;

    /// One frame. `dt` is the capped wall time since the previous frame.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);

    /// Optional read-only render pass for custom render commands.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub events: Vec<GameEvent>,
    /// Persistent scene lights; not cleared between frames.
    pub lights: LightState,
    pub rng: Rng,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    /// Create a context whose RNG starts from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            scene: Scene::new(),
            events: Vec::new(),
            lights: LightState::new(),
            rng: Rng::new(seed),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context for the post-update pass.
pub struct RenderContext<'a> {
    pub render_buffer: &'a mut RenderBuffer,
    pub camera: &'a mut CameraUniform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert!(b.0 > a.0);
    }

    #[test]
    fn clear_frame_data_drops_events_keeps_lights() {
        use crate::components::mesh::MeshColor;
        use crate::systems::lighting::PointLight;

        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent::new(1.0, 0.0, 0.0, 0.0));
        ctx.lights.add(PointLight::new(glam::Vec3::ZERO, MeshColor::default(), 1.0, 10.0));
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
        assert_eq!(ctx.lights.count(), 1);
    }

    #[test]
    fn default_config_caps_frame_time() {
        let config = GameConfig::default();
        assert!((config.max_frame_dt - 0.1).abs() < 1e-6);
    }
}
