/// Solar System: animated 3D orrery with per-planet speed sliders,
/// click-to-inspect picking and viewport-aware camera framing.
///
/// The sun, its glow, the planets and their orbit rings live in the engine
/// scene. The starfield is a separate point buffer the host reads directly.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{self, BodyId};
use crate::config::OrreryConfig;
use crate::controls::{ControlTable, Reaction};
use crate::sim::SimulationState;

// ── Game event kinds to the host ─────────────────────────────────────

const EVENT_STATE: f32 = 1.0;
const EVENT_SELECTION: f32 = 2.0;
const EVENT_CURSOR: f32 = 3.0;
const EVENT_SLIDER_SYNC: f32 = 4.0;
const EVENT_CAMERA: f32 = 5.0;

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// One frame's reactions folded in arrival order, so each outbound kind is
/// sent at most once however much input arrived.
#[derive(Debug, Default, PartialEq)]
struct FrameReactions {
    resync_sliders: bool,
    /// `Some(None)` hides the info panel.
    selection: Option<Option<BodyId>>,
    cursor: Option<bool>,
}

impl FrameReactions {
    fn fold(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Nothing => {}
            Reaction::ShowInfo(id) => self.selection = Some(Some(id)),
            Reaction::HideInfo => self.selection = Some(None),
            Reaction::Cursor(pointer) => self.cursor = Some(pointer),
            Reaction::SlidersReset => {
                self.resync_sliders = true;
                self.selection = Some(None);
            }
        }
    }

    fn emit(self, ctx: &mut EngineContext, sim: &SimulationState) {
        if self.resync_sliders {
            for (i, orbit) in sim.orbits.iter().enumerate() {
                ctx.emit_event(GameEvent::new(EVENT_SLIDER_SYNC, i as f32, orbit.speed_multiplier, 0.0));
            }
        }
        match self.selection {
            Some(Some(id)) => ctx.emit_event(GameEvent::new(EVENT_SELECTION, id.to_wire(), 1.0, 0.0)),
            Some(None) => ctx.emit_event(GameEvent::new(EVENT_SELECTION, BodyId::NONE_WIRE, 0.0, 0.0)),
            None => {}
        }
        if let Some(pointer) = self.cursor {
            ctx.emit_event(GameEvent::new(EVENT_CURSOR, flag(pointer), 0.0, 0.0));
        }
    }
}

pub struct SolarSystem {
    config: OrreryConfig,
    sim: Option<SimulationState>,
    controls: ControlTable,

    // Entity IDs
    sun_id: Option<EntityId>,
    planet_ids: Vec<EntityId>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            config: OrreryConfig::default(),
            sim: None,
            controls: ControlTable::new(),
            sun_id: None,
            planet_ids: Vec::new(),
        }
    }

    pub fn sim(&self) -> Option<&SimulationState> {
        self.sim.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.sim().is_some_and(|s| s.is_paused())
    }

    pub fn is_dark_theme(&self) -> bool {
        self.sim().map_or(true, |s| s.theme.is_dark())
    }

    pub fn background_color(&self) -> u32 {
        self.sim().map_or(0x000011, |s| s.theme.background())
    }

    pub fn stars_visible(&self) -> bool {
        self.sim().is_some_and(|s| s.theme.stars_visible())
    }

    pub fn panel_collapsed(&self) -> bool {
        self.sim().is_some_and(|s| s.panel_collapsed)
    }

    pub fn selection(&self) -> Option<BodyId> {
        self.sim().and_then(|s| s.selection)
    }

    pub fn speed_multipliers(&self) -> Vec<f32> {
        self.sim().map(|s| s.speed_multipliers()).unwrap_or_default()
    }

    pub fn star_spin(&self) -> f32 {
        self.sim().map_or(0.0, |s| s.starfield.spin)
    }

    pub fn stars_ptr(&self) -> *const f32 {
        self.sim().map_or(std::ptr::null(), |s| s.starfield.points_ptr())
    }

    pub fn star_count(&self) -> u32 {
        self.sim().map_or(0, |s| s.starfield.len() as u32)
    }

    // ── Scene construction ─────────────────────────────────────────

    fn spawn_scene(&mut self, ctx: &mut EngineContext, sim: &SimulationState) {
        let sun_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(sun_id)
                .with_tag(bodies::SUN_NAME)
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_RADIUS, MeshColor::from_hex(bodies::SUN_COLOR))
                        .with_emissive(bodies::SUN_EMISSIVE),
                ),
        );
        self.sun_id = Some(sun_id);

        let glow_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(glow_id)
                .with_tag("sun-glow")
                .with_mesh(
                    MeshComponent::sphere(bodies::SUN_GLOW_RADIUS, MeshColor::from_hex(bodies::SUN_COLOR))
                        .with_emissive(bodies::SUN_EMISSIVE)
                        .with_opacity(bodies::SUN_GLOW_OPACITY),
                ),
        );

        ctx.lights.clear();
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            MeshColor::from_hex(bodies::SUN_LIGHT_COLOR),
            bodies::SUN_LIGHT_INTENSITY,
            bodies::SUN_LIGHT_RANGE,
        ));
        ctx.lights.set_ambient(MeshColor::from_hex(bodies::AMBIENT_COLOR), bodies::AMBIENT_INTENSITY);

        self.planet_ids.clear();
        for (body, orbit) in sim.bodies.iter().zip(&sim.orbits) {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(body.name)
                    .with_pos(orbit.position)
                    .with_mesh(MeshComponent::sphere(body.radius, MeshColor::from_hex(body.color))),
            );
            self.planet_ids.push(id);

            let ring_id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(ring_id)
                    .with_tag(format!("{}-orbit", body.name))
                    .with_mesh(
                        MeshComponent::ring(
                            body.distance - bodies::RING_HALF_WIDTH,
                            body.distance + bodies::RING_HALF_WIDTH,
                            MeshColor::from_hex(bodies::RING_COLOR),
                        )
                        .with_opacity(bodies::RING_OPACITY),
                    ),
            );
        }
    }

    /// Copy simulation positions and spins onto the scene entities.
    fn sync_scene(&self, ctx: &mut EngineContext) {
        let Some(sim) = self.sim.as_ref() else { return };

        if let Some(entity) = self.sun_id.and_then(|id| ctx.scene.get_mut(id)) {
            entity.spin = sim.sun_spin;
        }
        for (id, orbit) in self.planet_ids.iter().zip(&sim.orbits) {
            if let Some(entity) = ctx.scene.get_mut(*id) {
                entity.pos = orbit.position;
                entity.spin = orbit.spin;
            }
        }
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_instances: 64,
            max_events: 64,
            ..GameConfig::default()
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        let config = OrreryConfig::from_json(json)?;
        if let Some(sim) = self.sim.as_mut() {
            sim.apply_config(config.clone());
        }
        self.config = config;
        log::info!("configuration applied");
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext, viewport: (f32, f32)) -> Result<(), EngineError> {
        let seed = match self.config.seed {
            Some(seed) => seed,
            None => ((ctx.rng.next_int(u32::MAX) as u64) << 32) | ctx.rng.next_int(u32::MAX) as u64,
        };

        let sim = SimulationState::new(self.config.clone(), viewport, seed);
        self.spawn_scene(ctx, &sim);
        log::info!(
            "scene built: {} planets, {} stars, camera at distance {:.1}",
            sim.orbits.len(),
            sim.starfield.len(),
            sim.camera.distance()
        );
        self.sim = Some(sim);
        self.sync_scene(ctx);
        Ok(())
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32) {
        let Some(sim) = self.sim.as_mut() else { return };

        // ── Handle input ─────────────────────────────────────────────
        let mut reactions = FrameReactions::default();
        for event in input.iter() {
            match self.controls.dispatch(sim, event) {
                Ok(reaction) => reactions.fold(reaction),
                Err(e) => log::warn!("skipping control message: {}", e),
            }
        }

        // ── Advance ──────────────────────────────────────────────────
        sim.step(dt);

        // ── Emit game events ─────────────────────────────────────────
        ctx.emit_event(GameEvent::new(
            EVENT_STATE,
            flag(sim.is_paused()),
            flag(sim.theme.is_dark()),
            flag(sim.panel_collapsed),
        ));
        ctx.emit_event(GameEvent::new(EVENT_CAMERA, sim.camera.distance(), 0.0, 0.0));
        reactions.emit(ctx, sim);

        self.sync_scene(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        if let Some(sim) = self.sim.as_ref() {
            *ctx.camera = sim.camera.uniform();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_web::GameRunner;

    fn custom(kind: u32, a: f32, b: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b, c: 0.0 }
    }

    fn runner() -> GameRunner<SolarSystem> {
        let mut game = SolarSystem::new();
        game.configure(r#"{ "star_count": 200, "seed": 9 }"#).unwrap();
        let mut runner = GameRunner::with_seed(game, 1);
        runner.init(1280.0, 720.0).unwrap();
        runner
    }

    fn events(runner: &GameRunner<SolarSystem>) -> Vec<GameEvent> {
        let len = runner.game_events_len() as usize;
        let ptr = runner.game_events_ptr() as *const GameEvent;
        // SAFETY: the runner owns `len` contiguous events behind `ptr`.
        unsafe { std::slice::from_raw_parts(ptr, len) }.to_vec()
    }

    #[test]
    fn init_builds_bodies_glow_and_rings() {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx, (1280.0, 720.0)).unwrap();
        // sun + glow + 8 planets + 8 rings
        assert_eq!(ctx.scene.len(), 18);
        assert!(ctx.scene.find_by_tag("Earth").is_some());
        assert!(ctx.scene.find_by_tag("Earth-orbit").is_some());
        assert!(ctx.scene.find_by_tag("sun-glow").is_some());
        assert_eq!(game.star_count(), 10_000);
    }

    #[test]
    fn render_buffer_puts_glow_and_rings_last() {
        let runner = runner();
        assert_eq!(runner.instance_count(), 18);
        assert_eq!(runner.translucent_split(), 9);
    }

    #[test]
    fn entities_follow_orbits() {
        let mut game = SolarSystem::new();
        let mut ctx = EngineContext::new();
        game.init(&mut ctx, (1280.0, 720.0)).unwrap();
        for _ in 0..3 {
            game.update(&mut ctx, &InputQueue::new(), 0.05);
        }

        let sim = game.sim().unwrap();
        for (id, orbit) in game.planet_ids.iter().zip(&sim.orbits) {
            let entity = ctx.scene.get(*id).unwrap();
            assert_eq!(entity.pos, orbit.position);
            assert_eq!(entity.spin, orbit.spin);
        }
        let sun = ctx.scene.get(game.sun_id.unwrap()).unwrap();
        assert_eq!(sun.spin, sim.sun_spin);
        assert!(sun.spin > 0.0);
    }

    #[test]
    fn render_instances_carry_planet_positions() {
        let mut runner = runner();
        runner.tick(0.0);
        runner.tick(16.0);
        let count = runner.instance_count() as usize;
        let ptr = runner.instances_ptr() as *const RenderInstance;
        // SAFETY: the runner owns `count` contiguous instances behind `ptr`.
        let instances = unsafe { std::slice::from_raw_parts(ptr, count) };

        // Opaque pass is the Sun, then the planets in catalog order.
        let sim = runner.game().sim().unwrap();
        for (i, orbit) in sim.orbits.iter().enumerate() {
            let instance = &instances[i + 1];
            assert_eq!(Vec3::new(instance.x, instance.y, instance.z), orbit.position);
            assert_eq!(instance.spin, orbit.spin);
        }
        assert!((sim.orbits[2].position.length() - 16.0).abs() < 1e-3);
    }

    #[test]
    fn pause_does_not_build_a_backlog() {
        let mut runner = runner();
        runner.tick(0.0);
        runner.push_input(custom(crate::controls::CUSTOM_TOGGLE_PAUSE, 0.0, 0.0));
        runner.tick(16.0);
        let paused_angle = runner.game().sim().unwrap().orbits[0].angle;

        runner.tick(60_000.0);
        assert_eq!(runner.game().sim().unwrap().orbits[0].angle, paused_angle);
        assert!(runner.game().is_paused());

        runner.push_input(custom(crate::controls::CUSTOM_TOGGLE_PAUSE, 0.0, 0.0));
        runner.tick(60_016.0);

        let mercury = &runner.game().sim().unwrap().orbits[0];
        let expected = mercury.current_speed * 0.016 * crate::orbit::VISUAL_TIME_SCALE;
        let delta = (mercury.angle - paused_angle).rem_euclid(std::f32::consts::TAU);
        assert!((delta - expected).abs() < 1e-4);
    }

    #[test]
    fn state_and_camera_events_every_frame() {
        let mut runner = runner();
        runner.tick(0.0);
        let frame = events(&runner);
        assert_eq!(frame[0], GameEvent::new(EVENT_STATE, 0.0, 1.0, 0.0));
        assert_eq!(frame[1].kind, EVENT_CAMERA);
        assert!((frame[1].a - runner.game().sim().unwrap().camera.distance()).abs() < 1e-4);
    }

    #[test]
    fn reset_emits_slider_sync_and_hides_info() {
        let mut runner = runner();
        runner.push_input(custom(crate::controls::CUSTOM_SET_SPEED, 1.0, 3.0));
        runner.tick(0.0);
        assert_eq!(runner.game().speed_multipliers()[1], 3.0);

        runner.push_input(custom(crate::controls::CUSTOM_RESET, 0.0, 0.0));
        runner.tick(16.0);
        let frame = events(&runner);
        let syncs: Vec<&GameEvent> = frame.iter().filter(|e| e.kind == EVENT_SLIDER_SYNC).collect();
        assert_eq!(syncs.len(), 8);
        assert!(syncs.iter().all(|e| e.b == 1.0));
        assert!(frame.contains(&GameEvent::new(EVENT_SELECTION, -1.0, 0.0, 0.0)));
    }

    #[test]
    fn pointer_burst_keeps_state_and_slider_sync() {
        let mut runner = runner();
        runner.tick(0.0);
        for i in 0..70 {
            runner.push_input(InputEvent::PointerMove { x: i as f32 * 10.0, y: 5.0 });
        }
        runner.push_input(custom(crate::controls::CUSTOM_RESET, 0.0, 0.0));
        runner.push_input(InputEvent::TouchMove { x: 5.0, y: 5.0, touches: 1 });
        runner.tick(16.0);

        let frame = events(&runner);
        let count = |kind: f32| frame.iter().filter(|e| e.kind == kind).count();
        assert!(frame.len() <= runner.max_events() as usize);
        assert_eq!(frame[0].kind, EVENT_STATE);
        assert_eq!(frame[1].kind, EVENT_CAMERA);
        assert_eq!(count(EVENT_SLIDER_SYNC), 8);
        assert_eq!(count(EVENT_SELECTION), 1);
        assert_eq!(count(EVENT_CURSOR), 1);
        assert!(frame.contains(&GameEvent::new(EVENT_CURSOR, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn reactions_fold_in_arrival_order() {
        let mut reset_then_click = FrameReactions::default();
        reset_then_click.fold(Reaction::SlidersReset);
        reset_then_click.fold(Reaction::ShowInfo(BodyId::Sun));
        assert!(reset_then_click.resync_sliders);
        assert_eq!(reset_then_click.selection, Some(Some(BodyId::Sun)));

        let mut click_then_reset = FrameReactions::default();
        click_then_reset.fold(Reaction::ShowInfo(BodyId::Planet(3)));
        click_then_reset.fold(Reaction::Cursor(true));
        click_then_reset.fold(Reaction::Cursor(false));
        click_then_reset.fold(Reaction::SlidersReset);
        assert_eq!(click_then_reset.selection, Some(None));
        assert_eq!(click_then_reset.cursor, Some(false));

        let mut idle = FrameReactions::default();
        idle.fold(Reaction::Nothing);
        assert_eq!(idle, FrameReactions::default());
    }

    #[test]
    fn sun_light_and_dim_ambient() {
        let runner = runner();
        assert_eq!(runner.light_count(), 1);
        // SAFETY: one light lives behind the pointer.
        let light = unsafe { std::slice::from_raw_parts(runner.lights_ptr(), PointLight::FLOATS) };
        assert_eq!(light, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 2.0, 200.0]);
        let ambient = runner.ambient_light();
        assert!(ambient[..3].iter().all(|c| (c - 64.0 / 255.0).abs() < 1e-6));
        assert_eq!(ambient[3], 0.2);
    }

    #[test]
    fn theme_toggle_hides_stars() {
        let mut runner = runner();
        assert!(runner.game().stars_visible());
        runner.push_input(custom(crate::controls::CUSTOM_TOGGLE_THEME, 0.0, 0.0));
        runner.tick(0.0);
        let game = runner.game();
        assert!(!game.is_dark_theme());
        assert!(!game.stars_visible());
        assert_eq!(game.background_color(), 0x87ceeb);
    }

    #[test]
    fn unknown_control_is_skipped() {
        let mut runner = runner();
        runner.push_input(custom(99, 0.0, 0.0));
        runner.tick(0.0);
        assert!(!runner.game().is_paused());
        assert_eq!(runner.game_events_len(), 2);
    }

    #[test]
    fn click_center_selects_sun() {
        let mut runner = runner();
        runner.push_input(custom(crate::controls::CUSTOM_CAMERA_RESET, 0.0, 0.0));
        runner.tick(0.0);
        runner.push_input(InputEvent::PointerDown { x: 640.0, y: 360.0 });
        runner.tick(16.0);
        assert_eq!(runner.game().selection(), Some(BodyId::Sun));
        assert!(events(&runner).contains(&GameEvent::new(EVENT_SELECTION, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn bad_config_keeps_previous() {
        let mut runner = runner();
        assert!(runner.load_config(r#"{ "zoom_in_factor": 2.0 }"#).is_err());
        assert!(runner.load_config("not json").is_err());
        assert_eq!(runner.game().star_count(), 200);
    }

    #[test]
    fn camera_uniform_tracks_sim_camera() {
        let mut runner = runner();
        runner.tick(0.0);
        let eye = unsafe { std::slice::from_raw_parts(runner.camera_ptr(), CameraUniform::FLOATS) };
        assert_eq!(&eye[16..19], &[0.0, 36.0, 72.0]);
    }
}
