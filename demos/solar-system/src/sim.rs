/// Simulation state for one orrery: orbits, camera, loop state, theme and
/// selection. Every mutation goes through a method here, called either from
/// the frame tick or from a control handler between ticks.

use glam::Vec3;
use orrery_engine::{Camera3D, Rng};

use crate::bodies::{all_bodies, BodyDescriptor, BodyId};
use crate::config::OrreryConfig;
use crate::framing;
use crate::orbit::{self, OrbitState};
use crate::starfield::Starfield;
use crate::theme::Theme;

/// Sun spin per running tick, in radians.
pub const SUN_SPIN_STEP: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

pub struct SimulationState {
    pub bodies: &'static [BodyDescriptor],
    pub orbits: Vec<OrbitState>,
    pub camera: Camera3D,
    pub loop_state: LoopState,
    pub theme: Theme,
    pub sun_spin: f32,
    pub starfield: Starfield,
    /// Body shown in the info panel.
    pub selection: Option<BodyId>,
    /// Body under the pointer on the last move.
    pub hovered: Option<BodyId>,
    pub panel_collapsed: bool,
    pub viewport: (f32, f32),
    pub config: OrreryConfig,
    rng: Rng,
}

impl SimulationState {
    pub fn new(config: OrreryConfig, viewport: (f32, f32), seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let bodies = all_bodies();
        let orbits = orbit::initial_states(bodies, &mut rng);
        let starfield = Starfield::generate(config.star_count, config.star_extent, &mut rng);

        let mut sim = Self {
            bodies,
            orbits,
            camera: Camera3D::new(config.default_camera_position(), 1.0),
            loop_state: LoopState::Running,
            theme: Theme::default(),
            sun_spin: 0.0,
            starfield,
            selection: None,
            hovered: None,
            panel_collapsed: false,
            viewport,
            config,
            rng,
        };
        sim.resize(viewport.0, viewport.1);
        sim
    }

    pub fn is_paused(&self) -> bool {
        self.loop_state == LoopState::Paused
    }

    /// One frame. Does nothing while paused.
    pub fn step(&mut self, elapsed: f32) {
        if self.is_paused() {
            return;
        }
        for orbit in self.orbits.iter_mut() {
            orbit.advance(elapsed);
        }
        self.sun_spin = (self.sun_spin + SUN_SPIN_STEP) % std::f32::consts::TAU;
        self.starfield.rotate();
    }

    pub fn toggle_pause(&mut self) {
        self.loop_state = match self.loop_state {
            LoopState::Running => LoopState::Paused,
            LoopState::Paused => LoopState::Running,
        };
    }

    /// Random angles, multipliers back to 1, running, info panel hidden.
    pub fn reset(&mut self) {
        orbit::reset_all(&mut self.orbits, &mut self.rng);
        self.loop_state = LoopState::Running;
        self.selection = None;
        log::info!("simulation reset");
    }

    /// Returns false for an index outside the catalog.
    pub fn set_speed_multiplier(&mut self, index: usize, value: f32) -> bool {
        match self.orbits.get_mut(index) {
            Some(orbit) => {
                orbit.set_speed_multiplier(value);
                true
            }
            None => false,
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_panel(&mut self) {
        self.panel_collapsed = !self.panel_collapsed;
    }

    /// New viewport size: update the projection and reframe every orbit.
    /// Degenerate sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if !(width > 0.0 && height > 0.0) {
            return;
        }
        self.viewport = (width, height);
        self.camera.set_viewport(width, height);
        let narrow = framing::is_narrow(width, &self.config);
        let position = framing::frame_all(self.bodies, narrow, &self.config);
        self.camera.look_at(position, Vec3::ZERO);
        log::debug!("camera framed at distance {:.1}", self.camera.distance());
    }

    pub fn zoom_in(&mut self) {
        framing::zoom_camera(&mut self.camera, self.config.zoom_in_factor, &self.config);
    }

    pub fn zoom_out(&mut self) {
        framing::zoom_camera(&mut self.camera, self.config.zoom_out_factor, &self.config);
    }

    pub fn reset_camera(&mut self) {
        framing::reset_camera(&mut self.camera, &self.config);
    }

    /// Swap in new tunables. Stars are regenerated only if their shape changed.
    pub fn apply_config(&mut self, config: OrreryConfig) {
        let stars_changed = config.star_count != self.config.star_count
            || config.star_extent != self.config.star_extent;
        if let Some(seed) = config.seed {
            self.rng = Rng::new(seed);
        }
        self.config = config;
        if stars_changed {
            self.starfield =
                Starfield::generate(self.config.star_count, self.config.star_extent, &mut self.rng);
        }
        let (width, height) = self.viewport;
        self.resize(width, height);
    }

    pub fn speed_multipliers(&self) -> Vec<f32> {
        self.orbits.iter().map(|o| o.speed_multiplier).collect()
    }
}
