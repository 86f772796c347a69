use orrery_engine::{
    Game, GameConfig, EngineContext, EngineError, RenderContext,
    InputEvent, InputQueue, RenderBuffer, CameraUniform,
    FrameClock, ProtocolLayout, build_render_buffer,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    camera: CameraUniform,
    clock: FrameClock,
    config: GameConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self::with_seed(game, 42)
    }

    /// Build a runner whose engine RNG starts from `seed`.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            game,
            ctx: EngineContext::with_seed(seed),
            input: InputQueue::new(),
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            camera: CameraUniform::default(),
            clock: FrameClock::new(config.max_frame_dt),
            layout,
            config,
            initialized: false,
        }
    }

    /// Initialize the game against a surface of `width` × `height` pixels.
    /// On error the runner stays uninitialized and every later tick is a no-op.
    pub fn init(&mut self, width: f32, height: f32) -> Result<(), EngineError> {
        let usable = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if !usable {
            return Err(EngineError::SurfaceUnavailable { width, height });
        }

        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.clock = FrameClock::new(self.config.max_frame_dt);
        self.game.init(&mut self.ctx, (width, height))?;
        self.initialized = true;
        self.rebuild_frame_output();
        Ok(())
    }

    /// Forward host JSON settings to the game.
    pub fn load_config(&mut self, json: &str) -> Result<(), EngineError> {
        self.game.configure(json)
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: sample the clock, update the game, rebuild render output.
    pub fn tick(&mut self, now_ms: f64) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();

        // Sampled every frame, paused or not.
        let dt = self.clock.sample(now_ms);
        self.game.update(&mut self.ctx, &self.input, dt);

        self.input.drain();

        self.rebuild_frame_output();
    }

    fn rebuild_frame_output(&mut self) {
        build_render_buffer(
            self.ctx.scene.iter(),
            &mut self.render_buffer,
            self.config.max_instances,
        );

        {
            let mut render_ctx = RenderContext {
                render_buffer: &mut self.render_buffer,
                camera: &mut self.camera,
            };
            self.game.render(&mut render_ctx);
        }

        if self.ctx.events.len() > self.config.max_events {
            log::warn!(
                "dropping {} game events over capacity",
                self.ctx.events.len() - self.config.max_events
            );
            self.ctx.events.truncate(self.config.max_events);
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    // ---- Pointer accessors for host reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn translucent_split(&self) -> u32 {
        self.render_buffer.translucent_split
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Lighting accessors ----

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    /// `[r, g, b, intensity]`.
    pub fn ambient_light(&self) -> [f32; 4] {
        self.ctx.lights.ambient()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
