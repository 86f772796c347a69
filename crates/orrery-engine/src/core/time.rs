/// Frame clock fed with host timestamps (milliseconds, e.g. from
/// `requestAnimationFrame`). Turns them into capped per-frame deltas in seconds.
///
/// The clock is sampled every frame, including frames where the game ignores
/// the delta, so no backlog builds up while the simulation is paused.
pub struct FrameClock {
    /// Largest delta ever returned, in seconds.
    max_dt: f32,
    /// Timestamp of the previous sample.
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt,
            last_ms: None,
        }
    }

    /// Record a timestamp and return the seconds since the previous one,
    /// capped to `max_dt`. The first sample (and the first after `reset`) is 0.
    pub fn sample(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        // Clocks can step backwards across tab restores.
        if !dt.is_finite() || dt < 0.0 {
            return 0.0;
        }
        dt.min(self.max_dt)
    }

    /// Forget the previous timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    /// The delta cap in seconds.
    pub fn max_dt(&self) -> f32 {
        self.max_dt
    }
}
