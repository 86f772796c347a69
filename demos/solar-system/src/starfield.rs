use orrery_engine::Rng;

/// Per-tick rotation of the whole starfield about Y while running.
pub const STAR_SPIN_STEP: f32 = 0.0002;

/// Background point cloud. Positions are packed `x, y, z` floats so the host
/// can upload them as one vertex buffer.
#[derive(Debug, Clone, Default)]
pub struct Starfield {
    points: Vec<f32>,
    pub spin: f32,
}

impl Starfield {
    /// Scatter `count` points uniformly in a cube of half-size `extent`.
    pub fn generate(count: usize, extent: f32, rng: &mut Rng) -> Self {
        let mut points = Vec::with_capacity(count * 3);
        for _ in 0..count * 3 {
            points.push(rng.next_centered(extent));
        }
        Self { points, spin: 0.0 }
    }

    pub fn rotate(&mut self) {
        self.spin = (self.spin + STAR_SPIN_STEP) % std::f32::consts::TAU;
    }

    pub fn len(&self) -> usize {
        self.points.len() / 3
    }

    pub fn points(&self) -> &[f32] {
        &self.points
    }

    pub fn points_ptr(&self) -> *const f32 {
        self.points().as_ptr()
    }
}
