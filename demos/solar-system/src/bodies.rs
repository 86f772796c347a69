/// Body catalog: the Sun plus eight planets on coplanar circular orbits.
///
/// Sizes and distances are display units, not astronomical ones. Speeds are
/// relative; `orbit::SPEED_SCALE` turns them into radians per second.

/// Immutable description of one orbiting body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub radius: f32,
    /// Orbital radius around the origin.
    pub distance: f32,
    pub base_speed: f32,
    pub color: u32,
    pub description: &'static str,
}

pub const PLANET_COUNT: usize = 8;

pub const PLANETS: [BodyDescriptor; PLANET_COUNT] = [
    BodyDescriptor {
        name: "Mercury",
        radius: 0.4,
        distance: 8.0,
        base_speed: 4.74,
        color: 0x8c7853,
        description: "The smallest planet and closest to the Sun.",
    },
    BodyDescriptor {
        name: "Venus",
        radius: 0.9,
        distance: 12.0,
        base_speed: 3.5,
        color: 0xffc649,
        description: "The hottest planet with a thick, toxic atmosphere.",
    },
    BodyDescriptor {
        name: "Earth",
        radius: 1.0,
        distance: 16.0,
        base_speed: 2.98,
        color: 0x6b93d6,
        description: "Our home planet, the only known planet with life.",
    },
    BodyDescriptor {
        name: "Mars",
        radius: 0.5,
        distance: 20.0,
        base_speed: 2.41,
        color: 0xc1440e,
        description: "The Red Planet, with the largest volcano in the solar system.",
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 2.5,
        distance: 28.0,
        base_speed: 1.31,
        color: 0xd8ca9d,
        description: "The largest planet, a gas giant with many moons.",
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 2.1,
        distance: 36.0,
        base_speed: 0.97,
        color: 0xfad5a5,
        description: "Famous for its beautiful ring system.",
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 1.6,
        distance: 44.0,
        base_speed: 0.68,
        color: 0x4fd0e7,
        description: "An ice giant that rotates on its side.",
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 1.5,
        distance: 52.0,
        base_speed: 0.54,
        color: 0x4b70dd,
        description: "The windiest planet in the solar system.",
    },
];

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f32 = 3.0;
pub const SUN_COLOR: u32 = 0xffff00;
pub const SUN_EMISSIVE: f32 = 1.0;
pub const SUN_DESCRIPTION: &str =
    "The star at the center of our solar system, providing light and heat to all planets.";

/// Translucent halo drawn around the Sun. Never pickable.
pub const SUN_GLOW_RADIUS: f32 = 4.0;
pub const SUN_GLOW_OPACITY: f32 = 0.1;

// ── Lighting ─────────────────────────────────────────────────────────

/// Point light at the Sun's centre.
pub const SUN_LIGHT_COLOR: u32 = 0xffffff;
pub const SUN_LIGHT_INTENSITY: f32 = 2.0;
pub const SUN_LIGHT_RANGE: f32 = 200.0;

pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 0.2;

// ── Orbit rings ──────────────────────────────────────────────────────

pub const RING_HALF_WIDTH: f32 = 0.2;
pub const RING_COLOR: u32 = 0x666666;
pub const RING_OPACITY: f32 = 0.4;

/// All orbiting bodies in catalog order.
pub fn all_bodies() -> &'static [BodyDescriptor] {
    &PLANETS
}

/// Largest orbital distance in the catalog.
pub fn max_distance(bodies: &[BodyDescriptor]) -> f32 {
    bodies.iter().map(|b| b.distance).fold(0.0, f32::max)
}

/// Identifies a pickable body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Planet(usize),
}

impl BodyId {
    /// Encoding used on the JS bridge: Sun = 0, planet i = i + 1.
    pub fn to_wire(self) -> f32 {
        match self {
            BodyId::Sun => 0.0,
            BodyId::Planet(i) => (i + 1) as f32,
        }
    }

    /// Wire value for "no body".
    pub const NONE_WIRE: f32 = -1.0;

    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(BodyId::Sun),
            v if v >= 1 && (v as usize) <= PLANET_COUNT => Some(BodyId::Planet(v as usize - 1)),
            _ => None,
        }
    }
}

/// Name and info-panel text for a body.
pub fn describe(id: BodyId) -> Option<(&'static str, &'static str)> {
    match id {
        BodyId::Sun => Some((SUN_NAME, SUN_DESCRIPTION)),
        BodyId::Planet(i) => PLANETS.get(i).map(|b| (b.name, b.description)),
    }
}

/// `#rrggbb` string for slider labels.
pub fn color_hex(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}
