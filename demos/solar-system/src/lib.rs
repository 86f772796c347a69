use wasm_bindgen::prelude::*;
use orrery_engine::InputEvent;

mod bodies;
mod config;
mod controls;
mod framing;
mod game;
mod orbit;
mod picking;
mod sim;
mod starfield;
mod theme;
use bodies::BodyId;
use game::SolarSystem;

orrery_web::export_game!(SolarSystem, "solar-system");

// ── Body catalog ─────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn get_body_count() -> u32 {
    bodies::all_bodies().len() as u32
}

/// Name for a wire body id (0 = Sun, i + 1 = planet i). Empty if unknown.
#[wasm_bindgen]
pub fn get_body_name(wire_id: i32) -> String {
    BodyId::from_wire(wire_id as i64)
        .and_then(bodies::describe)
        .map(|(name, _)| name.to_string())
        .unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_body_description(wire_id: i32) -> String {
    BodyId::from_wire(wire_id as i64)
        .and_then(bodies::describe)
        .map(|(_, text)| text.to_string())
        .unwrap_or_default()
}

/// `#rrggbb` label color for planet `index`.
#[wasm_bindgen]
pub fn get_planet_color(index: u32) -> String {
    bodies::all_bodies()
        .get(index as usize)
        .map(|b| bodies::color_hex(b.color))
        .unwrap_or_default()
}

// ── Simulation state ─────────────────────────────────────────────────

#[wasm_bindgen]
pub fn get_speed_multipliers() -> Vec<f32> {
    with_runner(|r| r.game().speed_multipliers()).unwrap_or_default()
}

#[wasm_bindgen]
pub fn get_is_paused() -> bool {
    with_runner(|r| r.game().is_paused()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_is_dark_theme() -> bool {
    with_runner(|r| r.game().is_dark_theme()).unwrap_or(true)
}

#[wasm_bindgen]
pub fn get_background_color() -> u32 {
    with_runner(|r| r.game().background_color()).unwrap_or(0x000011)
}

/// Wire id of the body in the info panel, or -1.
#[wasm_bindgen]
pub fn get_selection() -> f32 {
    with_runner(|r| r.game().selection().map_or(BodyId::NONE_WIRE, BodyId::to_wire))
        .unwrap_or(BodyId::NONE_WIRE)
}

#[wasm_bindgen]
pub fn get_panel_collapsed() -> bool {
    with_runner(|r| r.game().panel_collapsed()).unwrap_or(false)
}

// ── Starfield ────────────────────────────────────────────────────────

#[wasm_bindgen]
pub fn get_stars_ptr() -> *const f32 {
    with_runner(|r| r.game().stars_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_star_count() -> u32 {
    with_runner(|r| r.game().star_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_stars_visible() -> bool {
    with_runner(|r| r.game().stars_visible()).unwrap_or(false)
}

#[wasm_bindgen]
pub fn get_star_spin() -> f32 {
    with_runner(|r| r.game().star_spin()).unwrap_or(0.0)
}
