/// Inbound control table. Each host callback maps to a handler that calls
/// into `SimulationState` and reports what the host UI should do next.

use std::collections::HashMap;

use orrery_engine::{InputEvent, InputKind};
use thiserror::Error;

use crate::bodies::BodyId;
use crate::picking;
use crate::sim::SimulationState;

// ── Custom event kinds from the host UI ──────────────────────────────

pub const CUSTOM_SET_SPEED: u32 = 1;
pub const CUSTOM_TOGGLE_PAUSE: u32 = 2;
pub const CUSTOM_RESET: u32 = 3;
pub const CUSTOM_TOGGLE_THEME: u32 = 4;
pub const CUSTOM_ZOOM_IN: u32 = 5;
pub const CUSTOM_ZOOM_OUT: u32 = 6;
pub const CUSTOM_CAMERA_RESET: u32 = 7;
pub const CUSTOM_TOGGLE_PANEL: u32 = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ControlError {
    #[error("no control registered for custom event kind {0}")]
    UnknownKind(u32),
    #[error("no body at slider index {0}")]
    UnknownBody(i64),
}

/// What the host UI should do after a control ran.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reaction {
    Nothing,
    ShowInfo(BodyId),
    HideInfo,
    /// `true` = pointer cursor, `false` = default.
    Cursor(bool),
    /// Every slider must be resynced and the info panel hidden.
    SlidersReset,
}

type InputHandler = fn(&mut SimulationState, &InputEvent) -> Result<Reaction, ControlError>;
type CustomHandler = fn(&mut SimulationState, f32, f32) -> Result<Reaction, ControlError>;

/// Event kind → handler, registered once.
pub struct ControlTable {
    input: HashMap<InputKind, InputHandler>,
    custom: HashMap<u32, CustomHandler>,
}

impl ControlTable {
    pub fn new() -> Self {
        let mut input: HashMap<InputKind, InputHandler> = HashMap::new();
        input.insert(InputKind::PointerDown, on_pointer_down);
        input.insert(InputKind::PointerMove, on_pointer_move);
        input.insert(InputKind::TouchStart, on_touch_start);
        input.insert(InputKind::TouchMove, on_touch_move);
        input.insert(InputKind::Resize, on_resize);

        let mut custom: HashMap<u32, CustomHandler> = HashMap::new();
        custom.insert(CUSTOM_SET_SPEED, on_speed_slider);
        custom.insert(CUSTOM_TOGGLE_PAUSE, |sim, _, _| {
            sim.toggle_pause();
            Ok(Reaction::Nothing)
        });
        custom.insert(CUSTOM_RESET, |sim, _, _| {
            sim.reset();
            Ok(Reaction::SlidersReset)
        });
        custom.insert(CUSTOM_TOGGLE_THEME, |sim, _, _| {
            sim.toggle_theme();
            log::debug!("theme now {:?}", sim.theme);
            Ok(Reaction::Nothing)
        });
        custom.insert(CUSTOM_ZOOM_IN, |sim, _, _| {
            sim.zoom_in();
            Ok(Reaction::Nothing)
        });
        custom.insert(CUSTOM_ZOOM_OUT, |sim, _, _| {
            sim.zoom_out();
            Ok(Reaction::Nothing)
        });
        custom.insert(CUSTOM_CAMERA_RESET, |sim, _, _| {
            sim.reset_camera();
            Ok(Reaction::Nothing)
        });
        custom.insert(CUSTOM_TOGGLE_PANEL, |sim, _, _| {
            sim.toggle_panel();
            Ok(Reaction::Nothing)
        });

        Self { input, custom }
    }

    pub fn dispatch(&self, sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
        if let InputEvent::Custom { kind, a, b, .. } = *event {
            let handler = self.custom.get(&kind).ok_or(ControlError::UnknownKind(kind))?;
            return handler(sim, a, b);
        }
        match self.input.get(&event.kind()) {
            Some(handler) => handler(sim, event),
            None => Ok(Reaction::Nothing),
        }
    }
}

impl Default for ControlTable {
    fn default() -> Self {
        Self::new()
    }
}

fn pick_at(sim: &SimulationState, x: f32, y: f32) -> Option<BodyId> {
    let targets = picking::pickable_bodies(sim.bodies, &sim.orbits);
    picking::pick_pixel(x, y, sim.viewport, &sim.camera, &targets)
}

fn click(sim: &mut SimulationState, x: f32, y: f32) -> Reaction {
    sim.selection = pick_at(sim, x, y);
    match sim.selection {
        Some(id) => Reaction::ShowInfo(id),
        None => Reaction::HideInfo,
    }
}

fn hover(sim: &mut SimulationState, x: f32, y: f32) -> Reaction {
    sim.hovered = pick_at(sim, x, y);
    Reaction::Cursor(sim.hovered.is_some())
}

fn on_pointer_down(sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
    match *event {
        InputEvent::PointerDown { x, y } => Ok(click(sim, x, y)),
        _ => Ok(Reaction::Nothing),
    }
}

fn on_pointer_move(sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
    match *event {
        InputEvent::PointerMove { x, y } => Ok(hover(sim, x, y)),
        _ => Ok(Reaction::Nothing),
    }
}

// Multi-touch is left to the host for gestures.
fn on_touch_start(sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
    match *event {
        InputEvent::TouchStart { x, y, touches: 1 } => Ok(click(sim, x, y)),
        _ => Ok(Reaction::Nothing),
    }
}

fn on_touch_move(sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
    match *event {
        InputEvent::TouchMove { x, y, touches: 1 } => Ok(hover(sim, x, y)),
        _ => Ok(Reaction::Nothing),
    }
}

fn on_resize(sim: &mut SimulationState, event: &InputEvent) -> Result<Reaction, ControlError> {
    if let InputEvent::Resize { width, height } = *event {
        sim.resize(width, height);
    }
    Ok(Reaction::Nothing)
}

fn on_speed_slider(sim: &mut SimulationState, index: f32, value: f32) -> Result<Reaction, ControlError> {
    if !index.is_finite() || index.fract() != 0.0 {
        return Err(ControlError::UnknownBody(-1));
    }
    let wire = index as i64;
    // No `as usize`: it would wrap on 32-bit targets.
    let slot = match usize::try_from(wire) {
        Ok(slot) if sim.set_speed_multiplier(slot, value) => slot,
        _ => return Err(ControlError::UnknownBody(wire)),
    };
    log::debug!("speed multiplier {} -> {:.2}", slot, sim.orbits[slot].speed_multiplier);
    Ok(Reaction::Nothing)
}
