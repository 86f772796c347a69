/// Input event types the engine understands.
/// No game-specific semantics. Coordinates are viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A click/press at (x, y).
    PointerDown { x: f32, y: f32 },
    /// The cursor moved to (x, y).
    PointerMove { x: f32, y: f32 },
    /// A touch began. (x, y) is the first touch point; `touches` is the
    /// number of active touch points.
    TouchStart { x: f32, y: f32, touches: u32 },
    /// A touch moved. Same payload as `TouchStart`.
    TouchMove { x: f32, y: f32, touches: u32 },
    /// The drawable surface changed size.
    Resize { width: f32, height: f32 },
    /// A custom event from the UI layer (buttons, sliders, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Discriminant of [`InputEvent`], usable as a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    PointerDown,
    PointerMove,
    TouchStart,
    TouchMove,
    Resize,
    Custom,
}

impl InputEvent {
    pub fn kind(&self) -> InputKind {
        match self {
            InputEvent::PointerDown { .. } => InputKind::PointerDown,
            InputEvent::PointerMove { .. } => InputKind::PointerMove,
            InputEvent::TouchStart { .. } => InputKind::TouchStart,
            InputEvent::TouchMove { .. } => InputKind::TouchMove,
            InputEvent::Resize { .. } => InputKind::Resize,
            InputEvent::Custom { .. } => InputKind::Custom,
        }
    }
}

/// A queue of input events.
/// JS writes events into the queue between frames; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        q.push(InputEvent::Resize { width: 800.0, height: 600.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn kind_matches_variant() {
        let touch = InputEvent::TouchMove { x: 1.0, y: 2.0, touches: 1 };
        assert_eq!(touch.kind(), InputKind::TouchMove);
        let custom = InputEvent::Custom { kind: 7, a: 1.5, b: 2.5, c: 3.5 };
        assert_eq!(custom.kind(), InputKind::Custom);
    }
}
