/// Key code the page forwards for the space bar.
pub const KEY_SPACE: u32 = 32;

/// Input event types the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The primary action, already resolved by the UI layer (button, gamepad...).
    Action,
    /// A touch/click began at canvas coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// The host viewport changed size. Dimensions are validated by the game.
    Resize { width: f32, height: f32 },
}

impl InputEvent {
    /// Whether this event counts as a flap / start / restart.
    pub fn is_primary_action(&self) -> bool {
        matches!(
            self,
            InputEvent::Action
                | InputEvent::PointerDown { .. }
                | InputEvent::KeyDown { key_code: KEY_SPACE }
        )
    }
}

/// A queue of input events.
/// The host pushes events between frames; the runner drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

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
