use bytemuck::{Pod, Zeroable};

/// What a `GameEvent` reports. Encoded as the event's `kind` float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EventKind {
    /// `a` = new phase code.
    PhaseChanged = 1,
    /// `a` = current score.
    ScoreChanged = 2,
    /// `a` = new best score.
    NewBest = 3,
}

impl EventKind {
    pub fn from_f32(kind: f32) -> Option<Self> {
        match kind as u8 {
            1 => Some(Self::PhaseChanged),
            2 => Some(Self::ScoreChanged),
            3 => Some(Self::NewBest),
            _ => None,
        }
    }
}

/// A game event communicated from Rust to the page.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
/// Laid out as 4 floats so the page can read the whole list from wasm memory.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: EventKind, a: f32) -> Self {
        Self {
            kind: kind as u8 as f32,
            a,
            b: 0.0,
            c: 0.0,
        }
    }

    pub fn kind(&self) -> Option<EventKind> {
        EventKind::from_f32(self.kind)
    }
}
