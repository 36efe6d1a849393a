//! Display profiles and the size-derived constants of a session.
//!
//! Every physical quantity in the game (avatar size, gravity, gate gap, ...)
//! is a fraction of the logical canvas. Touch-primary devices play on the full
//! viewport; pointer-primary devices play on a fixed 400x600 logical canvas.

use serde::{Deserialize, Serialize};

use crate::error::FlapError;

/// Logical canvas used by pointer-primary (desktop) devices.
pub const POINTER_CANVAS: Viewport = Viewport { width: 400.0, height: 600.0 };

/// Smallest height either gate may have, in canvas units.
pub const DEFAULT_MIN_GATE_HEIGHT: f32 = 50.0;

/// Width/height of a drawable area in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Validate host-provided dimensions. Non-finite or non-positive sizes are
    /// rejected so they never reach the simulation.
    pub fn new(width: f32, height: f32) -> Result<Self, FlapError> {
        let valid = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
        if valid {
            Ok(Self { width, height })
        } else {
            Err(FlapError::InvalidViewport { width, height })
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        POINTER_CANVAS
    }
}

/// Which input device the page is primarily driven by.
/// Chosen once by the host at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayProfile {
    /// Phones and tablets: full-viewport canvas, slower obstacle stream.
    TouchPrimary,
    /// Mouse/keyboard: fixed logical canvas.
    #[default]
    PointerPrimary,
}

impl DisplayProfile {
    pub fn from_touch_primary(touch_primary: bool) -> Self {
        if touch_primary {
            Self::TouchPrimary
        } else {
            Self::PointerPrimary
        }
    }

    /// Milliseconds between obstacle spawns.
    pub fn spawn_interval_ms(self) -> f64 {
        match self {
            Self::TouchPrimary => 2000.0,
            Self::PointerPrimary => 1500.0,
        }
    }

    /// Logical canvas size for a given host viewport.
    pub fn canvas_size(self, viewport: Viewport) -> Viewport {
        match self {
            Self::TouchPrimary => viewport,
            Self::PointerPrimary => POINTER_CANVAS,
        }
    }
}

/// All size-derived constants for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub canvas: Viewport,
    pub avatar_x: f32,
    pub avatar_start_y: f32,
    /// Avatar is square: width == height.
    pub avatar_size: f32,
    pub gravity: f32,
    /// Negative: up is towards y = 0.
    pub impulse: f32,
    pub obstacle_width: f32,
    pub gate_gap: f32,
    pub obstacle_speed: f32,
    pub ground_height: f32,
    pub ground_y: f32,
    pub min_gate_height: f32,
}

impl Metrics {
    /// Derive every constant from the canvas size. Pure: the same canvas
    /// always yields the same metrics.
    pub fn derive(canvas: Viewport, min_gate_height: f32) -> Self {
        let (w, h) = (canvas.width, canvas.height);
        let ground_height = h * 0.083;
        Self {
            canvas,
            avatar_x: w * 0.2,
            avatar_start_y: h * 0.5,
            avatar_size: w * 0.075,
            gravity: h * 0.0008,
            impulse: -h * 0.017,
            obstacle_width: w * 0.125,
            gate_gap: h * 0.25,
            obstacle_speed: w * 0.005,
            ground_height,
            ground_y: h - ground_height,
            min_gate_height,
        }
    }

    pub fn for_profile(profile: DisplayProfile, viewport: Viewport, min_gate_height: f32) -> Self {
        Self::derive(profile.canvas_size(viewport), min_gate_height)
    }
}
