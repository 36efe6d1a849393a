use serde::{Deserialize, Serialize};

use crate::api::types::GameEvent;
use crate::config::{DisplayProfile, Viewport, DEFAULT_MIN_GATE_HEIGHT};
use crate::core::time::FrameClock;
use crate::error::FlapError;
use crate::input::queue::InputQueue;
use crate::renderer::traits::DrawSurface;

/// Upper bound for `GameConfig::max_events`.
pub const MAX_EVENTS_LIMIT: usize = 1024;

/// Configuration for the engine, provided by the host at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Primary input device; selects canvas sizing and spawn interval.
    pub profile: DisplayProfile,
    /// Host viewport at startup.
    pub viewport: Viewport,
    /// Seed for obstacle placement.
    pub seed: u64,
    /// Smallest height either gate may have (default: 50).
    pub min_gate_height: f32,
    /// Durable storage key for the best score.
    pub storage_key: String,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            profile: DisplayProfile::default(),
            viewport: Viewport::default(),
            seed: 42,
            min_gate_height: DEFAULT_MIN_GATE_HEIGHT,
            storage_key: "flappyBestScore".to_string(),
            max_events: 16,
        }
    }
}

impl GameConfig {
    pub fn for_profile(profile: DisplayProfile, viewport: Viewport) -> Self {
        Self {
            profile,
            viewport,
            ..Self::default()
        }
    }

    /// Parse and validate a config from a JSON string. Missing fields default.
    pub fn from_json(json: &str) -> Result<Self, FlapError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FlapError> {
        Viewport::new(self.viewport.width, self.viewport.height)?;
        if !self.min_gate_height.is_finite() || self.min_gate_height < 0.0 {
            return Err(FlapError::InvalidConfig(format!(
                "min_gate_height must be finite and non-negative, got {}",
                self.min_gate_height
            )));
        }
        if self.max_events > MAX_EVENTS_LIMIT {
            return Err(FlapError::InvalidConfig(format!(
                "max_events {} exceeds {}",
                self.max_events, MAX_EVENTS_LIMIT
            )));
        }
        Ok(())
    }
}

/// The core contract a game fulfils for the runner.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state. `ctx.best_score` already holds the stored best.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick: apply queued input, then advance the simulation.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Paint the current state. Must not mutate the game.
    fn render(&self, surface: &mut dyn DrawSurface);
}

/// Mutable engine state shared between the runner and the game.
pub struct EngineContext {
    pub clock: FrameClock,
    pub events: Vec<GameEvent>,
    /// Best score known to the runner. A game raises it; the runner persists
    /// the new value after the frame.
    pub best_score: u32,
    max_events: usize,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_max_events(GameConfig::default().max_events)
    }

    pub fn with_max_events(max_events: usize) -> Self {
        Self {
            clock: FrameClock::new(),
            events: Vec::with_capacity(max_events),
            best_score: 0,
            max_events,
        }
    }

    /// Emit a game event to be forwarded to the page. Events past the
    /// per-frame capacity are dropped.
    pub fn emit_event(&mut self, event: GameEvent) {
        if self.events.len() >= self.max_events {
            log::warn!("event buffer full ({}), dropping {:?}", self.max_events, event);
            return;
        }
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
