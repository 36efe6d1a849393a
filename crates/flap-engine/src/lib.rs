pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod storage;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig, MAX_EVENTS_LIMIT};
pub use api::types::{EventKind, GameEvent};
pub use config::{DisplayProfile, Metrics, Viewport};
pub use crate::core::geometry::Rect;
pub use crate::core::physics::Avatar;
pub use crate::core::rng::Rng;
pub use crate::core::scene::{Obstacle, ObstacleField};
pub use crate::core::time::{FrameClock, SpawnTimer};
pub use error::FlapError;
pub use game::{FlappyGame, Hud, Phase, Session};
pub use input::queue::{InputEvent, InputQueue, KEY_SPACE};
pub use renderer::{Color, DrawCommand, DrawList, DrawSurface};
pub use storage::{parse_best_score, MemoryStore, ScoreStore};
