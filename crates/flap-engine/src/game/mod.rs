pub mod flappy;
pub mod session;

pub use flappy::FlappyGame;
pub use session::{Hud, Phase, Session};
