pub mod collision;
pub mod render;
pub mod spawner;
