use glam::Vec2;

use crate::config::Metrics;
use crate::core::geometry::Rect;

/// The player's bird: a square that falls under constant gravity and is
/// kicked upward by an absolute velocity impulse.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    /// Top-left corner. `x` never changes during a session.
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity in canvas units per frame (positive = down).
    pub velocity: f32,
    pub gravity: f32,
    /// Velocity assigned by a flap (negative).
    pub impulse: f32,
}

impl Avatar {
    pub fn from_metrics(metrics: &Metrics) -> Self {
        Self {
            pos: Vec2::new(metrics.avatar_x, metrics.avatar_start_y),
            size: Vec2::splat(metrics.avatar_size),
            velocity: 0.0,
            gravity: metrics.gravity,
            impulse: metrics.impulse,
        }
    }

    /// One physics tick. No clamping: the avatar may overshoot a boundary by
    /// one frame before collision is evaluated.
    pub fn step(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Overwrite velocity with the impulse (never additive).
    pub fn flap(&mut self) {
        self.velocity = self.impulse;
    }

    /// Back to the start position at rest.
    pub fn reset(&mut self, metrics: &Metrics) {
        self.pos = Vec2::new(metrics.avatar_x, metrics.avatar_start_y);
        self.velocity = 0.0;
    }

    /// Adopt new size-derived constants. `y` is only re-centred when asked;
    /// a bird in flight keeps its height.
    pub fn rescale(&mut self, metrics: &Metrics, recenter: bool) {
        self.pos.x = metrics.avatar_x;
        if recenter {
            self.pos.y = metrics.avatar_start_y;
        }
        self.size = Vec2::splat(metrics.avatar_size);
        self.gravity = metrics.gravity;
        self.impulse = metrics.impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}
