use crate::core::geometry::Rect;
use crate::core::scene::{Obstacle, ObstacleField};

/// Result of one sweep over the obstacle stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sweep {
    /// Obstacles passed this frame.
    pub scored: u32,
    pub collided: bool,
}

/// Whether the avatar touches either gate of `obstacle`.
/// Requires x-overlap, then the avatar must poke out of the opening.
pub fn hits_gate(avatar: &Rect, obstacle: &Obstacle, width: f32) -> bool {
    let column = Rect::new(obstacle.x, 0.0, width, 0.0);
    avatar.overlaps_x(&column)
        && (avatar.top() < obstacle.top_height || avatar.bottom() > obstacle.bottom_y)
}

/// Ceiling or ground contact.
pub fn hits_boundary(avatar: &Rect, ground_y: f32) -> bool {
    avatar.bottom() >= ground_y || avatar.top() < 0.0
}

/// Advance, cull, score, and collide every obstacle in left-to-right order.
///
/// Stops at the first collision: obstacles to its right are neither advanced
/// nor tested that frame.
pub fn sweep_obstacles(field: &mut ObstacleField, avatar: &Rect, width: f32, speed: f32) -> Sweep {
    let mut sweep = Sweep::default();
    let obstacles = field.items_mut();
    let mut i = 0;
    while i < obstacles.len() {
        let obstacle = &mut obstacles[i];
        obstacle.x -= speed;

        if obstacle.right(width) < 0.0 {
            obstacles.remove(i);
            continue;
        }

        if !obstacle.scored && obstacle.right(width) < avatar.left() {
            obstacle.scored = true;
            sweep.scored += 1;
        }

        if hits_gate(avatar, obstacle, width) {
            sweep.collided = true;
            return sweep;
        }
        i += 1;
    }
    sweep
}
