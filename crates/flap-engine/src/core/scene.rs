use crate::core::geometry::Rect;

/// A pair of gates with a vertical opening between `top_height` and `bottom_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge in canvas space.
    pub x: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    /// Set once the avatar has passed it; guards against double scoring.
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, top_height: f32, gap: f32) -> Self {
        Self {
            x,
            top_height,
            bottom_y: top_height + gap,
            scored: false,
        }
    }

    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }

    /// Top and bottom gate rectangles. The bottom gate reaches down to the ground.
    pub fn gate_rects(&self, width: f32, ground_y: f32) -> (Rect, Rect) {
        (
            Rect::new(self.x, 0.0, width, self.top_height),
            Rect::new(self.x, self.bottom_y, width, ground_y - self.bottom_y),
        )
    }
}

/// Active obstacles in spawn order, which is also left-to-right screen order.
#[derive(Debug, Clone, Default)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self {
            obstacles: Vec::with_capacity(8),
        }
    }

    /// Append a new obstacle at the right end of the stream.
    pub fn spawn(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Ordered storage for systems that advance and cull in place.
    pub(crate) fn items_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }
}
