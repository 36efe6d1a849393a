use crate::config::Metrics;
use crate::core::rng::Rng;
use crate::core::scene::{Obstacle, ObstacleField};

/// Inclusive range for the top gate height.
///
/// Small viewports can make the upper bound fall below the lower one; the
/// range is then clamped to zero width at `min_height` instead of inverting.
pub fn gate_range(ground_y: f32, gap: f32, min_height: f32) -> (f32, f32) {
    let max_height = ground_y - gap - min_height;
    (min_height, max_height.max(min_height))
}

/// Append a new obstacle at the right edge of the canvas with a uniformly
/// random gate position.
pub fn spawn_obstacle(field: &mut ObstacleField, rng: &mut Rng, metrics: &Metrics) -> Obstacle {
    let (lo, hi) = gate_range(metrics.ground_y, metrics.gate_gap, metrics.min_gate_height);
    let top_height = rng.range_f32(lo, hi);
    let obstacle = Obstacle::new(metrics.canvas.width, top_height, metrics.gate_gap);
    field.spawn(obstacle);
    log::debug!(
        "spawned obstacle top={:.1} bottom={:.1} (active={})",
        obstacle.top_height,
        obstacle.bottom_y,
        field.len()
    );
    obstacle
}
