use crate::config::Metrics;
use crate::core::geometry::Rect;
use crate::core::physics::Avatar;
use crate::core::scene::ObstacleField;
use crate::renderer::traits::{Color, DrawSurface};

pub const SKY_TOP: Color = Color::rgb(0x87, 0xCE, 0xEB);
pub const SKY_BOTTOM: Color = Color::rgb(0x98, 0xFB, 0x98);
pub const GROUND: Color = Color::rgb(0x8B, 0x45, 0x13);
pub const GRASS: Color = Color::rgb(0x22, 0x8B, 0x22);
pub const OBSTACLE_FILL: Color = Color::rgb(0x32, 0xCD, 0x32);
pub const OBSTACLE_BORDER: Color = GRASS;
pub const AVATAR_FILL: Color = Color::rgb(0xFF, 0xD7, 0x00);
pub const AVATAR_ACCENT: Color = Color::rgb(0xFF, 0xA5, 0x00);

const GRASS_HEIGHT: f32 = 10.0;
const BORDER_WIDTH: f32 = 2.0;

/// Everything the render step reads. Borrowed, never mutated.
pub struct FrameView<'a> {
    pub metrics: &'a Metrics,
    pub avatar: &'a Avatar,
    pub obstacles: &'a ObstacleField,
}

/// Paint one frame back-to-front: sky, ground, obstacles, avatar.
/// Tolerates an empty obstacle list and an avatar outside the canvas.
pub fn draw_frame(surface: &mut dyn DrawSurface, view: &FrameView) {
    let m = view.metrics;
    let (w, h) = (m.canvas.width, m.canvas.height);

    surface.clear(w, h);
    surface.fill_vertical_gradient(Rect::new(0.0, 0.0, w, h), SKY_TOP, SKY_BOTTOM);

    surface.fill_rect(Rect::new(0.0, m.ground_y, w, m.ground_height), GROUND);
    surface.fill_rect(Rect::new(0.0, m.ground_y, w, GRASS_HEIGHT), GRASS);

    for obstacle in view.obstacles.iter() {
        let (top, bottom) = obstacle.gate_rects(m.obstacle_width, m.ground_y);
        surface.fill_rect(top, OBSTACLE_FILL);
        surface.fill_rect(bottom, OBSTACLE_FILL);
        surface.stroke_rect(top, OBSTACLE_BORDER, BORDER_WIDTH);
        surface.stroke_rect(bottom, OBSTACLE_BORDER, BORDER_WIDTH);
    }

    draw_avatar(surface, view.avatar);
}

fn draw_avatar(surface: &mut dyn DrawSurface, avatar: &Avatar) {
    let body = avatar.bounds();
    let (x, y) = (body.pos.x, body.pos.y);
    let (w, h) = (body.size.x, body.size.y);

    surface.fill_rect(body, AVATAR_FILL);
    surface.stroke_rect(body, AVATAR_ACCENT, BORDER_WIDTH);

    let eye = w * 0.2;
    surface.fill_rect(Rect::new(x + w * 0.65, y + h * 0.25, eye, eye), Color::WHITE);
    let pupil = eye * 0.4;
    surface.fill_rect(Rect::new(x + w * 0.7, y + h * 0.35, pupil, pupil), Color::BLACK);

    // Beak sticks out past the right edge.
    surface.fill_rect(Rect::new(x + w, y + h * 0.4, w * 0.25, h * 0.2), AVATAR_ACCENT);
}
