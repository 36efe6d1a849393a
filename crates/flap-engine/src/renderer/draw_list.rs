use crate::core::geometry::Rect;
use crate::renderer::traits::{Color, DrawSurface};

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { width: f32, height: f32 },
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, line_width: f32 },
    VerticalGradient { rect: Rect, top: Color, bottom: Color },
}

/// A surface that records draw calls instead of rasterizing them.
/// Used for headless runs and for inspecting a frame in tests.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(64),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Rectangles filled with exactly `color`, in draw order.
    pub fn fills_of(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::FillRect { rect, color: c } if c == color => Some(rect),
                _ => None,
            })
            .collect()
    }

    pub fn strokes(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::StrokeRect { .. }))
            .count()
    }
}

impl DrawSurface for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        // A new frame starts here.
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, line_width });
    }

    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::VerticalGradient { rect, top, bottom });
    }
}
