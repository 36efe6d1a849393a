//! Draw-surface contract for render backends.
//!
//! The engine never talks to a graphics API directly. The render step issues
//! a handful of 2D primitives against this trait; the web bridge implements
//! it over `CanvasRenderingContext2d`, tests use the recording `DrawList`.

use crate::core::geometry::Rect;

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// CSS colour string: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {:.3})",
                self.r,
                self.g,
                self.b,
                self.a as f32 / 255.0
            )
        }
    }
}

/// A 2D surface the render step can paint onto.
///
/// # Example Implementation
///
/// ```ignore
/// struct SvgSurface { out: String }
///
/// impl DrawSurface for SvgSurface {
///     fn clear(&mut self, _w: f32, _h: f32) { self.out.clear(); }
///     fn fill_rect(&mut self, rect: Rect, color: Color) {
///         // push a <rect fill=...>
///     }
///     // ...
/// }
/// ```
pub trait DrawSurface {
    /// Erase the whole surface.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);

    /// Fill `rect` with a two-stop gradient running from its top edge to its bottom edge.
    fn fill_vertical_gradient(&mut self, rect: Rect, top: Color, bottom: Color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_css_is_hex() {
        assert_eq!(Color::rgb(0x87, 0xCE, 0xEB).to_css(), "#87ceeb");
        assert_eq!(Color::BLACK.to_css(), "#000000");
    }

    #[test]
    fn translucent_css_is_rgba() {
        let c = Color { r: 255, g: 0, b: 0, a: 0 };
        assert_eq!(c.to_css(), "rgba(255, 0, 0, 0.000)");
    }
}
