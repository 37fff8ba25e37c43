pub mod circle;
pub mod line;
pub mod text;

pub use line::LineCap;
pub use text::TextAlign;

use crate::paint::Color;

/// Stroke drawn along the inner edge of a shape.
///
/// The stroke never extends past the shape's outline, so a bordered circle of
/// radius `r` covers exactly the disc of radius `r`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
