use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// How a text block is placed relative to its anchor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    /// Anchor is the top-left of the text block.
    #[default]
    TopLeft,
    /// Anchor is the centre of the text block (horizontally and vertically).
    Center,
}

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Anchor point in surface space.
    pub anchor: Vec2,
    pub align: TextAlign,
}

impl DrawList {
    /// Records a text draw command.
    ///
    /// Only the anchor is mapped through the current transform; glyphs are
    /// always laid out upright.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        anchor: Vec2,
        align: TextAlign,
    ) {
        let anchor = self.transform().apply(anchor);
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            anchor,
            align,
        }));
    }
}
