use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// End cap style for line segments.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    /// Ends flush with the segment endpoints.
    #[default]
    Butt,
    /// Half-disc of diameter `width` past each endpoint.
    Round,
}

/// Line segment draw payload (surface space).
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl DrawList {
    /// Records a stroked segment. Both endpoints are mapped through the current transform.
    pub fn push_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
        cap: LineCap,
    ) {
        let t = self.transform();
        self.push(z, DrawCmd::Line(LineCmd {
            from: t.apply(from),
            to: t.apply(to),
            width,
            color,
            cap,
        }));
    }
}
