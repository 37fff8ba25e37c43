use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::circle::CircleCmd;
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuadPass;

/// Renderer for `DrawCmd::Circle`.
///
/// Each circle is an instanced quad shaded from its signed distance. Borders
/// are an antialiased ring on the inner edge, so the disc never grows past
/// `radius`.
pub struct CircleRenderer {
    pass: InstancedQuadPass<CircleInstance>,
}

impl Default for CircleRenderer {
    fn default() -> Self {
        Self {
            pass: InstancedQuadPass::new(
                "circle",
                include_str!("shaders/circle.wgsl"),
                &CircleInstance::ATTRS,
            ),
        }
    }
}

impl CircleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let instances: Vec<CircleInstance> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Circle(cmd) => CircleInstance::from_cmd(cmd),
                _ => None,
            })
            .collect();

        self.pass.draw(ctx, target, &instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  center       [f32; 2]   loc 1
///  offset  8  radius_bw    [f32; 2]   loc 2  (.x = radius, .y = border_width)
///  offset 16  fill         [f32; 4]   loc 3
///  offset 32  border_color [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct CircleInstance {
    center: [f32; 2],
    radius_bw: [f32; 2],
    fill: [f32; 4],
    border_color: [f32; 4],
}

impl CircleInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x2, // radius_bw
        3 => Float32x4, // fill
        4 => Float32x4  // border_color
    ];

    /// Returns `None` for circles that would cover no pixels.
    fn from_cmd(cmd: &CircleCmd) -> Option<Self> {
        if !(cmd.radius > 0.0) || !cmd.center.is_finite() {
            return None;
        }

        let (border_width, border_color) = match &cmd.border {
            Some(b) => (b.width.clamp(0.0, cmd.radius), b.color.to_array()),
            None => (0.0, [0.0f32; 4]),
        };

        Some(Self {
            center: [cmd.center.x, cmd.center.y],
            radius_bw: [cmd.radius, border_width],
            fill: cmd.fill.to_array(),
            border_color,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::Border;

    #[test]
    fn instance_layout_is_48_bytes() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 48);
    }

    #[test]
    fn degenerate_circles_are_skipped() {
        let zero = CircleCmd::new(Vec2::zero(), 0.0, Color::white(), None);
        let nan = CircleCmd::new(Vec2::new(f32::NAN, 0.0), 4.0, Color::white(), None);
        assert!(CircleInstance::from_cmd(&zero).is_none());
        assert!(CircleInstance::from_cmd(&nan).is_none());
    }

    #[test]
    fn border_is_clamped_to_radius() {
        let cmd = CircleCmd::new(
            Vec2::new(5.0, 5.0),
            3.0,
            Color::white(),
            Some(Border::new(10.0, Color::white())),
        );
        let inst = CircleInstance::from_cmd(&cmd).unwrap();
        assert_eq!(inst.radius_bw, [3.0, 3.0]);
    }
}
