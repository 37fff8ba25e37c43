use bytemuck::{Pod, Zeroable};

use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::line::{LineCap, LineCmd};
use crate::scene::{DrawCmd, DrawList};

use super::common::InstancedQuadPass;

/// Renderer for `DrawCmd::Line`.
///
/// Segments are instanced quads oriented along the segment and shaded from a
/// capsule (round cap) or box (butt cap) signed distance.
pub struct LineRenderer {
    pass: InstancedQuadPass<LineInstance>,
}

impl Default for LineRenderer {
    fn default() -> Self {
        Self {
            pass: InstancedQuadPass::new(
                "line",
                include_str!("shaders/line.wgsl"),
                &LineInstance::ATTRS,
            ),
        }
    }
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
    ) {
        let instances: Vec<LineInstance> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Line(cmd) => LineInstance::from_cmd(cmd),
                _ => None,
            })
            .collect();

        self.pass.draw(ctx, target, &instances);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (40 bytes):
///
///  offset  0  from    [f32; 2]   loc 1
///  offset  8  to      [f32; 2]   loc 2
///  offset 16  params  [f32; 2]   loc 3  (.x = half width, .y = 1.0 for round caps)
///  offset 24  color   [f32; 4]   loc 4
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineInstance {
    from: [f32; 2],
    to: [f32; 2],
    params: [f32; 2],
    color: [f32; 4],
}

impl LineInstance {
    const ATTRS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        1 => Float32x2, // from
        2 => Float32x2, // to
        3 => Float32x2, // params
        4 => Float32x4  // color
    ];

    fn from_cmd(cmd: &LineCmd) -> Option<Self> {
        if !(cmd.width > 0.0) || !cmd.from.is_finite() || !cmd.to.is_finite() {
            return None;
        }

        let round = match cmd.cap {
            LineCap::Butt => 0.0,
            LineCap::Round => 1.0,
        };

        Some(Self {
            from: [cmd.from.x, cmd.from.y],
            to: [cmd.to.x, cmd.to.y],
            params: [cmd.width * 0.5, round],
            color: cmd.color.to_array(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;

    fn cmd(width: f32, cap: LineCap) -> LineCmd {
        LineCmd {
            from: Vec2::new(10.0, 10.0),
            to: Vec2::new(10.0, 0.0),
            width,
            color: Color::white(),
            cap,
        }
    }

    #[test]
    fn instance_layout_is_40_bytes() {
        assert_eq!(std::mem::size_of::<LineInstance>(), 40);
    }

    #[test]
    fn round_cap_sets_flag_and_half_width() {
        let inst = LineInstance::from_cmd(&cmd(4.0, LineCap::Round)).unwrap();
        assert_eq!(inst.params, [2.0, 1.0]);
        let inst = LineInstance::from_cmd(&cmd(4.0, LineCap::Butt)).unwrap();
        assert_eq!(inst.params, [2.0, 0.0]);
    }

    #[test]
    fn zero_width_lines_are_skipped() {
        assert!(LineInstance::from_cmd(&cmd(0.0, LineCap::Round)).is_none());
    }
}
