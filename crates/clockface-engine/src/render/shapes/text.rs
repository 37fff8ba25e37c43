use std::collections::HashMap;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::text::{TextAlign, TextCmd};
use crate::scene::{DrawCmd, DrawList};
use crate::text::{FontId, FontSystem};

use super::common::{
    begin_load_pass, create_viewport_ubo, ensure_instance_buffer, instanced_quad_pipeline,
    viewport_bgl_entry, QuadBuffers, ViewportUniform, QUAD_INDICES,
};

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 1024;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

#[derive(Debug, Copy, Clone, PartialEq)]
struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

impl CachedGlyph {
    fn at(x: u32, y: u32, w: u32, h: u32) -> Self {
        let atlas_f = ATLAS_SIZE as f32;
        Self {
            uv_min: [x as f32 / atlas_f, y as f32 / atlas_f],
            uv_max: [(x + w) as f32 / atlas_f, (y + h) as f32 / atlas_f],
        }
    }
}

/// Shelf packer state for the glyph atlas.
#[derive(Debug, Clone, PartialEq)]
struct ShelfCursor {
    x: u32,
    y: u32,
    row_height: u32,
}

impl ShelfCursor {
    const fn new() -> Self {
        Self { x: GLYPH_PADDING, y: GLYPH_PADDING, row_height: 0 }
    }

    /// Reserves a `w × h` slot, returning its top-left, or `None` when the atlas is full.
    fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w + 2 * GLYPH_PADDING > ATLAS_SIZE {
            return None;
        }

        // Advance to a new shelf row when the glyph doesn't fit horizontally.
        if self.x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.y += self.row_height + GLYPH_PADDING;
            self.x = GLYPH_PADDING;
            self.row_height = 0;
        }

        if self.y + h + GLYPH_PADDING > ATLAS_SIZE {
            return None;
        }

        let slot = (self.x, self.y);
        self.x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

/// A glyph bitmap a frame needs, in physical pixels.
#[derive(Debug, Copy, Clone)]
struct GlyphRequest {
    font: FontId,
    key: GlyphRasterConfig,
    w: u32,
    h: u32,
}

/// A freshly reserved atlas slot whose bitmap still has to be uploaded.
#[derive(Debug, Copy, Clone)]
struct GlyphUpload {
    request: GlyphRequest,
    x: u32,
    y: u32,
}

/// CPU side of the glyph atlas: slot packing plus the key to UV cache.
///
/// The numeral size follows the window size, so every resize brings a new set
/// of keys. When a frame no longer fits, the whole atlas is evicted and the
/// frame is packed again from an empty atlas.
#[derive(Debug)]
struct GlyphAtlas {
    cursor: ShelfCursor,
    glyphs: HashMap<GlyphRasterConfig, CachedGlyph>,
    warned_full: bool,
}

impl GlyphAtlas {
    fn new() -> Self {
        Self { cursor: ShelfCursor::new(), glyphs: HashMap::new(), warned_full: false }
    }

    fn get(&self, key: &GlyphRasterConfig) -> Option<CachedGlyph> {
        self.glyphs.get(key).copied()
    }

    fn clear(&mut self) {
        self.cursor = ShelfCursor::new();
        self.glyphs.clear();
    }

    /// Ensures every glyph in `frame` has a slot and returns the new slots.
    ///
    /// Glyphs that do not fit even in an empty atlas are left out; that is
    /// logged once.
    fn reserve_frame(&mut self, frame: &[GlyphRequest]) -> Vec<GlyphUpload> {
        let (uploads, complete) = self.try_reserve(frame);
        if complete {
            return uploads;
        }

        log::debug!("TextRenderer: glyph atlas full, evicting {} glyphs", self.glyphs.len());
        self.clear();

        let (uploads, complete) = self.try_reserve(frame);
        if !complete && !self.warned_full {
            log::warn!(
                "TextRenderer: text does not fit the {ATLAS_SIZE}x{ATLAS_SIZE} glyph atlas; \
                 some glyphs will not be rendered"
            );
            self.warned_full = true;
        }
        uploads
    }

    fn try_reserve(&mut self, frame: &[GlyphRequest]) -> (Vec<GlyphUpload>, bool) {
        let mut uploads = Vec::new();
        let mut complete = true;

        for &request in frame {
            if self.glyphs.contains_key(&request.key) {
                continue;
            }
            let Some((x, y)) = self.cursor.allocate(request.w, request.h) else {
                complete = false;
                continue;
            };
            self.glyphs.insert(request.key, CachedGlyph::at(x, y, request.w, request.h));
            uploads.push(GlyphUpload { request, x, y });
        }

        (uploads, complete)
    }
}

/// A glyph positioned for this frame, in physical pixels.
struct PlacedGlyph {
    request: GlyphRequest,
    x: f32,
    y: f32,
    color: [f32; 4],
}

/// Top-left of a text block in logical pixels for the given alignment.
fn block_origin(cmd: &TextCmd, fonts: &FontSystem, scale: f32) -> Vec2 {
    match cmd.align {
        TextAlign::TopLeft => cmd.anchor,
        TextAlign::Center => {
            let extent = fonts.measure_text_scaled(&cmd.text, cmd.font, cmd.size, scale);
            cmd.anchor - extent * 0.5
        }
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::Text`.
///
/// Maintains an R8Unorm glyph atlas. Glyphs are rasterized by fontdue at
/// physical pixel size on first use and cached until the atlas fills up.
///
/// The cache key is `fontdue::layout::GlyphRasterConfig`, which encodes font
/// identity, glyph index and pixel size.
pub struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    atlas_texture: Option<wgpu::Texture>,
    atlas_view: Option<wgpu::TextureView>,
    atlas: GlyphAtlas,

    quad: Option<QuadBuffers>,
    instance_vbo: Option<wgpu::Buffer>,
    instance_capacity: usize,

    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            viewport_ubo: None,
            sampler: None,
            atlas_texture: None,
            atlas_view: None,
            atlas: GlyphAtlas::new(),
            quad: None,
            instance_vbo: None,
            instance_capacity: 0,
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders all `DrawCmd::Text` entries in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        font_system: &FontSystem,
    ) {
        let text_cmds: Vec<TextCmd> = draw_list
            .iter_in_paint_order()
            .filter_map(|item| match &item.cmd {
                DrawCmd::Text(cmd) => Some(cmd.clone()),
                _ => None,
            })
            .collect();

        if text_cmds.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_atlas(ctx);
        if self.quad.is_none() {
            self.quad = Some(QuadBuffers::new(ctx, "text"));
        }

        let scale = ctx.scale_factor.max(0.01);
        let placed = self.layout_glyphs(&text_cmds, font_system, scale);
        let requests: Vec<GlyphRequest> = placed.iter().map(|g| g.request).collect();

        for upload in self.atlas.reserve_frame(&requests) {
            self.upload_glyph(ctx, font_system, upload);
        }

        let instances: Vec<GlyphInstance> = placed
            .iter()
            .filter_map(|g| {
                let cached = self.atlas.get(&g.request.key)?;
                let (w, h) = (g.request.w as f32, g.request.h as f32);
                Some(GlyphInstance {
                    dst_min: [g.x / scale, g.y / scale],
                    dst_max: [(g.x + w) / scale, (g.y + h) / scale],
                    uv_min: cached.uv_min,
                    uv_max: cached.uv_max,
                    color: g.color,
                })
            })
            .collect();

        if instances.is_empty() {
            return;
        }

        self.ensure_bindings(ctx);
        ensure_instance_buffer::<GlyphInstance>(
            ctx,
            "text",
            &mut self.instance_vbo,
            &mut self.instance_capacity,
            instances.len(),
        );

        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&ViewportUniform::from_ctx(ctx)));

        let Some(instance_vbo) = self.instance_vbo.as_ref() else { return };
        ctx.queue.write_buffer(instance_vbo, 0, bytemuck::cast_slice(&instances));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad) = self.quad.as_ref() else { return };

        let mut rpass = begin_load_pass(target, "clockface text pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad.vbo.slice(..));
        rpass.set_vertex_buffer(1, instance_vbo.slice(..));
        rpass.set_index_buffer(quad.ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..instances.len() as u32);
    }

    // ── atlas helpers ──────────────────────────────────────────────────────

    /// Lays out every command in physical pixels and lists the glyphs it needs.
    fn layout_glyphs(
        &mut self,
        cmds: &[TextCmd],
        font_system: &FontSystem,
        scale: f32,
    ) -> Vec<PlacedGlyph> {
        let mut placed = Vec::new();

        for cmd in cmds {
            let Some(font) = font_system.get(cmd.font) else {
                log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
                continue;
            };

            let origin = block_origin(cmd, font_system, scale);
            let color = cmd.color.to_array();

            // Whole-pixel origin so glyph bitmaps map 1:1 onto the surface.
            self.layout.reset(&LayoutSettings {
                x: (origin.x * scale).round(),
                y: (origin.y * scale).round(),
                ..LayoutSettings::default()
            });
            self.layout.append(&[font], &TextStyle::new(&cmd.text, cmd.size * scale, 0));

            placed.extend(
                self.layout
                    .glyphs()
                    .iter()
                    .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
                    .map(|g| PlacedGlyph {
                        request: GlyphRequest {
                            font: cmd.font,
                            key: g.key,
                            w: g.width as u32,
                            h: g.height as u32,
                        },
                        x: g.x,
                        y: g.y,
                        color,
                    }),
            );
        }

        placed
    }

    fn upload_glyph(&self, ctx: &RenderCtx<'_>, font_system: &FontSystem, upload: GlyphUpload) {
        let GlyphUpload { request, x, y } = upload;
        let Some(font) = font_system.get(request.font) else { return };
        let Some(atlas) = self.atlas_texture.as_ref() else { return };

        let (_, bitmap) = font.rasterize_config(request.key);
        if bitmap.len() != (request.w * request.h) as usize {
            log::debug!("TextRenderer: glyph {:?} changed size on rasterization", request.key);
            return;
        }

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x, y, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            &bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(request.w),
                rows_per_image: Some(request.h),
            },
            wgpu::Extent3d { width: request.w, height: request.h, depth_or_array_layers: 1 },
        );
    }

    // ── lazy-init helpers ──────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("clockface text bgl"),
            entries: &[
                viewport_bgl_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = instanced_quad_pipeline(
            ctx,
            "text",
            include_str!("shaders/text.wgsl"),
            &bgl,
            GlyphInstance::layout(),
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_atlas(&mut self, ctx: &RenderCtx<'_>) {
        if self.atlas_texture.is_some() {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("clockface text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.atlas_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.atlas_texture = Some(texture);
        self.atlas.clear();
        self.bind_group = None;

        if self.sampler.is_none() {
            self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
                label: Some("clockface text sampler"),
                address_mode_u: wgpu::AddressMode::ClampToEdge,
                address_mode_v: wgpu::AddressMode::ClampToEdge,
                address_mode_w: wgpu::AddressMode::ClampToEdge,
                mag_filter: wgpu::FilterMode::Linear,
                min_filter: wgpu::FilterMode::Linear,
                mipmap_filter: wgpu::MipmapFilterMode::Nearest,
                ..Default::default()
            }));
        }
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(atlas_view) = self.atlas_view.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let viewport_ubo = create_viewport_ubo(ctx, "clockface text viewport ubo");

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("clockface text bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: viewport_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(atlas_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min:  [f32; 2],
    uv_max:  [f32; 2],
    color:   [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    const FONT_CANDIDATES: &[&str] = &[
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    ];

    fn system_font() -> Option<(FontSystem, FontId)> {
        let mut fonts = FontSystem::new();
        let id = FONT_CANDIDATES
            .iter()
            .filter_map(|p| std::fs::read(p).ok())
            .find_map(|bytes| fonts.load_font(&bytes).ok())?;
        Some((fonts, id))
    }

    fn text_cmd(text: &str, font: FontId, size: f32, align: TextAlign) -> TextCmd {
        TextCmd {
            text: text.to_string(),
            font,
            size,
            color: Color::white(),
            anchor: Vec2::new(100.0, 50.0),
            align,
        }
    }

    fn request(index: u16, px: f32, w: u32, h: u32) -> GlyphRequest {
        GlyphRequest {
            font: FontId::from_raw(0),
            key: GlyphRasterConfig { glyph_index: index, px, font_hash: 7 },
            w,
            h,
        }
    }

    // Ten digit-shaped glyphs at pixel size `px`.
    fn digits(px: f32) -> Vec<GlyphRequest> {
        let (w, h) = ((px * 0.55).ceil() as u32, (px * 0.75).ceil() as u32);
        (0..10).map(|i| request(19 + i, px, w, h)).collect()
    }

    #[test]
    fn shelf_packs_left_to_right_then_wraps() {
        let mut cursor = ShelfCursor::new();
        let first = cursor.allocate(10, 12).unwrap();
        let second = cursor.allocate(10, 8).unwrap();
        assert_eq!(first, (GLYPH_PADDING, GLYPH_PADDING));
        assert_eq!(second, (GLYPH_PADDING * 2 + 10, GLYPH_PADDING));

        let wide = ATLAS_SIZE - 2 * GLYPH_PADDING;
        let wrapped = cursor.allocate(wide, 4).unwrap();
        assert_eq!(wrapped, (GLYPH_PADDING, GLYPH_PADDING * 2 + 12));
    }

    #[test]
    fn shelf_rejects_glyphs_larger_than_atlas() {
        let mut cursor = ShelfCursor::new();
        assert!(cursor.allocate(ATLAS_SIZE, 1).is_none());
        assert!(cursor.allocate(1, ATLAS_SIZE).is_none());
    }

    #[test]
    fn cached_glyphs_are_not_uploaded_twice() {
        let mut atlas = GlyphAtlas::new();
        let frame = digits(30.0);
        assert_eq!(atlas.reserve_frame(&frame).len(), 10);
        assert!(atlas.reserve_frame(&frame).is_empty());
    }

    #[test]
    fn numerals_keep_their_slots_through_window_resizes() {
        // Numerals are 0.15 of the dial radius, so each window height is a new size.
        let mut atlas = GlyphAtlas::new();
        for scale in [1.0f32, 2.0] {
            for height in 300..=1400u32 {
                let px = 0.15 * (height as f32 * 0.5) * scale;
                let frame = digits(px);
                atlas.reserve_frame(&frame);

                for r in &frame {
                    let glyph = atlas
                        .get(&r.key)
                        .unwrap_or_else(|| panic!("no slot for {px}px glyph at height {height}"));
                    assert!(glyph.uv_max[0] <= 1.0 && glyph.uv_max[1] <= 1.0);
                }
            }
        }
        assert!(!atlas.warned_full);
    }

    #[test]
    fn eviction_repacks_glyphs_already_cached_this_frame() {
        let mut atlas = GlyphAtlas::new();
        let big: Vec<GlyphRequest> = (0..4).map(|i| request(i, 500.0, 500, 500)).collect();
        assert_eq!(atlas.reserve_frame(&big).len(), 4);

        let frame = [big[0], request(9, 500.0, 500, 500)];
        let uploads = atlas.reserve_frame(&frame);

        // Both glyphs need fresh bitmaps: the old slot of `big[0]` may be reused.
        assert_eq!(uploads.len(), 2);
        assert!(uploads.iter().any(|u| u.request.key == big[0].key));
        assert_eq!(atlas.glyphs.len(), 2);
        assert!(atlas.get(&big[1].key).is_none());
    }

    #[test]
    fn oversized_glyphs_are_dropped_and_the_rest_placed() {
        let mut atlas = GlyphAtlas::new();
        let frame = [request(1, 2000.0, 1500, 1500), request(2, 20.0, 11, 15)];
        let uploads = atlas.reserve_frame(&frame);

        assert_eq!(uploads.len(), 1);
        assert!(atlas.get(&frame[0].key).is_none());
        assert!(atlas.get(&frame[1].key).is_some());
        assert!(atlas.warned_full);
    }

    #[test]
    fn top_left_alignment_uses_anchor() {
        let fonts = FontSystem::new();
        let cmd = text_cmd("12", FontId::from_raw(0), 20.0, TextAlign::TopLeft);
        assert_eq!(block_origin(&cmd, &fonts, 1.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn unknown_font_centres_an_empty_line() {
        // Unknown fonts measure as an empty line of height `size * 1.2`.
        let fonts = FontSystem::new();
        let cmd = text_cmd("12", FontId::from_raw(0), 20.0, TextAlign::Center);
        assert_eq!(block_origin(&cmd, &fonts, 1.0), Vec2::new(100.0, 50.0 - 12.0));
    }

    #[test]
    fn centred_numerals_straddle_their_anchor() {
        let Some((fonts, font)) = system_font() else {
            eprintln!("no system font found; skipping");
            return;
        };
        let Some(face) = fonts.get(font) else { return };
        let size = 30.0;

        let one = fonts.measure_text("1", font, size);
        let twelve = fonts.measure_text("12", font, size);
        assert!(one.x > 0.0);
        assert!(twelve.x > one.x * 1.5);

        for text in ["1", "10", "11", "12"] {
            let origin = block_origin(&text_cmd(text, font, size, TextAlign::Center), &fonts, 1.0);

            let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
            layout.reset(&LayoutSettings { x: origin.x, y: origin.y, ..LayoutSettings::default() });
            layout.append(&[face], &TextStyle::new(text, size, 0));

            let ink: Vec<_> = layout.glyphs().iter().filter(|g| g.width > 0).collect();
            assert_eq!(ink.len(), text.len());

            let left = ink.iter().map(|g| g.x).fold(f32::MAX, f32::min);
            let right = ink.iter().map(|g| g.x + g.width as f32).fold(f32::MIN, f32::max);
            let top = ink.iter().map(|g| g.y).fold(f32::MAX, f32::min);
            let bottom = ink.iter().map(|g| g.y + g.height as f32).fold(f32::MIN, f32::max);

            let centre = Vec2::new((left + right) * 0.5, (top + bottom) * 0.5);
            assert!((centre.x - 100.0).abs() < size * 0.1, "{text:?} ink centred at {centre:?}");
            assert!((centre.y - 50.0).abs() < size * 0.15, "{text:?} ink centred at {centre:?}");
        }
    }

    #[test]
    fn hidpi_measurement_matches_logical_size() {
        let Some((fonts, font)) = system_font() else {
            eprintln!("no system font found; skipping");
            return;
        };
        let logical = fonts.measure_text("12", font, 30.0);
        let hidpi = fonts.measure_text_scaled("12", font, 30.0, 2.0);
        assert!((logical.x - hidpi.x).abs() < 1.0, "{logical:?} vs {hidpi:?}");
        assert!((logical.y - hidpi.y).abs() < 1.0, "{logical:?} vs {hidpi:?}");
    }
}
