use anyhow::Result;

use clockface_engine::core::{App, AppControl, FrameCtx};
use clockface_engine::device::GpuInit;
use clockface_engine::render::shapes::circle::CircleRenderer;
use clockface_engine::render::shapes::line::LineRenderer;
use clockface_engine::render::shapes::text::TextRenderer;
use clockface_engine::scene::DrawList;
use clockface_engine::text::{FontId, FontSystem};
use clockface_engine::window::{Runtime, RuntimeConfig};

use crate::face;
use crate::fonts;
use crate::style::ClockStyle;
use crate::time_source::{LocalTime, TimeSource};

/// Analog clock driven by the engine runtime.
///
/// Every tick re-samples the time, records the whole dial into a fresh draw
/// list and paints it. Nothing carries over between ticks except GPU caches.
pub struct ClockRenderer<T: TimeSource = LocalTime> {
    style: ClockStyle,
    time_source: T,

    fonts: FontSystem,
    numeral_font: Option<FontId>,

    draw_list: DrawList,
    circles: CircleRenderer,
    lines: LineRenderer,
    text: TextRenderer,
}

impl ClockRenderer<LocalTime> {
    /// Clock showing local time with the default style and no font.
    pub fn new() -> Self {
        Self::with_time_source(ClockStyle::default(), LocalTime)
    }
}

impl Default for ClockRenderer<LocalTime> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeSource> ClockRenderer<T> {
    pub fn with_time_source(style: ClockStyle, time_source: T) -> Self {
        Self {
            style,
            time_source,
            fonts: FontSystem::new(),
            numeral_font: None,
            draw_list: DrawList::new(),
            circles: CircleRenderer::new(),
            lines: LineRenderer::new(),
            text: TextRenderer::new(),
        }
    }

    /// Uses the first system font found for the numerals.
    ///
    /// Returns `false` (and logs a warning) when none loads; the clock then
    /// draws without numerals.
    pub fn load_system_font(&mut self) -> bool {
        self.numeral_font = fonts::load_system_font(&mut self.fonts);
        if self.numeral_font.is_none() {
            log::warn!("no usable system font found; numerals will not be drawn");
        }
        self.numeral_font.is_some()
    }

    /// Uses `bytes` (TrueType/OpenType) for the numerals.
    pub fn set_font(&mut self, bytes: &[u8]) -> Result<()> {
        let id = self.fonts.load_font(bytes)?;
        self.numeral_font = Some(id);
        Ok(())
    }

    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    /// Opens the clock window and ticks until it is closed.
    pub fn start(self, config: RuntimeConfig) -> Result<()>
    where
        T: 'static,
    {
        log::info!(
            "starting clock '{}' (time source: {})",
            config.title,
            self.time_source.name()
        );
        Runtime::run(config, GpuInit::default(), self)
    }
}

impl<T: TimeSource> App for ClockRenderer<T> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let time = self.time_source.now();
        let viewport = ctx.window.viewport();

        let Self { style, fonts, numeral_font, draw_list, circles, lines, text, .. } = self;

        draw_list.clear();
        face::draw_scene(draw_list, viewport, time, *numeral_font, style);

        log::trace!(
            "tick #{} {:02}:{:02}:{:02} ({} cmds, dt {:.3}s)",
            ctx.time.frame_index,
            time.hour,
            time.minute,
            time.second,
            draw_list.len(),
            ctx.time.dt
        );

        // Hands go last so they cover the numerals they sweep over.
        ctx.render(style.background, |rctx, target| {
            circles.render(rctx, target, draw_list);
            text.render(rctx, target, draw_list, fonts);
            lines.render(rctx, target, draw_list);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::{ClockTime, FixedTime};

    #[test]
    fn starts_without_a_font() {
        let clock = ClockRenderer::new();
        assert!(clock.numeral_font.is_none());
        assert_eq!(clock.style(), &ClockStyle::default());
    }

    #[test]
    fn rejects_invalid_font_bytes() {
        let mut clock = ClockRenderer::with_time_source(
            ClockStyle::default(),
            FixedTime(ClockTime::new(1, 2, 3)),
        );
        assert!(clock.set_font(b"garbage").is_err());
        assert!(clock.numeral_font.is_none());
    }
}
