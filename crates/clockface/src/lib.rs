//! Analog wall clock.
//!
//! A dial with numerals 1 to 12 and hour, minute and second hands, redrawn once
//! a second from the local time. [`draw_clock`] is the whole program; the
//! drawing itself lives in [`face`] and only needs a [`DrawList`] to record into.
//!
//! [`DrawList`]: clockface_engine::scene::DrawList

pub mod angles;
pub mod face;
pub mod fonts;
pub mod renderer;
pub mod style;
pub mod time_source;

pub use renderer::ClockRenderer;
pub use style::{ClockStyle, HandStyle};
pub use time_source::{ClockTime, FixedTime, LocalTime, TimeSource};

use clockface_engine::window::RuntimeConfig;

/// Opens the "clock" window and keeps it ticking until it is closed.
pub fn draw_clock() -> anyhow::Result<()> {
    let mut clock = ClockRenderer::new();
    clock.load_system_font();
    clock.start(RuntimeConfig::default())
}
