//! Time subsystem.
//!
//! Provides testable timing utilities without coupling to the runtime:
//! - `TickSchedule` decides when the next redraw is due
//! - `FrameClock` stamps each presented frame with a `FrameTime`

mod frame_clock;
mod tick;

pub use frame_clock::{FrameClock, FrameTime};
pub use tick::TickSchedule;
