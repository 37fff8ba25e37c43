//! Clockface engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the clock:
//! window and tick loop, surface management, the draw list and the shape
//! renderers that consume it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
