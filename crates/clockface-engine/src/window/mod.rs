//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the clock window, wires them to the GPU layer
//! and wakes the application once per tick.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
