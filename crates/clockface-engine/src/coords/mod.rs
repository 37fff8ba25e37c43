//! Coordinate and geometry types shared across engine renderers and the clock.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles follow the same convention: a positive rotation turns clockwise on
//! screen, so rotating "up" (`-Y`) by `π/2` points right.
//!
//! Renderers convert to NDC in shaders using a viewport uniform.

mod transform;
mod vec2;
mod viewport;

pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
