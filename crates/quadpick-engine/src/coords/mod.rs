//! Coordinate types shared between the runtime and the studio.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Both types convert into `glam::Vec2` for the picking math.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
