//! Projection and hit-testing core.
//!
//! Converts the square's local corners into screen pixels or clip space and
//! answers "is the click inside the square, and how far is it from the nearest
//! corner". Nothing in this crate knows about windows or GPUs; hosts pass in
//! already-extracted primitive values (mouse pixel position, viewport size).
//!
//! Screen space:
//! - pixels, origin top-left
//! - +X right, +Y down
//!
//! Clip / NDC space:
//! - [-1, 1] per axis after the perspective divide
//! - +X right, +Y up

mod camera;
mod config;
mod hit_test;
mod projector;
mod square;

pub use camera::CameraState;
pub use config::{CameraConfig, CameraConfigError, CornerSource, NdcBounds, PickConfig};
pub use hit_test::{Bounds2, HitMethod, HitReport, HitTester};
pub use projector::{local_to_screen, screen_to_ndc};
pub use square::{Corner, Square, SquareVertex};

pub use glam::{Mat4, Vec2, Vec3, Vec4};
