//! quadpick engine crate.
//!
//! Owns the platform + GPU runtime pieces the studio binary builds on: the
//! winit event loop, the wgpu device/surface, and platform-agnostic input.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
