//! Color model shared between the studio and the render context.

pub mod color;

pub use color::Color;
