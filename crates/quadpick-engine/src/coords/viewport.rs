/// Viewport size in logical pixels.
///
/// This is the size the picking math maps clip space onto, and the size the
/// projection's aspect ratio is taken from.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Clamps both dimensions to at least one pixel.
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(self.width.max(1.0), self.height.max(1.0))
    }
}

impl From<Viewport> for glam::Vec2 {
    #[inline]
    fn from(v: Viewport) -> Self {
        glam::Vec2::new(v.width, v.height)
    }
}
