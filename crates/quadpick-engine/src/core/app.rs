use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the studio.
///
/// All callbacks run on the event-loop thread, one at a time.
pub trait App {
    /// Called once the window exists, with its initial logical size.
    fn on_start(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called after the window's drawable area changed size (logical px).
    fn on_resize(&mut self, viewport: Viewport) -> AppControl {
        let _ = viewport;
        AppControl::Continue
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
