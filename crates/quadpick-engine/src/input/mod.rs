//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `translate` turns window system events into `InputEvent`s.

mod frame;
pub(crate) mod translate;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
