use super::frame::InputFrame;
use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// Input state that outlives a frame.
///
/// Button events from the window system carry no position, so the pointer
/// and modifiers are tracked here and stamped onto each translated event.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies an input event to the current state and records it in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent { x, y, modifiers, .. }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
            }
        }

        frame.push_event(ev);
    }
}
