use super::types::InputEvent;

/// Input events delivered since the last frame, in arrival order.
///
/// The runtime clears it after every `App::on_frame`.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
