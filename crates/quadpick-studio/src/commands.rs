//! Studio state and the commands that drive it.
//!
//! Window input is reduced to `StudioCommand`s carrying primitive values, so
//! everything here runs without a window.

use quadpick_engine::coords::{Vec2, Viewport};
use quadpick_engine::input::{InputEvent, InputFrame, Key, KeyState, MouseButton, MouseButtonState};
use quadpick_pick::{CameraState, HitMethod, HitReport, HitTester, PickConfig, Square};

use crate::config::StudioConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StudioCommand {
    /// Drawable area changed (logical px).
    Resize(Viewport),
    KeyPressed(Key),
    /// Primary button went down at this logical-pixel position.
    Click(Vec2),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Outcome {
    Nothing,
    Report(HitReport),
    MenuShown,
    MenuHidden,
    /// The click landed on the open menu and was not hit-tested.
    ClickConsumedByMenu,
    MethodChanged(HitMethod),
    Exit,
}

/// Everything the studio tracks between frames.
pub struct Studio {
    camera: CameraState,
    square: Square,
    pick: PickConfig,
    method: HitMethod,
    menu_visible: bool,
}

impl Studio {
    pub fn new(config: &StudioConfig, viewport: Viewport) -> Self {
        Self {
            camera: CameraState::new(config.camera, viewport.clamped().into()),
            square: Square::default(),
            pick: config.pick,
            method: config.initial_method,
            menu_visible: false,
        }
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn square(&self) -> &Square {
        &self.square
    }

    pub fn method(&self) -> HitMethod {
        self.method
    }

    pub fn menu_visible(&self) -> bool {
        self.menu_visible
    }

    pub fn handle(&mut self, cmd: StudioCommand) -> Outcome {
        match cmd {
            StudioCommand::Resize(viewport) => self.resize(viewport),
            StudioCommand::KeyPressed(key) => self.key(key),
            StudioCommand::Click(pos) => self.click(pos),
        }
    }

    fn resize(&mut self, viewport: Viewport) -> Outcome {
        if !viewport.is_valid() {
            log::warn!(
                "viewport {}x{} clamped to at least 1x1",
                viewport.width,
                viewport.height
            );
        }
        self.camera = self.camera.resized(viewport.clamped().into());
        Outcome::Nothing
    }

    fn key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Escape if !self.menu_visible => {
                self.menu_visible = true;
                Outcome::MenuShown
            }
            Key::Enter if self.menu_visible => {
                self.menu_visible = false;
                Outcome::MenuHidden
            }
            Key::Q if self.menu_visible => Outcome::Exit,
            Key::Digit1 => self.select(HitMethod::ScreenSpace),
            Key::Digit2 => self.select(HitMethod::NdcSpace),
            _ => Outcome::Nothing,
        }
    }

    fn select(&mut self, method: HitMethod) -> Outcome {
        if self.method == method {
            return Outcome::Nothing;
        }
        self.method = method;
        Outcome::MethodChanged(method)
    }

    fn click(&self, pos: Vec2) -> Outcome {
        if self.menu_visible {
            return Outcome::ClickConsumedByMenu;
        }

        let tester = HitTester::new(&self.camera, &self.square, self.pick);
        let report = tester.run(self.method, pos.into(), self.camera.viewport());
        Outcome::Report(report)
    }
}

/// Extracts studio commands from this frame's input, in arrival order.
///
/// Key repeats and non-primary buttons are ignored.
pub fn commands_from_input(frame: &InputFrame) -> Vec<StudioCommand> {
    frame
        .events
        .iter()
        .filter_map(|ev| match ev {
            InputEvent::Key { key, state: KeyState::Pressed, repeat: false, .. } => {
                Some(StudioCommand::KeyPressed(*key))
            }
            InputEvent::PointerButton(b)
                if b.button == MouseButton::Left && b.state == MouseButtonState::Pressed =>
            {
                Some(StudioCommand::Click(Vec2::new(b.x, b.y)))
            }
            _ => None,
        })
        .collect()
}
