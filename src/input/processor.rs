//! Converts raw platform events into viewer commands.
//!
//! The `InputProcessor` owns the transient pointer tracking and the
//! key-binding map. It sits between the raw window events and
//! [`ViewState::apply`](crate::camera::ViewState::apply).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use super::keyboard::KeyAction;
use crate::camera::ViewCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`ViewCommand`]s.
pub struct InputProcessor {
    /// Last known cursor position, used to anchor a drag.
    cursor: Vec2,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            key_bindings,
        }
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<ViewCommand> {
        match *event {
            InputEvent::CloseRequested => Some(ViewCommand::Close),
            InputEvent::KeyPressed { ref key } => self.handle_key_press(key),
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                Some(ViewCommand::PointerMoved { to: self.cursor })
            }
            InputEvent::MouseButton {
                button: MouseButton::Left,
                pressed,
            } => Some(if pressed {
                ViewCommand::BeginDrag { at: self.cursor }
            } else {
                ViewCommand::EndDrag
            }),
            InputEvent::MouseButton { .. } => None,
            InputEvent::Scroll { delta } => Some(ViewCommand::Zoom { delta }),
            InputEvent::Resized { width, height } => {
                Some(ViewCommand::Resize { width, height })
            }
        }
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ViewCommand> {
        self.key_bindings.lookup(key).map(|action| match action {
            KeyAction::Close => ViewCommand::Close,
            KeyAction::ToggleAutoRotate => ViewCommand::ToggleAutoRotate,
            KeyAction::ZoomIn => ViewCommand::Zoom { delta: 1.0 },
            KeyAction::ZoomOut => ViewCommand::Zoom { delta: -1.0 },
        })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
