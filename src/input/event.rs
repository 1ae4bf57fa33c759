/// Platform-agnostic input events.
///
/// The window host queues these as they arrive; the viewer loop drains the
/// queue once per tick and feeds each one through an
/// [`InputProcessor`](super::InputProcessor).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The window manager asked the window to close.
    CloseRequested,
    /// A key was pressed.
    KeyPressed {
        /// Physical key in `winit::keyboard::KeyCode` debug format
        /// (`"Escape"`, `"Space"`, `"Equal"`, …).
        key: String,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Scroll wheel, in notches (positive = zoom in).
    Scroll {
        /// Scroll amount.
        delta: f32,
    },
    /// The drawable area changed size.
    Resized {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels (may be 0 while minimized).
        height: u32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Side buttons and anything else the platform reports.
    Other,
}

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back
            | winit::event::MouseButton::Forward
            | winit::event::MouseButton::Other(_) => Self::Other,
        }
    }
}
