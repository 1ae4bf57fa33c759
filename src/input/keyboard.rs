use serde::{Deserialize, Serialize};

/// Viewer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_auto_rotate = ["Space"]
/// zoom_in = ["Equal", "NumpadAdd"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Close the viewer window.
    Close,
    /// Toggle turntable auto-rotation.
    ToggleAutoRotate,
    /// Move the camera one zoom step closer.
    ZoomIn,
    /// Move the camera one zoom step away.
    ZoomOut,
}
