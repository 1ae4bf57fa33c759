use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Viewer window settings.
pub struct WindowOptions {
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Frame-rate target (0 = unlimited).
    pub target_fps: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 900,
            height: 700,
            title: "DNA Double Helix".into(),
            target_fps: 60,
        }
    }
}
