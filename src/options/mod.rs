//! Centralized viewer options with TOML preset support.
//!
//! Helix dimensions, camera behavior, colors, key bindings and window
//! settings are consolidated here. Options serialize to/from TOML so a
//! preset file can be handed to the viewer process with `--options`.

mod camera;
mod colors;
mod helix;
mod keybindings;
mod window;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use helix::HelixOptions;
pub use keybindings::KeybindingOptions;
use serde::{Deserialize, Serialize};
pub use window::WindowOptions;

use crate::error::DuplexError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Helix dimensions and connector radii.
    pub helix: HelixOptions,
    /// Projection and interaction parameters.
    pub camera: CameraOptions,
    /// Base, connector and background colors.
    pub colors: ColorOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
    /// Window size, title and frame rate.
    pub window: WindowOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`DuplexError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml`](Self::from_toml).
    pub fn load(path: &Path) -> Result<Self, DuplexError> {
        let content = std::fs::read_to_string(path).map_err(DuplexError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text.
    ///
    /// # Errors
    ///
    /// [`DuplexError::OptionsParse`] for malformed TOML, a non-finite helix
    /// or camera value, a non-positive `helix.turn_period`, a negative
    /// radius, `camera.fovy` outside (0, 180), or clipping planes not
    /// ordered `0 < znear < zfar`.
    pub fn from_toml(content: &str) -> Result<Self, DuplexError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| DuplexError::OptionsParse(e.to_string()))?;
        opts.helix
            .validate()
            .and_then(|()| opts.camera.validate())
            .map_err(DuplexError::OptionsParse)?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed), creating parent
    /// directories.
    ///
    /// # Errors
    ///
    /// [`DuplexError::OptionsParse`] if serialization fails,
    /// [`DuplexError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), DuplexError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DuplexError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DuplexError::Io)?;
        }
        std::fs::write(path, content).map_err(DuplexError::Io)
    }
}
