use serde::{Deserialize, Serialize};

use super::helix::finite;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Initial tilt around the horizontal axis, in degrees.
    pub initial_rotation_x: f32,
    /// Initial spin around the vertical axis, in degrees.
    pub initial_rotation_y: f32,
    /// Initial translation along the view axis (negative = away).
    pub initial_zoom: f32,
    /// Farthest allowed zoom.
    pub min_zoom: f32,
    /// Nearest allowed zoom.
    pub max_zoom: f32,
    /// Zoom change per key press or scroll notch.
    pub zoom_step: f32,
    /// Degrees of rotation per pixel of drag.
    pub drag_sensitivity: f32,
    /// Degrees added to the vertical-axis spin per frame while
    /// auto-rotating.
    pub auto_rotate_step: f32,
    /// Whether the viewer starts auto-rotating.
    pub auto_rotate: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.5,
            zfar: 200.0,
            initial_rotation_x: 15.0,
            initial_rotation_y: 0.0,
            initial_zoom: -60.0,
            min_zoom: -190.0,
            max_zoom: -2.0,
            zoom_step: 2.0,
            drag_sensitivity: 0.5,
            auto_rotate_step: 0.4,
            auto_rotate: true,
        }
    }
}

impl CameraOptions {
    /// Reject a projection or control setting that would make the camera
    /// matrices non-finite.
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("camera.initial_rotation_x", self.initial_rotation_x),
            ("camera.initial_rotation_y", self.initial_rotation_y),
            ("camera.initial_zoom", self.initial_zoom),
            ("camera.min_zoom", self.min_zoom),
            ("camera.max_zoom", self.max_zoom),
            ("camera.zoom_step", self.zoom_step),
            ("camera.drag_sensitivity", self.drag_sensitivity),
            ("camera.auto_rotate_step", self.auto_rotate_step),
        ] {
            finite(name, value)?;
        }
        if !(self.fovy > 0.0 && self.fovy < 180.0) {
            return Err(format!(
                "camera.fovy must lie in (0, 180), got {}",
                self.fovy
            ));
        }
        if !(self.znear > 0.0 && self.znear < self.zfar && self.zfar.is_finite()) {
            return Err(format!(
                "camera planes need 0 < znear < zfar, got {} and {}",
                self.znear, self.zfar
            ));
        }
        Ok(())
    }
}
