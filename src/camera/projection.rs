use glam::{Mat4, Vec3};

use super::state::ViewState;
use crate::options::CameraOptions;

/// Drawable area in physical pixels. Both sides are at least 1, so the
/// aspect ratio is always finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels (≥ 1).
    pub width: u32,
    /// Height in pixels (≥ 1).
    pub height: u32,
}

impl Viewport {
    /// Build a viewport, clamping zero-sized sides to 1 (a minimized window
    /// reports a height of 0).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Width / height.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

/// View and projection matrices for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraMatrices {
    /// World → eye transform.
    pub view: Mat4,
    /// Eye → clip transform (wgpu depth range [0, 1]).
    pub projection: Mat4,
}

impl CameraMatrices {
    /// Compose the camera transform for `state`: translate by zoom, rotate
    /// about X then Y, then drop the helix by `half_height` so its middle
    /// sits at the origin.
    #[must_use]
    pub fn new(
        state: &ViewState,
        viewport: Viewport,
        options: &CameraOptions,
        half_height: f32,
    ) -> Self {
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, state.zoom))
            * Mat4::from_rotation_x(state.rotation_x.to_radians())
            * Mat4::from_rotation_y(state.rotation_y.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, -half_height, 0.0));
        let projection = Mat4::perspective_rh(
            options.fovy.to_radians(),
            viewport.aspect(),
            options.znear,
            options.zfar,
        );
        Self { view, projection }
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.projection * self.view
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn zero_height_is_clamped_to_one() {
        let vp = Viewport::new(800, 0);
        assert_eq!(vp.height, 1);
        assert_eq!(vp.aspect(), 800.0);
    }

    #[test]
    fn helix_middle_lands_on_the_view_axis() {
        let opts = CameraOptions::default();
        let mut state = ViewState::new(&opts);
        state.rotation_x = 0.0;
        let cam = CameraMatrices::new(&state, Viewport::new(900, 700), &opts, 25.0);
        let eye = cam.view.transform_point3(Vec3::new(0.0, 25.0, 0.0));
        assert!((eye - Vec3::new(0.0, 0.0, -60.0)).length() < 1e-4);
    }

    #[test]
    fn helix_center_projects_to_screen_center() {
        let opts = CameraOptions::default();
        let state = ViewState::new(&opts);
        let cam = CameraMatrices::new(&state, Viewport::new(900, 700), &opts, 10.0);
        let clip = cam.view_proj() * Vec3::new(0.0, 10.0, 0.0).extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    proptest! {
        #[test]
        fn projection_is_finite_for_any_size(width in 1u32..10_000, height in 0u32..10_000) {
            let opts = CameraOptions::default();
            let state = ViewState::new(&opts);
            let cam = CameraMatrices::new(&state, Viewport::new(width, height), &opts, 5.0);
            prop_assert!(cam.projection.is_finite());
            prop_assert!(cam.view.is_finite());
        }
    }
}
