use glam::Vec2;

use super::projection::Viewport;
use crate::options::CameraOptions;

/// A discrete change the user asked of the camera or the viewer.
///
/// Produced by the [`InputProcessor`](crate::input::InputProcessor) and
/// consumed by [`ViewState::apply`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewCommand {
    /// Leave the viewer.
    Close,
    /// Flip turntable auto-rotation.
    ToggleAutoRotate,
    /// Zoom by `delta` steps (positive = closer).
    Zoom {
        /// Signed number of zoom steps.
        delta: f32,
    },
    /// Primary button went down at `at`.
    BeginDrag {
        /// Pointer position in physical pixels.
        at: Vec2,
    },
    /// Primary button released.
    EndDrag,
    /// Pointer moved to `to` (rotates only while dragging).
    PointerMoved {
        /// Pointer position in physical pixels.
        to: Vec2,
    },
    /// The drawable area changed size.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
}

/// What the loop must do after a command has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Stop the loop and release resources.
    Stop,
    /// Reconfigure the viewport and projection.
    Resize(Viewport),
}

/// Result of [`ViewState::apply`]: the next state plus a loop signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// State after the command.
    pub state: ViewState,
    /// Signal for the owning loop.
    pub control: Control,
}

/// Everything the user can change about the view, as one immutable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Tilt around the horizontal axis, in degrees.
    pub rotation_x: f32,
    /// Spin around the vertical axis, in degrees.
    pub rotation_y: f32,
    /// Translation along the view axis (negative = away from the eye).
    pub zoom: f32,
    /// Whether the spin advances every frame.
    pub auto_rotate: bool,
    /// Last pointer position while the primary button is held.
    pub drag: Option<Vec2>,
}

impl ViewState {
    /// Initial state: default tilt and zoom, auto-rotation per `options`,
    /// no active drag.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            rotation_x: options.initial_rotation_x,
            rotation_y: options.initial_rotation_y,
            zoom: options.initial_zoom,
            auto_rotate: options.auto_rotate,
            drag: None,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Apply one command and return the next state.
    #[must_use]
    pub fn apply(self, command: ViewCommand, options: &CameraOptions) -> Step {
        let mut next = self;
        let mut control = Control::Continue;
        match command {
            ViewCommand::Close => control = Control::Stop,
            ViewCommand::ToggleAutoRotate => {
                next.auto_rotate = !next.auto_rotate;
            }
            ViewCommand::Zoom { delta } => {
                // max/min instead of clamp: a hand-edited preset with
                // min_zoom > max_zoom must not panic.
                next.zoom = (next.zoom + delta * options.zoom_step)
                    .max(options.min_zoom)
                    .min(options.max_zoom);
            }
            ViewCommand::BeginDrag { at } => next.drag = Some(at),
            ViewCommand::EndDrag => next.drag = None,
            ViewCommand::PointerMoved { to } => {
                if let Some(last) = next.drag {
                    let delta = (to - last) * options.drag_sensitivity;
                    next.rotation_y = wrap_degrees(next.rotation_y + delta.x);
                    next.rotation_x = wrap_degrees(next.rotation_x + delta.y);
                    next.drag = Some(to);
                    next.auto_rotate = false;
                }
            }
            ViewCommand::Resize { width, height } => {
                control = Control::Resize(Viewport::new(width, height));
            }
        }
        Step {
            state: next,
            control,
        }
    }

    /// Per-frame update: spin by the auto-rotate step when enabled.
    #[must_use]
    pub fn advance(self, options: &CameraOptions) -> Self {
        if !self.auto_rotate {
            return self;
        }
        Self {
            rotation_y: wrap_degrees(self.rotation_y + options.auto_rotate_step),
            ..self
        }
    }
}

fn wrap_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn opts() -> CameraOptions {
        CameraOptions::default()
    }

    fn apply_all(state: ViewState, commands: &[ViewCommand]) -> ViewState {
        commands
            .iter()
            .fold(state, |s, &c| s.apply(c, &opts()).state)
    }

    #[test]
    fn initial_state_matches_options() {
        let state = ViewState::new(&opts());
        assert_eq!(state.rotation_x, 15.0);
        assert_eq!(state.rotation_y, 0.0);
        assert_eq!(state.zoom, -60.0);
        assert!(state.auto_rotate);
        assert!(!state.is_dragging());
    }

    #[test]
    fn close_stops_without_touching_the_view() {
        let state = ViewState::new(&opts());
        let step = state.apply(ViewCommand::Close, &opts());
        assert_eq!(step.control, Control::Stop);
        assert_eq!(step.state, state);
    }

    #[test]
    fn toggle_flips_auto_rotate() {
        let state = ViewState::new(&opts());
        let off = state.apply(ViewCommand::ToggleAutoRotate, &opts()).state;
        assert!(!off.auto_rotate);
        let on = off.apply(ViewCommand::ToggleAutoRotate, &opts()).state;
        assert!(on.auto_rotate);
    }

    #[test]
    fn zoom_moves_by_fixed_steps_and_is_bounded() {
        let state = ViewState::new(&opts());
        let closer = state.apply(ViewCommand::Zoom { delta: 1.0 }, &opts()).state;
        assert_eq!(closer.zoom, -58.0);
        let farther =
            state.apply(ViewCommand::Zoom { delta: -1.0 }, &opts()).state;
        assert_eq!(farther.zoom, -62.0);
        let clamped =
            state.apply(ViewCommand::Zoom { delta: 1000.0 }, &opts()).state;
        assert_eq!(clamped.zoom, -2.0);
    }

    #[test]
    fn inverted_zoom_bounds_do_not_panic() {
        let mut bad = opts();
        bad.min_zoom = 10.0;
        bad.max_zoom = -10.0;
        let state = ViewState::new(&bad);
        let next = state.apply(ViewCommand::Zoom { delta: 1.0 }, &bad).state;
        assert!(next.zoom.is_finite());
    }

    #[test]
    fn pointer_motion_without_drag_is_ignored() {
        let state = ViewState::new(&opts());
        let next = state
            .apply(ViewCommand::PointerMoved { to: Vec2::new(50.0, 50.0) }, &opts())
            .state;
        assert_eq!(next, state);
    }

    #[test]
    fn drag_rotates_proportionally_and_disables_auto_rotate() {
        let state = apply_all(
            ViewState::new(&opts()),
            &[
                ViewCommand::BeginDrag { at: Vec2::new(100.0, 100.0) },
                ViewCommand::PointerMoved { to: Vec2::new(110.0, 96.0) },
            ],
        );
        assert_eq!(state.rotation_y, 5.0);
        assert_eq!(state.rotation_x, 13.0);
        assert_eq!(state.drag, Some(Vec2::new(110.0, 96.0)));
        assert!(!state.auto_rotate);
    }

    #[test]
    fn auto_rotate_stays_off_after_drag_until_toggled() {
        let dragged = apply_all(
            ViewState::new(&opts()),
            &[
                ViewCommand::BeginDrag { at: Vec2::ZERO },
                ViewCommand::PointerMoved { to: Vec2::new(4.0, 0.0) },
                ViewCommand::EndDrag,
            ],
        );
        assert!(!dragged.auto_rotate);
        let still = dragged.advance(&opts());
        assert_eq!(still.rotation_y, dragged.rotation_y);
        let resumed = dragged.apply(ViewCommand::ToggleAutoRotate, &opts()).state;
        assert!(resumed.auto_rotate);
    }

    #[test]
    fn advance_spins_by_the_configured_step() {
        let state = ViewState::new(&opts()).advance(&opts());
        assert!((state.rotation_y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn resize_reports_a_clamped_viewport() {
        let step = ViewState::new(&opts())
            .apply(ViewCommand::Resize { width: 640, height: 0 }, &opts());
        assert_eq!(step.control, Control::Resize(Viewport::new(640, 1)));
    }

    proptest! {
        #[test]
        fn drag_always_disables_auto_rotate(
            x0 in -2000.0f32..2000.0, y0 in -2000.0f32..2000.0,
            x1 in -2000.0f32..2000.0, y1 in -2000.0f32..2000.0,
        ) {
            let state = apply_all(
                ViewState::new(&opts()),
                &[
                    ViewCommand::BeginDrag { at: Vec2::new(x0, y0) },
                    ViewCommand::PointerMoved { to: Vec2::new(x1, y1) },
                ],
            );
            prop_assert!(!state.auto_rotate);
            prop_assert!(state.rotation_x.is_finite());
            prop_assert!(state.rotation_y.is_finite());
        }
    }
}
