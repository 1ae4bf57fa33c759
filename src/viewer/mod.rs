//! The interactive viewer: a per-tick state machine over a [`FrameSink`].
//!
//! [`ViewerLoop`] owns the helix frame, the [`ViewState`] and the input
//! processor. Each [`tick`](ViewerLoop::tick) drains the queued input,
//! updates the view, and presents one frame. The window host (feature
//! `viewer`) drives it from winit; tests drive it with a recording sink.
//!
//! ```no_run
//! # #[cfg(feature = "viewer")]
//! # fn main() -> Result<(), duplex::error::DuplexError> {
//! use duplex::{sequence::Duplex, viewer::Viewer};
//!
//! let duplex = Duplex::generate(100, &mut rand::rng());
//! Viewer::builder().with_duplex(duplex).build().run()
//! # }
//! # #[cfg(not(feature = "viewer"))]
//! # fn main() {}
//! ```

/// Startup check for a usable rendering backend.
pub mod capability;
/// Frame pacing.
pub mod timing;
#[cfg(feature = "viewer")]
mod window;

use std::fmt;

pub use capability::{probe, Availability};
pub use timing::FrameTiming;
#[cfg(feature = "viewer")]
pub use window::{Viewer, ViewerBuilder};

use crate::{
    camera::{CameraMatrices, Control, ViewState, Viewport},
    geometry::HelixFrame,
    input::{InputEvent, InputProcessor},
    options::{CameraOptions, Options},
    sequence::Duplex,
};

/// Lifecycle of a [`ViewerLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Ticking and presenting frames.
    Running,
    /// Terminal: the sink has been released.
    Stopped,
}

/// Why a frame could not be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// The surface no longer matches the window; reconfigure and carry on.
    Outdated,
    /// Anything else. The frame is dropped.
    Failed(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outdated => write!(f, "surface outdated"),
            Self::Failed(msg) => write!(f, "present failed: {msg}"),
        }
    }
}

impl std::error::Error for PresentError {}

/// Where frames go. The wgpu window host implements this; so do tests.
pub trait FrameSink {
    /// The drawable area changed (or must be reconfigured at this size).
    fn resize(&mut self, viewport: Viewport);

    /// Draw `frame` under `camera` and show it.
    ///
    /// # Errors
    ///
    /// Returns [`PresentError`] when the frame could not be shown.
    fn present(
        &mut self,
        frame: &HelixFrame,
        camera: &CameraMatrices,
    ) -> Result<(), PresentError>;

    /// Free all rendering resources. Called exactly once, when the loop
    /// stops.
    fn release(&mut self);
}

/// Per-tick driver: drain input, update the view, present.
pub struct ViewerLoop<S: FrameSink> {
    frame: HelixFrame,
    camera: CameraOptions,
    input: InputProcessor,
    view: ViewState,
    viewport: Viewport,
    sink: S,
    state: LoopState,
    reconfigure: bool,
    failing: bool,
    frames: u64,
}

impl<S: FrameSink> ViewerLoop<S> {
    /// Build the helix for `duplex` and enter `Running` with the initial
    /// view.
    #[must_use]
    pub fn new(
        duplex: &Duplex,
        options: &Options,
        sink: S,
        viewport: Viewport,
    ) -> Self {
        let frame = HelixFrame::build(duplex, &options.helix, &options.colors);
        log::info!(
            "viewer started: {} base pairs, {} spheres, {} connectors",
            duplex.len(),
            frame.spheres.len(),
            frame.connectors.len()
        );
        if frame.degenerate > 0 {
            log::debug!("skipped {} zero-length connectors", frame.degenerate);
        }

        Self {
            frame,
            camera: options.camera.clone(),
            input: InputProcessor::with_key_bindings(options.keybindings.clone()),
            view: ViewState::new(&options.camera),
            viewport,
            sink,
            state: LoopState::Running,
            reconfigure: false,
            failing: false,
            frames: 0,
        }
    }

    /// Run one tick over the events queued since the last one.
    ///
    /// Returns [`LoopState::Stopped`] once a close command has been seen;
    /// ticks after that do nothing.
    pub fn tick<I>(&mut self, events: I) -> LoopState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if self.state == LoopState::Stopped {
            return LoopState::Stopped;
        }
        if std::mem::take(&mut self.reconfigure) {
            self.sink.resize(self.viewport);
        }

        for event in events {
            let Some(command) = self.input.handle_event(&event) else {
                continue;
            };
            let step = self.view.apply(command, &self.camera);
            self.view = step.state;
            match step.control {
                Control::Continue => {}
                Control::Stop => {
                    self.shutdown();
                    return LoopState::Stopped;
                }
                Control::Resize(viewport) => {
                    self.viewport = viewport;
                    self.sink.resize(viewport);
                }
            }
        }

        self.view = self.view.advance(&self.camera);
        let camera = CameraMatrices::new(
            &self.view,
            self.viewport,
            &self.camera,
            self.frame.half_height,
        );
        match self.sink.present(&self.frame, &camera) {
            Ok(()) => {
                self.failing = false;
                self.frames += 1;
            }
            Err(PresentError::Outdated) => self.reconfigure = true,
            Err(e) => {
                if !self.failing {
                    log::warn!("{e}");
                }
                self.failing = true;
            }
        }
        LoopState::Running
    }

    /// Stop without a close event (window destroyed, process exiting).
    /// Releases the sink if it has not been released yet.
    pub fn shutdown(&mut self) {
        if self.state == LoopState::Running {
            self.state = LoopState::Stopped;
            self.sink.release();
            log::info!("viewer stopped after {} frames", self.frames);
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Current camera state.
    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The geometry presented every tick.
    #[must_use]
    pub fn frame(&self) -> &HelixFrame {
        &self.frame
    }

    /// The sink frames are presented to.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Frames presented successfully so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<S: FrameSink> Drop for ViewerLoop<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        presents: usize,
        resizes: Vec<Viewport>,
        releases: usize,
        fail_with: Option<PresentError>,
    }

    impl FrameSink for CountingSink {
        fn resize(&mut self, viewport: Viewport) {
            self.resizes.push(viewport);
        }

        fn present(
            &mut self,
            _frame: &HelixFrame,
            _camera: &CameraMatrices,
        ) -> Result<(), PresentError> {
            self.presents += 1;
            self.fail_with.clone().map_or(Ok(()), Err)
        }

        fn release(&mut self) {
            self.releases += 1;
        }
    }

    fn viewer(sink: CountingSink) -> ViewerLoop<CountingSink> {
        let duplex = Duplex::from_primary("ATGCATGCAT".parse().unwrap());
        ViewerLoop::new(&duplex, &Options::default(), sink, Viewport::new(900, 700))
    }

    fn key(k: &str) -> InputEvent {
        InputEvent::KeyPressed { key: k.into() }
    }

    #[test]
    fn auto_rotate_advances_each_tick() {
        let mut viewer = viewer(CountingSink::default());
        let start = viewer.view().rotation_y;
        let _ = viewer.tick([]);
        let _ = viewer.tick([]);
        let step = CameraOptions::default().auto_rotate_step;
        assert!((viewer.view().rotation_y - (start + 2.0 * step)).abs() < 1e-4);
        assert_eq!(viewer.sink().presents, 2);
        assert_eq!(viewer.frames(), 2);
    }

    #[test]
    fn escape_stops_before_presenting() {
        let mut viewer = viewer(CountingSink::default());
        assert_eq!(viewer.tick([key("Escape")]), LoopState::Stopped);
        assert_eq!(viewer.sink().presents, 0);
        assert_eq!(viewer.sink().releases, 1);
    }

    #[test]
    fn ticks_after_stop_are_noops() {
        let mut viewer = viewer(CountingSink::default());
        let _ = viewer.tick([InputEvent::CloseRequested]);
        assert_eq!(viewer.tick([key("Space")]), LoopState::Stopped);
        viewer.shutdown();
        assert_eq!(viewer.sink().releases, 1);
        assert_eq!(viewer.sink().presents, 0);
    }

    #[test]
    fn space_stops_auto_rotation() {
        let mut viewer = viewer(CountingSink::default());
        let _ = viewer.tick([key("Space")]);
        let y = viewer.view().rotation_y;
        let _ = viewer.tick([]);
        assert!(!viewer.view().auto_rotate);
        assert_eq!(viewer.view().rotation_y, y);
    }

    #[test]
    fn drag_rotates_and_disables_auto_rotate() {
        let mut viewer = viewer(CountingSink::default());
        let start = viewer.view();
        let _ = viewer.tick([
            InputEvent::CursorMoved { x: 100.0, y: 100.0 },
            InputEvent::MouseButton {
                button: crate::input::MouseButton::Left,
                pressed: true,
            },
            InputEvent::CursorMoved { x: 120.0, y: 90.0 },
        ]);
        let view = viewer.view();
        assert!(!view.auto_rotate);
        assert!(view.is_dragging());
        assert!((view.rotation_y - (start.rotation_y + 10.0)).abs() < 1e-4);
        assert!((view.rotation_x - (start.rotation_x - 5.0)).abs() < 1e-4);
    }

    #[test]
    fn resize_reaches_the_sink_clamped() {
        let mut viewer = viewer(CountingSink::default());
        let _ = viewer.tick([InputEvent::Resized {
            width: 640,
            height: 0,
        }]);
        assert_eq!(viewer.viewport(), Viewport::new(640, 1));
        assert_eq!(viewer.sink().resizes, vec![Viewport::new(640, 1)]);
        assert_eq!(viewer.sink().presents, 1);
    }

    #[test]
    fn outdated_surface_is_reconfigured_next_tick() {
        let mut viewer = viewer(CountingSink {
            fail_with: Some(PresentError::Outdated),
            ..CountingSink::default()
        });
        let _ = viewer.tick([]);
        assert!(viewer.sink().resizes.is_empty());
        let _ = viewer.tick([]);
        assert_eq!(viewer.sink().resizes, vec![Viewport::new(900, 700)]);
        assert_eq!(viewer.frames(), 0);
    }

    #[test]
    fn failed_present_is_not_retried_within_a_tick() {
        let mut viewer = viewer(CountingSink {
            fail_with: Some(PresentError::Failed("device lost".into())),
            ..CountingSink::default()
        });
        assert_eq!(viewer.tick([]), LoopState::Running);
        assert_eq!(viewer.sink().presents, 1);
        assert_eq!(viewer.state(), LoopState::Running);
    }

    #[test]
    fn failure_streak_is_reported_once_and_reset_by_success() {
        let mut viewer = viewer(CountingSink {
            fail_with: Some(PresentError::Failed("timeout".into())),
            ..CountingSink::default()
        });
        assert!(!viewer.failing);
        let _ = viewer.tick([]);
        // Warned on this tick; the flag suppresses the next one.
        assert!(viewer.failing);
        let _ = viewer.tick([]);
        assert!(viewer.failing);
        assert_eq!(viewer.frames(), 0);

        viewer.sink.fail_with = None;
        let _ = viewer.tick([]);
        assert!(!viewer.failing);
        assert_eq!(viewer.frames(), 1);

        viewer.sink.fail_with = Some(PresentError::Failed("timeout".into()));
        let _ = viewer.tick([]);
        assert!(viewer.failing);
        assert_eq!(viewer.sink().presents, 4);
        assert_eq!(viewer.state(), LoopState::Running);
    }

    #[test]
    fn present_error_messages() {
        assert_eq!(PresentError::Outdated.to_string(), "surface outdated");
        assert_eq!(
            PresentError::Failed("timeout".into()).to_string(),
            "present failed: timeout"
        );
    }
}
