//! Camera system for the helix viewer.
//!
//! The camera is a fixed-axis turntable: a translation along the view axis
//! (zoom) followed by two Euler rotations. All interactive state lives in
//! the [`ViewState`] record, which is replaced, never mutated in place, by
//! every command.

/// GPU uniform layout.
pub mod core;
/// Viewport and view/projection matrices.
pub mod projection;
/// Per-tick view state record and the commands that update it.
pub mod state;

pub use projection::{CameraMatrices, Viewport};
pub use state::{Control, Step, ViewCommand, ViewState};
