// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Random DNA duplex generation with an interactive wgpu double-helix
//! viewer.
//!
//! A [`sequence::Duplex`] (a strand plus its base-wise complement) is
//! generated, summarized as text, and turned into a
//! [`geometry::HelixFrame`] of spheres and connector cylinders. The viewer
//! spins that frame under a mouse- and keyboard-driven camera.
//!
//! # Key entry points
//!
//! - [`sequence::Duplex::generate`] - random duplex of a given length
//! - [`sequence::stats`] / [`sequence::text`] - statistics and text helix
//! - [`geometry::HelixFrame::build`] - helix geometry for one duplex
//! - [`viewer::ViewerLoop`] - the per-tick viewer state machine
//! - [`viewer::probe`] and [`launch::spawn_viewer`] - capability check and
//!   fire-and-forget viewer process
//! - [`options::Options`] - helix, camera, color, key and window settings
//!
//! # Architecture
//!
//! Geometry is a pure function of the duplex and [`options::HelixOptions`].
//! The viewer loop drains input into [`camera::ViewState::apply`], advances
//! auto-rotation, and hands the frame and camera matrices to a
//! [`viewer::FrameSink`]. With the `viewer` feature the sink is a winit
//! window drawing instanced meshes through wgpu.

pub mod camera;
#[cfg(feature = "http")]
pub mod demo;
pub mod error;
pub mod geometry;
pub mod gpu;
pub mod input;
pub mod launch;
pub mod options;
pub mod renderer;
pub mod sequence;
pub mod viewer;

pub use error::DuplexError;
pub use geometry::HelixFrame;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use sequence::{Base, Duplex, Strand};
