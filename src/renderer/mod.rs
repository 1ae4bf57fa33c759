//! Helix rendering: instanced lit meshes drawn into the window surface.

/// Converts a [`HelixFrame`](crate::geometry::HelixFrame) into per-instance
/// GPU records and draws them.
pub mod helix;
/// Reusable instanced indexed-mesh draw pass.
pub mod instanced;

pub use helix::{FrameInstances, HelixRenderer, MeshInstance};
