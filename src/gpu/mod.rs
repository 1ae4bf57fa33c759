//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable instance buffers,
//! the depth target, and the unit meshes every helix primitive is drawn
//! from.

/// Depth attachment sized to the surface.
pub mod depth;
/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Unit sphere and unit cylinder triangle meshes.
pub mod mesh;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
