//! Unit meshes shared by every instance of a helix primitive.
//!
//! Spheres are drawn from one unit sphere centred at the origin; connectors
//! from one open unit cylinder running along +Z from `z = 0` to `z = 1`.
//! Instances scale and place them with a model matrix.

use std::f32::consts::{PI, TAU};

use bytemuck::{Pod, Zeroable};

/// Slices around the unit sphere.
pub const SPHERE_SLICES: u32 = 12;
/// Stacks from pole to pole of the unit sphere.
pub const SPHERE_STACKS: u32 = 12;
/// Slices around the unit cylinder.
pub const CYLINDER_SLICES: u32 = 10;

/// Mesh vertex: object-space position and normal.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit outward normal.
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    /// Vertex buffer layout matching `@location(0)` position and
    /// `@location(1)` normal.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle list.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// Vertex data.
    pub vertices: Vec<MeshVertex>,
    /// Triangle indices into `vertices`.
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Number of indices, as drawn.
    #[must_use]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Append the two triangles of the quad `a b / c d`, where `a`/`b` lie
    /// on one ring and `c`/`d` on the next.
    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, c, b, b, c, d]);
    }
}

/// Unit-radius UV sphere centred at the origin.
///
/// Produces `(stacks + 1) * (slices + 1)` vertices; the seam column is
/// duplicated so every ring has the same length.
#[must_use]
pub fn unit_sphere(slices: u32, stacks: u32) -> Mesh {
    let slices = slices.max(3);
    let stacks = stacks.max(2);
    let ring = slices + 1;
    let mut mesh = Mesh::default();

    for stack in 0..=stacks {
        let phi = PI * stack as f32 / stacks as f32;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for slice in 0..=slices {
            let theta = TAU * slice as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            let p = [sin_phi * cos_theta, cos_phi, sin_phi * sin_theta];
            mesh.vertices.push(MeshVertex {
                position: p,
                normal: p,
            });
        }
    }

    for stack in 0..stacks {
        for slice in 0..slices {
            let a = stack * ring + slice;
            let c = a + ring;
            mesh.push_quad(a, a + 1, c, c + 1);
        }
    }
    mesh
}

/// Open unit cylinder of radius 1 along +Z from `z = 0` to `z = 1`.
///
/// No end caps: connectors always end inside a sphere.
#[must_use]
pub fn unit_cylinder(slices: u32) -> Mesh {
    let slices = slices.max(3);
    let mut mesh = Mesh::default();

    for slice in 0..=slices {
        let theta = TAU * slice as f32 / slices as f32;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let normal = [cos_theta, sin_theta, 0.0];
        for z in [0.0, 1.0] {
            mesh.vertices.push(MeshVertex {
                position: [cos_theta, sin_theta, z],
                normal,
            });
        }
    }

    for slice in 0..slices {
        let a = slice * 2;
        mesh.push_quad(a, a + 2, a + 1, a + 3);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn assert_indices_in_range(mesh: &Mesh) {
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        assert_eq!(mesh.indices.len() % 3, 0);
    }

    #[test]
    fn sphere_sizes() {
        let mesh = unit_sphere(SPHERE_SLICES, SPHERE_STACKS);
        assert_eq!(mesh.vertices.len(), 13 * 13);
        assert_eq!(mesh.index_count(), 12 * 12 * 6);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn sphere_vertices_lie_on_unit_sphere() {
        let mesh = unit_sphere(8, 6);
        for v in &mesh.vertices {
            let p = Vec3::from(v.position);
            assert!((p.length() - 1.0).abs() < 1e-5);
            assert_eq!(v.position, v.normal);
        }
    }

    #[test]
    fn cylinder_sizes() {
        let mesh = unit_cylinder(CYLINDER_SLICES);
        assert_eq!(mesh.vertices.len(), 22);
        assert_eq!(mesh.index_count(), 60);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn cylinder_spans_zero_to_one_along_z() {
        let mesh = unit_cylinder(6);
        let (lo, hi) = mesh.vertices.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v.position[2]), hi.max(v.position[2])),
        );
        assert_eq!((lo, hi), (0.0, 1.0));
        for v in &mesh.vertices {
            let radial = Vec3::new(v.position[0], v.position[1], 0.0);
            assert!((radial.length() - 1.0).abs() < 1e-5);
            assert_eq!(v.normal[2], 0.0);
        }
    }

    #[test]
    fn degenerate_resolution_is_raised() {
        assert_eq!(unit_cylinder(0).vertices.len(), 8);
        assert_eq!(unit_sphere(1, 1).vertices.len(), 4 * 3);
    }
}
