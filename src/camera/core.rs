use super::projection::CameraMatrices;

/// Eye-space point light, matching a fixed lamp above and in front of the
/// viewer.
pub const LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 15.0];

/// Ambient term added to the diffuse light.
pub const AMBIENT: f32 = 0.3;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the camera matrices and the light.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// World → eye matrix, for eye-space lighting.
    pub view: [[f32; 4]; 4],
    /// Light position in eye space.
    pub light_position: [f32; 3],
    /// Ambient light level.
    pub ambient: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: glam::Mat4::IDENTITY.to_cols_array_2d(),
            view: glam::Mat4::IDENTITY.to_cols_array_2d(),
            light_position: LIGHT_POSITION,
            ambient: AMBIENT,
        }
    }

    /// Update uniform fields from this frame's matrices.
    pub fn update(&mut self, camera: &CameraMatrices) {
        self.view_proj = camera.view_proj().to_cols_array_2d();
        self.view = camera.view.to_cols_array_2d();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_sixteen_byte_aligned() {
        assert_eq!(size_of::<CameraUniform>(), 144);
        assert_eq!(size_of::<CameraUniform>() % 16, 0);
    }
}
