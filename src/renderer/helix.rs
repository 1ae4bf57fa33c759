use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use super::instanced::InstancedMeshPass;
use crate::{
    camera::{core::CameraUniform, CameraMatrices},
    geometry::HelixFrame,
    gpu::{
        depth::DepthTarget,
        mesh::{self, CYLINDER_SLICES, SPHERE_SLICES, SPHERE_STACKS},
        render_context::RenderContext,
    },
};

/// Per-instance record read by the mesh shader from its storage buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct MeshInstance {
    /// Unit mesh → world transform.
    pub model: [[f32; 4]; 4],
    /// RGBA color; alpha is always 1.
    pub color: [f32; 4],
}

impl MeshInstance {
    fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// A helix frame flattened into GPU instance records.
#[derive(Debug, Clone, Default)]
pub struct FrameInstances {
    /// One record per nucleotide sphere.
    pub spheres: Vec<MeshInstance>,
    /// One record per drawn connector, bonds and backbone alike.
    pub connectors: Vec<MeshInstance>,
}

impl FrameInstances {
    /// Flatten `frame`. Skipped connectors are already absent from it.
    #[must_use]
    pub fn from_frame(frame: &HelixFrame) -> Self {
        let spheres = frame
            .spheres
            .iter()
            .map(|s| {
                let model = Mat4::from_scale_rotation_translation(
                    Vec3::splat(s.radius),
                    glam::Quat::IDENTITY,
                    s.center,
                );
                MeshInstance::new(model, s.color)
            })
            .collect();
        let connectors = frame
            .connectors
            .iter()
            .map(|c| MeshInstance::new(c.placement.model_matrix(c.radius), c.color))
            .collect();
        Self {
            spheres,
            connectors,
        }
    }
}

/// Draws a helix frame: spheres, then connectors, into the window surface
/// with a depth buffer.
pub struct HelixRenderer {
    spheres: InstancedMeshPass<MeshInstance>,
    connectors: InstancedMeshPass<MeshInstance>,
    camera_uniform: CameraUniform,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
    depth: DepthTarget,
    clear_color: wgpu::Color,
}

impl HelixRenderer {
    /// Build pipelines and buffers for the given surface.
    #[must_use]
    pub fn new(context: &RenderContext, background: [f32; 3]) -> Self {
        let device = &context.device;
        let shader = device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/helix_mesh.wgsl"
        ));

        let camera_uniform = CameraUniform::new();
        let camera_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[camera_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let camera_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });
        let camera_bind_group =
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("Camera Bind Group"),
                layout: &camera_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                }],
            });

        let spheres = InstancedMeshPass::new(
            context,
            "Sphere",
            &mesh::unit_sphere(SPHERE_SLICES, SPHERE_STACKS),
            &shader,
            &camera_layout,
        );
        let connectors = InstancedMeshPass::new(
            context,
            "Connector",
            &mesh::unit_cylinder(CYLINDER_SLICES),
            &shader,
            &camera_layout,
        );

        Self {
            spheres,
            connectors,
            camera_uniform,
            camera_buffer,
            camera_bind_group,
            depth: DepthTarget::new(
                device,
                context.config.width,
                context.config.height,
            ),
            clear_color: wgpu::Color {
                r: f64::from(background[0]),
                g: f64::from(background[1]),
                b: f64::from(background[2]),
                a: 1.0,
            },
        }
    }

    /// Upload instance records for a new frame.
    pub fn upload(&mut self, context: &RenderContext, instances: &FrameInstances) {
        self.spheres.write_instances(
            &context.device,
            &context.queue,
            &instances.spheres,
        );
        self.connectors.write_instances(
            &context.device,
            &context.queue,
            &instances.connectors,
        );
        log::debug!(
            "uploaded {} spheres and {} connectors",
            instances.spheres.len(),
            instances.connectors.len()
        );
    }

    /// Upload this frame's camera matrices.
    pub fn update_camera(&mut self, context: &RenderContext, camera: &CameraMatrices) {
        self.camera_uniform.update(camera);
        context.queue.write_buffer(
            &self.camera_buffer,
            0,
            bytemuck::cast_slice(&[self.camera_uniform]),
        );
    }

    /// Match the depth target to a new surface size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth
            .resize(&context.device, context.config.width, context.config.height);
    }

    /// Clear, draw, and present one frame.
    ///
    /// # Errors
    ///
    /// Returns the [`wgpu::SurfaceError`] from acquiring the swapchain
    /// texture; nothing is drawn in that case.
    pub fn render(&self, context: &RenderContext) -> Result<(), wgpu::SurfaceError> {
        let frame = context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = context.create_encoder();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Helix Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(
                    wgpu::RenderPassDepthStencilAttachment {
                        view: self.depth.view(),
                        depth_ops: Some(wgpu::Operations {
                            load: wgpu::LoadOp::Clear(1.0),
                            store: wgpu::StoreOp::Store,
                        }),
                        stencil_ops: None,
                    },
                ),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.spheres.draw(&mut pass, &self.camera_bind_group);
            self.connectors.draw(&mut pass, &self.camera_bind_group);
        }
        context.submit(encoder);
        frame.present();
        Ok(())
    }
}
