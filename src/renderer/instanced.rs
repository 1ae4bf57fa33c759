//! Instanced indexed-mesh draw pass.
//!
//! Every helix primitive follows the same pattern: one shared unit mesh,
//! one storage buffer of per-instance records, one bind group, and a
//! `draw_indexed(0..index_count, 0, 0..instance_count)` call.
//!
//! Bind group convention:
//! - group(0): storage buffer (instances)
//! - group(1): camera uniform

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use crate::gpu::{
    depth,
    dynamic_buffer::TypedBuffer,
    mesh::{Mesh, MeshVertex},
    render_context::RenderContext,
};

/// One mesh drawn many times: pipeline, geometry buffers, and a typed
/// instance storage buffer.
pub struct InstancedMeshPass<T: Pod + Zeroable> {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: TypedBuffer<T>,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    label: String,
    /// Instances drawn by the next [`draw`](Self::draw).
    pub instance_count: u32,
}

impl<T: Pod + Zeroable> InstancedMeshPass<T> {
    /// Create a pass for `mesh` using the given shader module.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        label: &str,
        mesh: &Mesh,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let device = &context.device;
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Vertices")),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&format!("{label} Indices")),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        // Storage bindings must not be empty; seed with one zeroed record.
        let instance_buffer = TypedBuffer::new_with_data(
            device,
            &format!("{label} Instances"),
            &[T::zeroed()],
            wgpu::BufferUsages::STORAGE,
        );
        let bind_group_layout = Self::create_bind_group_layout(device, label);
        let bind_group = Self::create_bind_group(
            device,
            &bind_group_layout,
            &instance_buffer,
            label,
        );
        let pipeline = Self::create_pipeline(
            context,
            label,
            shader,
            &bind_group_layout,
            camera_layout,
        );

        Self {
            pipeline,
            vertex_buffer,
            index_buffer,
            index_count: mesh.index_count(),
            instance_buffer,
            bind_group_layout,
            bind_group,
            label: label.to_owned(),
            instance_count: 0,
        }
    }

    fn create_bind_group_layout(
        device: &wgpu::Device,
        label: &str,
    ) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some(&format!("{label} Layout")),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Storage { read_only: true },
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        })
    }

    fn create_bind_group(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        buffer: &TypedBuffer<T>,
        label: &str,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.buffer().as_entire_binding(),
            }],
            label: Some(&format!("{label} Bind Group")),
        })
    }

    fn create_pipeline(
        context: &RenderContext,
        label: &str,
        shader: &wgpu::ShaderModule,
        bind_group_layout: &wgpu::BindGroupLayout,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> wgpu::RenderPipeline {
        let pipeline_layout = context.device.create_pipeline_layout(
            &wgpu::PipelineLayoutDescriptor {
                label: Some(&format!("{label} Pipeline Layout")),
                bind_group_layouts: &[bind_group_layout, camera_layout],
                push_constant_ranges: &[],
            },
        );

        context
            .device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(&format!("{label} Pipeline")),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: &[MeshVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: context.format(),
                        blend: Some(wgpu::BlendState::REPLACE),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: Some(depth::depth_stencil_state()),
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
                cache: None,
            })
    }

    /// Upload this frame's instances. Recreates the bind group if the
    /// buffer was reallocated.
    pub fn write_instances(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        instances: &[T],
    ) {
        let data = if instances.is_empty() {
            &[T::zeroed()]
        } else {
            instances
        };
        if self.instance_buffer.write(device, queue, data) {
            self.bind_group = Self::create_bind_group(
                device,
                &self.bind_group_layout,
                &self.instance_buffer,
                &self.label,
            );
        }
        self.instance_count = instances.len() as u32;
    }

    /// Record the draw. The camera bind group goes in group(1).
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        if self.instance_count == 0 || self.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_bind_group(1, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            self.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}
