//! Camera uniform buffer and bind group, refreshed once per frame.

use wgpu::util::DeviceExt;

use crate::camera::{Camera, CameraUniform};
use crate::gpu::RenderContext;

/// GPU-side camera state: uniform buffer, layout, and bind group.
pub struct CameraBinding {
    uniform: CameraUniform,
    buffer: wgpu::Buffer,
    /// Bind group layout shared by every pipeline reading the camera.
    pub layout: wgpu::BindGroupLayout,
    /// Bind group bound at group 0 of every draw.
    pub bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    /// Create the uniform buffer and its bind group.
    pub fn new(context: &RenderContext) -> Self {
        let uniform = CameraUniform::new();

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group = context.device.create_bind_group(
            &wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            },
        );

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Pull the camera's current view-projection matrix and upload it.
    pub fn update(&mut self, queue: &wgpu::Queue, camera: &mut Camera) {
        self.uniform.update_view_proj(camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}
