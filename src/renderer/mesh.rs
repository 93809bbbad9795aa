//! Triangle-mesh renderer: one flat-color pipeline over a growable
//! vertex buffer. The mesh can be replaced at any time via
//! [`MeshRenderer::write`].

use crate::gpu::{DynamicBuffer, RenderContext};
use crate::scene::Vertex;

use super::pipeline::create_flat_pipeline;

/// Draws the scene's triangle mesh with back-face culling.
pub struct MeshRenderer {
    pipeline: wgpu::RenderPipeline,
    vertices: DynamicBuffer,
    vertex_count: u32,
}

impl MeshRenderer {
    /// Create the triangle pipeline and an empty vertex buffer.
    pub fn new(
        context: &RenderContext,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let pipeline = create_flat_pipeline(
            context,
            "Mesh Pipeline",
            shader,
            wgpu::PrimitiveTopology::TriangleList,
            Some(wgpu::Face::Back),
            &[camera_layout],
        );

        let vertices = DynamicBuffer::new(
            &context.device,
            "Mesh Vertices",
            size_of::<Vertex>() * 3000,
            wgpu::BufferUsages::VERTEX,
        );

        Self {
            pipeline,
            vertices,
            vertex_count: 0,
        }
    }

    /// Replace the mesh vertices.
    pub fn write(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        vertices: &[Vertex],
    ) {
        let _ = self.vertices.write(device, queue, vertices);
        self.vertex_count = vertices.len() as u32;
    }

    /// Draw the mesh. The camera bind group must already be set.
    pub fn draw<'a>(&'a self, render_pass: &mut wgpu::RenderPass<'a>) {
        if self.vertex_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
