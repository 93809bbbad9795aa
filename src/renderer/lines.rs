//! Grid and axes renderer.
//!
//! Both line sets live in one vertex buffer — the grid first, then the
//! axes — and are drawn as two contiguous ranges so each can be toggled
//! independently.

use crate::gpu::{DynamicBuffer, RenderContext};
use crate::options::DisplayOptions;
use crate::scene::grid::{build_axes, build_grid};

use super::pipeline::create_flat_pipeline;

/// Draws the reference grid and the coordinate axes.
pub struct LineRenderer {
    pipeline: wgpu::RenderPipeline,
    vertices: DynamicBuffer,
    grid_count: u32,
    axes_count: u32,
}

impl LineRenderer {
    /// Create the line pipeline and build the grid/axes geometry from
    /// the display options.
    pub fn new(
        context: &RenderContext,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
        display: &DisplayOptions,
    ) -> Self {
        let pipeline = create_flat_pipeline(
            context,
            "Line Pipeline",
            shader,
            wgpu::PrimitiveTopology::LineList,
            None,
            &[camera_layout],
        );

        let mut vertices =
            build_grid(display.grid_extent, display.grid_step);
        let grid_count = vertices.len() as u32;
        vertices.extend(build_axes(display.axis_length));
        let axes_count = vertices.len() as u32 - grid_count;

        let vertices = DynamicBuffer::new_with_data(
            &context.device,
            "Line Vertices",
            &vertices,
            wgpu::BufferUsages::VERTEX,
        );

        Self {
            pipeline,
            vertices,
            grid_count,
            axes_count,
        }
    }

    /// Draw the requested line sets. The camera bind group must already
    /// be set.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        show_grid: bool,
        show_axes: bool,
    ) {
        if !(show_grid && self.grid_count > 0)
            && !(show_axes && self.axes_count > 0)
        {
            return;
        }

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.vertices.buffer().slice(..));

        if show_grid && self.grid_count > 0 {
            render_pass.draw(0..self.grid_count, 0..1);
        }
        if show_axes && self.axes_count > 0 {
            render_pass.draw(
                self.grid_count..self.grid_count + self.axes_count,
                0..1,
            );
        }
    }
}
