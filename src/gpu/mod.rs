//! GPU plumbing: device/surface lifecycle, the depth buffer, and
//! growable vertex buffers.

/// Depth-buffer texture management.
pub mod depth;
/// Growable GPU buffers.
pub mod dynamic_buffer;
/// Core wgpu resources: device, queue, surface.
pub mod render_context;

pub use depth::DepthTexture;
pub use dynamic_buffer::DynamicBuffer;
pub use render_context::{RenderContext, RenderContextError};
