//! GPU resource management.
//!
//! wgpu device/surface setup, the depth attachment, and fixed-size vertex
//! buffers.

/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment sized to the surface.
pub mod texture;
/// Fixed-capacity vertex buffers.
pub mod vertex_store;
