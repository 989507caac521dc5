//! Ribbon trail renderer.
//!
//! The whole circular store lives in one vertex buffer. Each strip command
//! binds the buffer at the run's byte offset and draws from vertex 0, so the
//! seam between the newest and oldest vertices is never bridged.

use super::create_pipeline;
use crate::{
    draw::{DrawCommand, Topology},
    gpu::{render_context::RenderContext, vertex_store::VertexStore},
    trail::RibbonTrail,
};

/// Draws a [`RibbonTrail`] as triangle strips.
pub struct RibbonRenderer {
    pipeline: wgpu::RenderPipeline,
    store: VertexStore,
}

impl RibbonRenderer {
    /// Create the strip pipeline and a vertex buffer sized to the trail.
    pub fn new(
        context: &RenderContext,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
        trail: &RibbonTrail,
    ) -> Self {
        let pipeline = create_pipeline(
            context,
            "Ribbon Trail",
            shader,
            camera_layout,
            Topology::TriangleStrip,
            false,
        );
        let store =
            VertexStore::new(&context.device, "Ribbon Vertices", trail.storage());
        Self { pipeline, store }
    }

    /// Upload the trail if it changed since the last sync.
    pub fn sync(&self, queue: &wgpu::Queue, trail: &mut RibbonTrail) {
        if trail.take_dirty() {
            self.store.write(queue, trail.storage());
        }
    }

    /// Replay one strip draw. Indexed commands are ignored.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, command: &DrawCommand) {
        let DrawCommand::Strip { vertex_count, .. } = *command else {
            return;
        };
        if vertex_count == 0 {
            return;
        }
        let offset = command.vertex_byte_offset();
        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.store.buffer().slice(offset..));
        pass.draw(0..vertex_count, 0..1);
    }

    /// Trail capacity in vertices.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }
}
