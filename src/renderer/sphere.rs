//! Sphere chain renderer.
//!
//! One vertex buffer per sphere, two index buffers shared by all of them
//! (line list and triangle list from the template mesh).

use wgpu::util::DeviceExt;

use super::create_pipeline;
use crate::{
    draw::{DrawCommand, Topology},
    gpu::{render_context::RenderContext, vertex_store::VertexStore},
    orbit::SphereChain,
};

/// Which shared index buffer a sphere draw binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexList {
    Lines,
    Triangles,
}

impl IndexList {
    fn for_topology(topology: Topology) -> Option<Self> {
        match topology {
            Topology::LineList => Some(Self::Lines),
            Topology::TriangleList => Some(Self::Triangles),
            Topology::TriangleStrip => None,
        }
    }
}

/// Draws the spheres of a [`SphereChain`].
pub struct SphereRenderer {
    solid: wgpu::RenderPipeline,
    wireframe: wgpu::RenderPipeline,
    triangle_indices: wgpu::Buffer,
    line_indices: wgpu::Buffer,
    instances: Vec<VertexStore>,
}

impl SphereRenderer {
    /// Create pipelines, the shared index buffers and one vertex buffer per
    /// sphere in `chain`.
    pub fn new(
        context: &RenderContext,
        shader: &wgpu::ShaderModule,
        camera_layout: &wgpu::BindGroupLayout,
        chain: &SphereChain,
    ) -> Self {
        let solid = create_pipeline(
            context,
            "Sphere Solid",
            shader,
            camera_layout,
            Topology::TriangleList,
            true,
        );
        let wireframe = create_pipeline(
            context,
            "Sphere Wireframe",
            shader,
            camera_layout,
            Topology::LineList,
            true,
        );

        let mesh = chain.mesh();
        let triangle_indices = Self::index_buffer(
            context,
            "Sphere Triangle Indices",
            mesh.triangle_indices(),
        );
        let line_indices =
            Self::index_buffer(context, "Sphere Line Indices", mesh.line_indices());

        let mut renderer = Self {
            solid,
            wireframe,
            triangle_indices,
            line_indices,
            instances: Vec::with_capacity(chain.len()),
        };
        renderer.add_missing(context, chain);
        renderer
    }

    fn index_buffer(
        context: &RenderContext,
        label: &str,
        indices: &[u16],
    ) -> wgpu::Buffer {
        context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            })
    }

    fn add_missing(&mut self, context: &RenderContext, chain: &SphereChain) {
        for sphere in chain.iter().skip(self.instances.len()) {
            self.instances.push(VertexStore::new(
                &context.device,
                &format!("Sphere {} Vertices", sphere.index()),
                sphere.vertices(),
            ));
        }
    }

    /// Upload every sphere whose vertices changed since the last sync.
    pub fn sync(&mut self, context: &RenderContext, chain: &mut SphereChain) {
        self.add_missing(context, chain);
        for (store, sphere) in self.instances.iter().zip(chain.iter_mut()) {
            if sphere.take_dirty() {
                store.write(&context.queue, sphere.vertices());
            }
        }
    }

    /// Replay one indexed sphere draw. Strip commands and non-indexed
    /// topologies are skipped.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, command: &DrawCommand) {
        let DrawCommand::Indexed {
            sphere,
            topology,
            index_count,
        } = *command
        else {
            return;
        };
        let Some(store) = self.instances.get(sphere) else {
            log::warn!("draw for unknown sphere {sphere}");
            return;
        };
        let (pipeline, indices) = match IndexList::for_topology(topology) {
            Some(IndexList::Lines) => (&self.wireframe, &self.line_indices),
            Some(IndexList::Triangles) => (&self.solid, &self.triangle_indices),
            None => {
                log::warn!("sphere {sphere} has no {topology:?} index list");
                return;
            }
        };
        pass.set_pipeline(pipeline);
        pass.set_vertex_buffer(0, store.buffer().slice(..));
        pass.set_index_buffer(indices.slice(..), wgpu::IndexFormat::Uint16);
        pass.draw_indexed(0..index_count, 0, 0..1);
    }

    /// Number of sphere vertex buffers.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether no sphere buffers exist.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_have_no_sphere_index_list() {
        assert_eq!(
            IndexList::for_topology(Topology::LineList),
            Some(IndexList::Lines)
        );
        assert_eq!(
            IndexList::for_topology(Topology::TriangleList),
            Some(IndexList::Triangles)
        );
        assert_eq!(IndexList::for_topology(Topology::TriangleStrip), None);
    }
}
