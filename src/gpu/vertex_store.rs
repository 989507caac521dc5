//! Fixed-capacity GPU vertex buffers.
//!
//! Sphere and ribbon vertex counts are fixed when the scene is built, so
//! the buffers are sized once and never reallocated.

use wgpu::util::DeviceExt;

use crate::geometry::Vertex;

/// A vertex buffer sized for exactly `capacity` vertices.
pub struct VertexStore {
    buffer: wgpu::Buffer,
    capacity: usize,
}

impl VertexStore {
    /// Buffer initialized from `vertices`; its capacity is their count.
    pub fn new(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Self {
        let buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(vertices),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            });
        Self {
            buffer,
            capacity: vertices.len(),
        }
    }

    /// Overwrite the buffer contents from the start.
    ///
    /// Vertices past the capacity are dropped with a warning; the buffer is
    /// never grown.
    pub fn write(&self, queue: &wgpu::Queue, vertices: &[Vertex]) {
        let vertices = if vertices.len() > self.capacity {
            log::warn!(
                "vertex store overflow: {} > {}, truncating",
                vertices.len(),
                self.capacity
            );
            &vertices[..self.capacity]
        } else {
            vertices
        };
        if !vertices.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(vertices));
        }
    }

    /// The underlying buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Capacity in vertices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
