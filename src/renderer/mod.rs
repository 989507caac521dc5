//! GPU renderers for the sphere chain and the ribbon trail.
//!
//! Both replay [`DrawCommand`](crate::draw::DrawCommand)s produced on the
//! CPU side; they own pipelines and buffers but no scene state.

pub mod ribbon;
pub mod sphere;

pub use ribbon::RibbonRenderer;
pub use sphere::SphereRenderer;

use crate::{
    draw::Topology, geometry::vertex::vertex_buffer_layout,
    gpu::render_context::RenderContext, gpu::texture::DEPTH_FORMAT,
};

/// Shared WGSL source for spheres and ribbon.
pub(crate) const ORBIT_SHADER: &str =
    include_str!("../../assets/shaders/orbit.wgsl");

/// Compile the shared shader module.
pub(crate) fn create_shader(context: &RenderContext) -> wgpu::ShaderModule {
    context
        .device
        .create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Orbit Shader"),
            source: wgpu::ShaderSource::Wgsl(ORBIT_SHADER.into()),
        })
}

/// Depth-stencil state; translucent geometry tests but does not write.
fn depth_stencil_state(depth_write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: depth_write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Create an alpha-blended pipeline for one topology.
pub(crate) fn create_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    camera_layout: &wgpu::BindGroupLayout,
    topology: Topology,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Layout")),
            bind_group_layouts: &[camera_layout],
            push_constant_ranges: &[],
        },
    );

    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(label),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_buffer_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: topology.to_wgpu(),
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(depth_stencil_state(depth_write)),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
