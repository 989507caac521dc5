use glam::{Quat, Vec2, Vec3};
use wgpu::util::DeviceExt;

use crate::{
    camera::core::{Camera, CameraUniform},
    gpu::render_context::RenderContext,
    options::CameraOptions,
};

const ROTATE_SPEED: f32 = 0.01;
const ZOOM_SPEED: f32 = 0.05;
const MIN_DISTANCE: f32 = 1.0;
const MAX_DISTANCE: f32 = 100.0;

/// Arcball placement of a [`Camera`] around the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    orientation: Quat,
    distance: f32,
    /// The placed camera.
    pub camera: Camera,
}

impl CameraRig {
    /// Rig at the configured distance on +Z.
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        Self {
            orientation: Quat::IDENTITY,
            distance: options.distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            camera: Camera::from_options(options, aspect),
        }
    }

    fn place(&mut self) {
        self.camera.eye = self.orientation * Vec3::Z * self.distance;
        self.camera.target = Vec3::ZERO;
        self.camera.up = self.orientation * Vec3::Y;
    }

    /// Rotate around the camera's up and right axes by a drag delta in
    /// pixels.
    pub fn rotate(&mut self, delta: Vec2) {
        let up = self.orientation * Vec3::Y;
        self.orientation =
            Quat::from_axis_angle(up, -delta.x * ROTATE_SPEED) * self.orientation;
        let right = self.orientation * Vec3::X;
        self.orientation = (Quat::from_axis_angle(right, -delta.y * ROTATE_SPEED)
            * self.orientation)
            .normalize();
        self.place();
    }

    /// Move toward (positive) or away from (negative) the origin.
    pub fn zoom(&mut self, delta: f32) {
        self.distance = (self.distance * (1.0 - delta * ZOOM_SPEED))
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
        self.place();
    }

    /// Distance from the origin.
    pub fn distance(&self) -> f32 {
        self.distance
    }
}

/// Camera rig plus its uniform buffer and bind group.
pub struct CameraController {
    /// Camera placement.
    pub rig: CameraRig,
    /// CPU copy of the uniform.
    pub uniform: CameraUniform,
    /// Uniform buffer bound at group 0.
    pub buffer: wgpu::Buffer,
    /// Layout of the camera bind group.
    pub layout: wgpu::BindGroupLayout,
    /// Camera bind group.
    pub bind_group: wgpu::BindGroup,
}

impl CameraController {
    /// Create the camera uniform and bind group.
    pub fn new(context: &RenderContext, options: &CameraOptions) -> Self {
        let rig = CameraRig::new(options, context.aspect());
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&rig.camera);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context.device.create_bind_group(&wgpu::BindGroupDescriptor {
                layout: &layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
                label: Some("Camera Bind Group"),
            });

        Self {
            rig,
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }

    /// Upload the current camera state.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(&self.rig.camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }

    /// Track a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.rig.camera.resize(width, height);
    }
}
