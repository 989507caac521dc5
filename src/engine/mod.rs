pub mod command;

use self::command::OrreryCommand;
use crate::{
    camera::controller::CameraController,
    draw::DrawCommand,
    error::OrreryError,
    gpu::render_context::RenderContext,
    options::Options,
    renderer::{self, RibbonRenderer, SphereRenderer},
    scene::{Scene, SharedScene, Ticker},
};

/// Background clear color.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.04,
    a: 1.0,
};

/// The orrery rendering engine.
///
/// Owns the GPU context, the camera, both renderers and a [`SharedScene`].
/// Ticks run either on a background [`Ticker`] (see
/// [`start_ticker`](Self::start_ticker)) or by calling
/// [`tick`](Self::tick) directly. Frames read the scene without waiting:
/// if a tick holds it, the frame is skipped.
///
/// # Example
///
/// ```ignore
/// let mut engine = OrreryEngine::new(context, Options::default())?;
/// engine.start_ticker()?;
/// engine.execute(OrreryCommand::Harmonize);
/// engine.render()?;
/// ```
pub struct OrreryEngine {
    context: RenderContext,
    camera: CameraController,
    spheres: SphereRenderer,
    ribbon: RibbonRenderer,
    scene: SharedScene,
    ticker: Option<Ticker>,
    options: Options,
    frames: u64,
    dropped_frames: u64,
}

impl OrreryEngine {
    /// Build the scene described by `options` and its GPU resources.
    ///
    /// # Errors
    ///
    /// Returns an error if the options describe an unusable mesh or trail.
    pub fn new(
        context: RenderContext,
        options: Options,
    ) -> Result<Self, OrreryError> {
        let scene = Scene::new(&options)?;
        let camera = CameraController::new(&context, &options.camera);
        let shader = renderer::create_shader(&context);
        let spheres =
            SphereRenderer::new(&context, &shader, &camera.layout, scene.chain());
        let ribbon =
            RibbonRenderer::new(&context, &shader, &camera.layout, scene.trail());

        Ok(Self {
            context,
            camera,
            spheres,
            ribbon,
            scene: SharedScene::new(scene),
            ticker: None,
            options,
            frames: 0,
            dropped_frames: 0,
        })
    }

    /// Start ticking the scene on a background thread at the configured
    /// interval. Does nothing if already running.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::ThreadSpawn`] if the thread cannot start.
    pub fn start_ticker(&mut self) -> Result<(), OrreryError> {
        if self.ticker.is_none() {
            self.ticker = Some(Ticker::spawn(
                self.scene.clone(),
                self.options.timing.tick_interval(),
            )?);
        }
        Ok(())
    }

    /// Stop the background ticker, if running.
    pub fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.shutdown();
        }
    }

    /// Whether the background ticker is running.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Run one tick on the calling thread.
    pub fn tick(&self) {
        self.scene.tick();
    }

    /// Execute a command.
    pub fn execute(&mut self, command: OrreryCommand) {
        match command {
            OrreryCommand::RotateCamera { delta } => {
                self.camera.rig.rotate(delta);
            }
            OrreryCommand::Zoom { delta } => self.camera.rig.zoom(delta),
            _ => {
                log::debug!("execute {command:?}");
                let _ = self.scene.with(|scene| command.apply(scene));
            }
        }
    }

    /// Upload changed geometry and collect this frame's draws. `None` if a
    /// tick currently holds the scene.
    fn prepare(&mut self) -> Option<Vec<DrawCommand>> {
        let Some(mut scene) = self.scene.try_frame() else {
            self.dropped_frames += 1;
            return None;
        };
        self.spheres.sync(&self.context, scene.chain_mut());
        self.ribbon.sync(&self.context.queue, scene.trail_mut());
        let commands = scene.draw_commands();
        drop(scene);

        self.camera.update_gpu(&self.context.queue);
        Some(commands)
    }

    /// Record and submit the scene pass into `view`.
    fn encode(&self, view: &wgpu::TextureView, commands: &[DrawCommand]) {
        let mut encoder = self.context.device.create_command_encoder(
            &wgpu::CommandEncoderDescriptor {
                label: Some("orrery frame"),
            },
        );
        {
            let mut pass =
                encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("orrery render pass"),
                    color_attachments: &[Some(
                        wgpu::RenderPassColorAttachment {
                            view,
                            resolve_target: None,
                            ops: wgpu::Operations {
                                load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                                store: wgpu::StoreOp::Store,
                            },
                            depth_slice: None,
                        },
                    )],
                    depth_stencil_attachment: Some(
                        wgpu::RenderPassDepthStencilAttachment {
                            view: &self.context.depth.view,
                            depth_ops: Some(wgpu::Operations {
                                load: wgpu::LoadOp::Clear(1.0),
                                store: wgpu::StoreOp::Store,
                            }),
                            stencil_ops: None,
                        },
                    ),
                    timestamp_writes: None,
                    occlusion_query_set: None,
                });

            pass.set_bind_group(0, &self.camera.bind_group, &[]);
            for command in commands {
                match command {
                    DrawCommand::Indexed { .. } => {
                        self.spheres.draw(&mut pass, command);
                    }
                    DrawCommand::Strip { .. } => {
                        self.ribbon.draw(&mut pass, command);
                    }
                }
            }
        }
        let _ = self.context.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Render one frame to the window surface.
    ///
    /// Returns `Ok(false)` when the frame was dropped because a tick held
    /// the scene.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the swapchain texture cannot be
    /// acquired.
    pub fn render(&mut self) -> Result<bool, wgpu::SurfaceError> {
        let Some(commands) = self.prepare() else {
            return Ok(false);
        };
        let frame = self.context.acquire()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.encode(&view, &commands);
        frame.present();
        self.count_frame();
        Ok(true)
    }

    fn count_frame(&mut self) {
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "{} frames rendered, {} dropped",
                self.frames,
                self.dropped_frames
            );
        }
    }

    /// Resize the surface, depth attachment and camera aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.camera.resize(width, height);
    }

    /// Reconfigure the surface after it was lost or outdated.
    pub fn reconfigure_surface(&self) {
        self.context.reconfigure();
    }

    /// The shared scene, for hosts that drive controls directly.
    pub fn scene(&self) -> &SharedScene {
        &self.scene
    }

    /// Options the engine was built from.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The GPU context.
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// Frames skipped because a tick held the scene.
    pub fn dropped_frames(&self) -> u64 {
        self.dropped_frames
    }
}

impl Drop for OrreryEngine {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
