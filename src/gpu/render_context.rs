use super::texture::DepthTexture;
use crate::error::OrreryError;

/// The window surface with its device, queue and a depth attachment kept at
/// the surface size.
pub struct RenderContext {
    /// The wgpu logical device.
    pub device: wgpu::Device,
    /// The wgpu command queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    /// Depth attachment, recreated on resize.
    pub depth: DepthTexture,
}

impl RenderContext {
    /// Open a surface on `window` and pick an adapter that can present to
    /// it.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Surface`], [`OrreryError::NoAdapter`],
    /// [`OrreryError::Device`] or [`OrreryError::UnsupportedSurface`] for the
    /// step that failed.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, OrreryError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(OrreryError::Surface)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                power_preference: wgpu::PowerPreference::LowPower,
                ..Default::default()
            })
            .await
            .map_err(OrreryError::NoAdapter)?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("orrery device"),
                ..Default::default()
            })
            .await
            .map_err(OrreryError::Device)?;

        let (width, height) = surface_extent(size.0, size.1);
        let mut config = surface
            .get_default_config(&adapter, width, height)
            .ok_or(OrreryError::UnsupportedSurface)?;
        config.present_mode = wgpu::PresentMode::AutoVsync;
        surface.configure(&device, &config);
        let depth = DepthTexture::new(&device, width, height);

        let info = adapter.get_info();
        log::info!(
            "GPU ready: {} ({:?}), surface {:?} {width}x{height}",
            info.name,
            info.backend,
            config.format,
        );
        Ok(Self {
            device,
            queue,
            surface,
            config,
            depth,
        })
    }

    /// Color format of the surface, shared by every pipeline.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.config.width, self.config.height)
    }

    /// Resize the surface and depth attachment together. Zero-sized
    /// (minimized) windows keep the previous size.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 || self.size() == (width, height) {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
        self.depth = DepthTexture::new(&self.device, width, height);
        log::debug!("surface resized to {width}x{height}");
    }

    /// Configure the surface again at its current size, after the
    /// swapchain reported `Lost` or `Outdated`.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Next swapchain texture.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if the surface is lost, outdated or
    /// timed out.
    pub fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}

/// Surface dimensions with each side clamped to at least one pixel.
fn surface_extent(width: u32, height: u32) -> (u32, u32) {
    (width.max(1), height.max(1))
}

fn aspect_ratio(width: u32, height: u32) -> f32 {
    let (width, height) = surface_extent(width, height);
    width as f32 / height as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_keeps_a_pixel() {
        assert_eq!(surface_extent(0, 0), (1, 1));
        assert_eq!(surface_extent(800, 0), (800, 1));
    }

    #[test]
    fn aspect_of_degenerate_surface_is_finite() {
        assert_eq!(aspect_ratio(1600, 800), 2.0);
        assert_eq!(aspect_ratio(640, 0), 640.0);
        assert!(aspect_ratio(0, 0).is_finite());
    }
}
