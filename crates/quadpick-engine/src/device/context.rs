use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::surface::{self, SurfaceExtent};
use super::{GpuFrame, GpuInit, SurfaceErrorAction};

/// The device, queue and window surface the square is drawn with.
///
/// The surface borrows the window for `'w`; the runtime keeps both in one
/// self-referencing entry so the window always outlives the `Gpu`.
pub struct Gpu<'w> {
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    extent: SurfaceExtent,
}

impl<'w> Gpu<'w> {
    /// Opens a device for `window` and configures its surface.
    ///
    /// A window that is still 0x0 gets a 1x1 surface; nothing is drawn
    /// until the first real resize.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let extent = SurfaceExtent::from_window(window.inner_size());

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no GPU adapter can present to the window")?;
        log::info!("using adapter {:?}", adapter.get_info().name);

        let (device, queue) = open_device(&adapter, &init).await?;

        let config = surface::initial_config(&surface.get_capabilities(&adapter), extent, &init)
            .context("surface reports no supported formats")?;
        surface.configure(&device, &config);
        log::debug!(
            "surface {:?} {}x{} ({:?})",
            config.format,
            config.width,
            config.height,
            config.alpha_mode
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            extent,
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// False while the window has no drawable area.
    pub fn is_drawable(&self) -> bool {
        self.extent.drawable
    }

    /// Follows the window's physical size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.extent = surface::apply_resize(&self.surface, &self.device, &mut self.config, new_size);
    }

    /// Acquires the next surface texture and opens an encoder for it.
    pub fn begin_frame(&self) -> std::result::Result<GpuFrame, SurfaceError> {
        let surface_texture = self.surface.get_current_texture()?;
        let view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("quadpick frame encoder"),
            });

        Ok(GpuFrame {
            surface_texture,
            view,
            encoder,
        })
    }

    /// Submits the recorded commands and presents the frame.
    pub fn submit(&self, frame: GpuFrame) {
        let GpuFrame { surface_texture, view, encoder } = frame;
        self.queue.submit(std::iter::once(encoder.finish()));
        drop(view);
        surface_texture.present();
    }

    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        surface::map_surface_error(&self.surface, &self.device, &self.config, self.extent, err)
    }
}

async fn open_device(adapter: &wgpu::Adapter, init: &GpuInit) -> Result<(wgpu::Device, wgpu::Queue)> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("quadpick device"),
            required_features: init.required_features,
            required_limits: init.required_limits.clone(),
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to open a wgpu device")
}
