use winit::dpi::PhysicalSize;

use super::{GpuInit, SurfaceErrorAction};

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }

    caps.formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Extent the surface is configured with.
///
/// A window can report 0x0 before its first layout or while minimized. The
/// surface is then sized 1x1, the same floor the studio applies to its
/// viewport, and frames are skipped until the window is drawable again.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct SurfaceExtent {
    pub width: u32,
    pub height: u32,
    pub drawable: bool,
}

impl SurfaceExtent {
    pub(crate) fn from_window(size: PhysicalSize<u32>) -> Self {
        Self {
            width: size.width.max(1),
            height: size.height.max(1),
            drawable: size.width > 0 && size.height > 0,
        }
    }
}

/// Builds the initial surface configuration from the adapter's capabilities.
///
/// Returns `None` when the surface supports no formats at all.
pub(crate) fn initial_config(
    caps: &wgpu::SurfaceCapabilities,
    extent: SurfaceExtent,
    init: &GpuInit,
) -> Option<wgpu::SurfaceConfiguration> {
    let format = choose_surface_format(caps, init.prefer_srgb)?;
    Some(wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: extent.width,
        height: extent.height,
        present_mode: init.present_mode,
        alpha_mode: choose_alpha_mode(caps, init.alpha_mode),
        view_formats: vec![],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    })
}

/// Reconfigures the surface for `new_size`, leaving the configuration alone
/// while the window is not drawable.
pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    new_size: PhysicalSize<u32>,
) -> SurfaceExtent {
    let extent = SurfaceExtent::from_window(new_size);
    if !extent.drawable {
        log::debug!("window not drawable; surface stays {}x{}", config.width, config.height);
        return extent;
    }

    config.width = extent.width;
    config.height = extent.height;
    surface.configure(device, config);
    extent
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    extent: SurfaceExtent,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if extent.drawable {
                surface.configure(device, config);
            }
            log::debug!("surface {err:?}; reconfigured");
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => {
            log::error!("surface out of memory");
            SurfaceErrorAction::Fatal
        }
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => {
            log::warn!("surface {err:?}; skipping frame");
            SurfaceErrorAction::SkipFrame
        }
    }
}
