use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::config::CameraConfig;

/// Immutable snapshot of the model, view and projection matrices.
///
/// `model` and `view` are fixed when the snapshot is first built. A viewport
/// change produces a new snapshot through [`CameraState::resized`], which
/// recomputes `projection` and nothing else.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    config: CameraConfig,
    viewport: Vec2,

    model: Mat4,
    view: Mat4,
    projection: Mat4,
}

impl CameraState {
    /// Builds the three matrices for `viewport` (width, height in pixels).
    pub fn new(config: CameraConfig, viewport: Vec2) -> Self {
        let model = Mat4::from_scale(Vec3::splat(config.model_scale));
        let view = Mat4::from_translation(config.view_translation);

        Self {
            config,
            viewport,
            model,
            view,
            projection: perspective(&config, viewport),
        }
    }

    /// Returns a snapshot for a new viewport size.
    pub fn resized(&self, viewport: Vec2) -> Self {
        Self {
            viewport,
            projection: perspective(&self.config, viewport),
            ..*self
        }
    }

    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    #[inline]
    pub fn model(&self) -> Mat4 {
        self.model
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    #[inline]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Maps a local-space point to clip space (`projection * view * model * p`).
    ///
    /// The result is not perspective-divided.
    #[inline]
    pub fn local_to_ndc(&self, point: Vec4) -> Vec4 {
        self.projection * self.view * self.model * point
    }
}

/// Right-handed perspective with a [0, 1] depth range.
///
/// Only the depth row differs from the OpenGL-style [-1, 1] matrix, so clip
/// x, y and w agree with it.
fn perspective(config: &CameraConfig, viewport: Vec2) -> Mat4 {
    let aspect = viewport.x / viewport.y;
    if !aspect.is_finite() || aspect <= 0.0 {
        log::warn!(
            "degenerate viewport {}x{}; projection will carry non-finite values",
            viewport.x,
            viewport.y
        );
    }

    Mat4::perspective_rh(
        config.fov_y_degrees.to_radians(),
        aspect,
        config.z_near,
        config.z_far,
    )
}
