use glam::Vec3;

/// Camera and object placement parameters.
///
/// `model_scale` and `view_translation` are applied once when a
/// [`CameraState`](crate::CameraState) is built; the perspective parameters are
/// re-applied on every viewport change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub z_near: f32,
    pub z_far: f32,

    /// Uniform object-to-world scale.
    pub model_scale: f32,

    /// World-to-camera translation.
    pub view_translation: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            model_scale: 0.5,
            view_translation: Vec3::new(0.0, 0.0, -1.0),
        }
    }
}

impl CameraConfig {
    /// Checks that the parameters describe a usable perspective camera.
    pub fn validate(&self) -> Result<(), CameraConfigError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(CameraConfigError::FieldOfView(self.fov_y_degrees));
        }
        if !(self.z_near > 0.0 && self.z_near.is_finite()) {
            return Err(CameraConfigError::NearPlane(self.z_near));
        }
        if !(self.z_far > self.z_near && self.z_far.is_finite()) {
            return Err(CameraConfigError::FarPlane {
                near: self.z_near,
                far: self.z_far,
            });
        }
        if self.model_scale == 0.0 || !self.model_scale.is_finite() {
            return Err(CameraConfigError::ModelScale(self.model_scale));
        }
        if !self.view_translation.is_finite() {
            return Err(CameraConfigError::ViewTranslation);
        }
        Ok(())
    }
}

/// Rejected camera parameters.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CameraConfigError {
    #[error("vertical field of view must lie in (0, 180) degrees, got {0}")]
    FieldOfView(f32),

    #[error("near plane must be positive and finite, got {0}")]
    NearPlane(f32),

    #[error("far plane ({far}) must be finite and lie beyond the near plane ({near})")]
    FarPlane { near: f32, far: f32 },

    #[error("model scale must be non-zero and finite, got {0}")]
    ModelScale(f32),

    #[error("view translation must be finite")]
    ViewTranslation,
}

/// Where the screen-space hit test takes its corner positions from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum CornerSource {
    /// Local corners are fed to the screen mapping as if they were already
    /// clip-space, skipping model/view/projection. This is what the square
    /// picker has always reported.
    #[default]
    Raw,

    /// Corners go through the full model/view/projection transform first, so
    /// the reported rectangle is the one actually rasterized.
    Transformed,
}

/// How the NDC-space test turns the clip-space corners into bounds.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum NdcBounds {
    /// Per-axis min/max of all four corners.
    #[default]
    MinMax,

    /// Top-left corner as the minimum, bottom-right as the maximum, as in
    /// screen space. Clip-space y points up, so the y range is empty and
    /// every click reports outside.
    CornerPair,
}

/// Hit-test behavior switches.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PickConfig {
    pub corner_source: CornerSource,
    pub ndc_bounds: NdcBounds,
}
