use quadpick_engine::device::GpuInit;
use quadpick_engine::logging::LoggingConfig;
use quadpick_engine::paint::Color;
use quadpick_engine::window::RuntimeConfig;
use quadpick_pick::{CameraConfig, HitMethod, PickConfig};

/// Everything the studio needs to start.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub runtime: RuntimeConfig,
    pub gpu: GpuInit,
    pub logging: LoggingConfig,

    pub camera: CameraConfig,
    pub pick: PickConfig,

    /// Hit test run on click until the user switches with `1` / `2`.
    pub initial_method: HitMethod,

    /// White with zero alpha. rgb > a is intentional here; with an opaque
    /// surface the alpha is ignored and the window shows white.
    pub clear_color: Color,

    /// Overlay composited over the scene while the menu is open.
    pub menu_dim: Color,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            runtime: RuntimeConfig::default(),
            gpu: GpuInit::default(),
            logging: LoggingConfig::default(),
            camera: CameraConfig::default(),
            pick: PickConfig::default(),
            initial_method: HitMethod::ScreenSpace,
            clear_color: Color::from_premul(1.0, 1.0, 1.0, 0.0),
            menu_dim: Color::from_straight(0.0, 0.0, 0.0, 0.6),
        }
    }
}

impl StudioConfig {
    /// Replaces an unusable camera configuration with the defaults.
    pub fn sanitized(mut self) -> Self {
        if let Err(e) = self.camera.validate() {
            log::warn!("invalid camera configuration ({e}); using defaults");
            self.camera = CameraConfig::default();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_classic_scene() {
        let c = StudioConfig::default();
        assert_eq!(c.camera, CameraConfig::default());
        assert_eq!(c.initial_method, HitMethod::ScreenSpace);
        assert_eq!(c.clear_color, Color::from_premul(1.0, 1.0, 1.0, 0.0));
        assert_eq!(c.runtime.initial_size.width, 800.0);
        assert_eq!(c.runtime.initial_size.height, 600.0);
    }

    #[test]
    fn sanitized_replaces_invalid_camera() {
        let mut c = StudioConfig::default();
        c.camera.z_far = 0.0;
        assert_eq!(c.sanitized().camera, CameraConfig::default());
    }

    #[test]
    fn sanitized_keeps_valid_camera() {
        let mut c = StudioConfig::default();
        c.camera.fov_y_degrees = 60.0;
        assert_eq!(c.sanitized().camera.fov_y_degrees, 60.0);
    }
}
