use std::fmt;

use glam::{Vec2, Vec4};

use crate::camera::CameraState;
use crate::config::{CornerSource, NdcBounds, PickConfig};
use crate::projector::{local_to_screen, screen_to_ndc};
use crate::square::{Corner, Square};

/// Which space the containment test runs in.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum HitMethod {
    /// Corners and mouse compared in screen pixels; reports corner distance.
    #[default]
    ScreenSpace,
    /// Corners and mouse compared in clip space; no distance.
    NdcSpace,
}

impl fmt::Display for HitMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HitMethod::ScreenSpace => f.write_str("screen space"),
            HitMethod::NdcSpace => f.write_str("NDC space"),
        }
    }
}

/// Axis-aligned bounds with inclusive edges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds2 {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds2 {
    /// Smallest bounds holding every point; per-axis min/max so the result
    /// does not depend on which way the axes point.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Self {
        points.into_iter().fold(
            Bounds2 {
                min: Vec2::splat(f32::INFINITY),
                max: Vec2::splat(f32::NEG_INFINITY),
            },
            |b, p| Bounds2 { min: b.min.min(p), max: b.max.max(p) },
        )
    }

    /// Closed-interval containment: [min, max] on both axes.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Outcome of one click test.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitReport {
    pub method: HitMethod,
    pub inside: bool,

    /// Shortest distance from the mouse to a projected corner, in pixels.
    /// Only the screen-space test computes it.
    pub nearest_corner_distance: Option<f32>,

    /// Mouse position in the space the test ran in.
    pub mouse: Vec2,

    /// Projected top-left corner in the space the test ran in.
    pub top_left: Vec2,
}

impl HitReport {
    pub fn verdict(&self) -> &'static str {
        if self.inside { "Inside square" } else { "Outside square" }
    }
}

impl fmt::Display for HitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.verdict())?;
        if let Some(d) = self.nearest_corner_distance {
            writeln!(f, "Length to the nearest vertex from mouse click position: {d}")?;
        }
        writeln!(f, "Mouse: {}; {}", self.mouse.x, self.mouse.y)?;
        write!(f, "Top left: {}; {}", self.top_left.x, self.top_left.y)
    }
}

/// Runs click tests against one square under one camera snapshot.
///
/// Borrowing the snapshot keeps every call read-only.
#[derive(Debug, Copy, Clone)]
pub struct HitTester<'a> {
    camera: &'a CameraState,
    square: &'a Square,
    config: PickConfig,
}

impl<'a> HitTester<'a> {
    pub fn new(camera: &'a CameraState, square: &'a Square, config: PickConfig) -> Self {
        Self { camera, square, config }
    }

    pub fn run(&self, method: HitMethod, mouse: Vec2, viewport: Vec2) -> HitReport {
        match method {
            HitMethod::ScreenSpace => self.screen_space(mouse, viewport),
            HitMethod::NdcSpace => self.ndc_space(mouse, viewport),
        }
    }

    /// Tests `mouse` (pixels) against the corners mapped to screen pixels.
    pub fn screen_space(&self, mouse: Vec2, viewport: Vec2) -> HitReport {
        let corners = Corner::ALL.map(|c| {
            let local = self.square.corner(c);
            let clip = match self.config.corner_source {
                CornerSource::Raw => local,
                CornerSource::Transformed => self.camera.local_to_ndc(local),
            };
            local_to_screen(clip, viewport)
        });

        let inside = Bounds2::from_points(corners).contains(mouse);
        let nearest = corners
            .iter()
            .map(|c| c.distance(mouse))
            .fold(f32::INFINITY, f32::min);

        log::trace!("screen-space corners {corners:?} for viewport {viewport:?}");

        HitReport {
            method: HitMethod::ScreenSpace,
            inside,
            nearest_corner_distance: Some(nearest),
            mouse,
            top_left: corners[0],
        }
    }

    /// Tests `mouse` (pixels) against the corners in clip space.
    ///
    /// Corners are not perspective-divided; this relies on w == 1 on the
    /// square's plane, which holds for the default view.
    pub fn ndc_space(&self, mouse: Vec2, viewport: Vec2) -> HitReport {
        let corners = Corner::ALL.map(|c| xy(self.camera.local_to_ndc(self.square.corner(c))));
        let mouse_ndc = xy(screen_to_ndc(mouse, viewport));

        let bounds = match self.config.ndc_bounds {
            NdcBounds::MinMax => Bounds2::from_points(corners),
            NdcBounds::CornerPair => Bounds2 { min: corners[0], max: corners[3] },
        };
        let inside = bounds.contains(mouse_ndc);

        log::trace!("clip-space corners {corners:?}, mouse {mouse_ndc:?}");

        HitReport {
            method: HitMethod::NdcSpace,
            inside,
            nearest_corner_distance: None,
            mouse: mouse_ndc,
            top_left: corners[0],
        }
    }
}

#[inline]
fn xy(v: Vec4) -> Vec2 {
    Vec2::new(v.x, v.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CameraConfig;

    const VP: Vec2 = Vec2::new(800.0, 600.0);

    fn camera() -> CameraState {
        CameraState::new(CameraConfig::default(), VP)
    }

    fn tester<'a>(camera: &'a CameraState, square: &'a Square, source: CornerSource) -> HitTester<'a> {
        HitTester::new(camera, square, PickConfig { corner_source: source, ..PickConfig::default() })
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn bounds_edges_are_inclusive() {
        let b = Bounds2::from_points([Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0)]);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(10.0, 10.0)));
        assert!(!b.contains(Vec2::new(10.001, 5.0)));
    }

    #[test]
    fn bounds_ignore_point_order() {
        let a = Bounds2::from_points([Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0)]);
        let b = Bounds2::from_points([Vec2::new(1.0, -1.0), Vec2::new(-1.0, 1.0)]);
        assert_eq!(a, b);
        assert_eq!(a.min, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn bounds_reject_nan() {
        let b = Bounds2::from_points([Vec2::ZERO, Vec2::ONE]);
        assert!(!b.contains(Vec2::new(f32::NAN, 0.5)));
    }

    // ── screen space ──────────────────────────────────────────────────────

    #[test]
    fn screen_space_center_is_inside() {
        let (cam, sq) = (camera(), Square::default());
        let center = local_to_screen(Vec4::new(0.0, 0.0, 0.0, 1.0), VP);

        let r = tester(&cam, &sq, CornerSource::Raw).screen_space(center, VP);
        assert!(r.inside);
        assert_eq!(r.verdict(), "Inside square");

        let d = r.nearest_corner_distance.unwrap();
        assert!(d > 0.0);
        // Raw corners land at (200,150)..(600,450); the center is 250px from each.
        assert!((d - 250.0).abs() < 1e-3);
    }

    #[test]
    fn screen_space_far_click_is_outside_with_real_distance() {
        let (cam, sq) = (camera(), Square::default());
        let mouse = Vec2::new(-1000.0, -1000.0);

        let r = tester(&cam, &sq, CornerSource::Raw).screen_space(mouse, VP);
        assert!(!r.inside);
        assert_eq!(r.verdict(), "Outside square");

        let expected = Vec2::new(200.0, 150.0).distance(mouse);
        assert!((r.nearest_corner_distance.unwrap() - expected).abs() < 1e-2);
    }

    #[test]
    fn screen_space_reports_top_left_in_pixels() {
        let (cam, sq) = (camera(), Square::default());
        let r = tester(&cam, &sq, CornerSource::Raw).screen_space(Vec2::ZERO, VP);
        assert_eq!(r.top_left, Vec2::new(200.0, 150.0));
        assert_eq!(r.mouse, Vec2::ZERO);
    }

    #[test]
    fn transformed_corners_follow_the_rasterized_square() {
        let (cam, sq) = (camera(), Square::default());
        let t = tester(&cam, &sq, CornerSource::Transformed);

        // Rasterized half-extent: 0.25 world units one unit away.
        // NDC x = 0.25 * f / aspect, y = 0.25 * f with f = 1 / tan(22.5°).
        let f = 1.0 / 22.5f32.to_radians().tan();
        let ndc = Vec2::new(0.25 * f / (800.0 / 600.0), 0.25 * f);
        let top_left = Vec2::new(0.5 * (1.0 - ndc.x) * 800.0, 600.0 - 0.5 * (ndc.y + 1.0) * 600.0);

        let r = t.screen_space(Vec2::new(400.0, 300.0), VP);
        assert!(r.inside);
        assert!(r.top_left.abs_diff_eq(top_left, 1e-2), "{:?} vs {top_left:?}", r.top_left);

        // Inside the raw rectangle, outside the rasterized one.
        let click = Vec2::new(210.0, 300.0);
        assert!(!t.screen_space(click, VP).inside);
        assert!(tester(&cam, &sq, CornerSource::Raw).screen_space(click, VP).inside);
    }

    // ── NDC space ─────────────────────────────────────────────────────────

    #[test]
    fn ndc_space_center_is_inside() {
        let (cam, sq) = (camera(), Square::default());
        let r = tester(&cam, &sq, CornerSource::Raw).ndc_space(Vec2::new(400.0, 300.0), VP);

        assert!(r.inside);
        assert_eq!(r.nearest_corner_distance, None);
        assert_eq!(r.mouse, Vec2::ZERO);
    }

    #[test]
    fn ndc_space_top_left_has_y_up() {
        let (cam, sq) = (camera(), Square::default());
        let r = tester(&cam, &sq, CornerSource::Raw).ndc_space(Vec2::ZERO, VP);

        assert!(!r.inside);
        assert!(r.top_left.x < 0.0 && r.top_left.y > 0.0);
        assert_eq!(r.mouse, Vec2::new(-1.0, 1.0));
    }

    #[test]
    fn corner_pair_ndc_bounds_never_contain_a_click() {
        let (cam, sq) = (camera(), Square::default());
        let t = HitTester::new(
            &cam,
            &sq,
            PickConfig { ndc_bounds: NdcBounds::CornerPair, ..PickConfig::default() },
        );

        let r = t.ndc_space(Vec2::new(400.0, 300.0), VP);
        assert!(r.top_left.y > 0.0);
        assert!(!r.inside);

        for mouse in [Vec2::ZERO, Vec2::new(380.0, 290.0), Vec2::new(799.0, 599.0)] {
            assert!(!t.ndc_space(mouse, VP).inside, "{mouse:?}");
        }
    }

    #[test]
    fn both_methods_agree_on_transformed_square() {
        let (cam, sq) = (camera(), Square::default());
        let t = tester(&cam, &sq, CornerSource::Transformed);

        for mouse in [
            Vec2::new(400.0, 300.0),
            Vec2::new(300.0, 250.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(700.0, 550.0),
        ] {
            assert_eq!(
                t.screen_space(mouse, VP).inside,
                t.ndc_space(mouse, VP).inside,
                "disagreement at {mouse:?}"
            );
        }
    }

    #[test]
    fn zero_viewport_propagates_non_finite_mouse() {
        let (cam, sq) = (camera(), Square::default());
        let r = tester(&cam, &sq, CornerSource::Raw).ndc_space(Vec2::new(10.0, 10.0), Vec2::ZERO);
        assert!(!r.mouse.is_finite());
        assert!(!r.inside);
    }

    #[test]
    fn run_dispatches_by_method() {
        let (cam, sq) = (camera(), Square::default());
        let t = tester(&cam, &sq, CornerSource::Raw);
        assert_eq!(t.run(HitMethod::ScreenSpace, Vec2::ZERO, VP).method, HitMethod::ScreenSpace);
        assert_eq!(t.run(HitMethod::NdcSpace, Vec2::ZERO, VP).method, HitMethod::NdcSpace);
    }

    // ── report ────────────────────────────────────────────────────────────

    #[test]
    fn screen_report_lists_distance_mouse_and_top_left() {
        let report = HitReport {
            method: HitMethod::ScreenSpace,
            inside: true,
            nearest_corner_distance: Some(250.0),
            mouse: Vec2::new(400.0, 300.0),
            top_left: Vec2::new(200.0, 150.0),
        };

        assert_eq!(
            report.to_string(),
            "Inside square\n\
             Length to the nearest vertex from mouse click position: 250\n\
             Mouse: 400; 300\n\
             Top left: 200; 150"
        );
    }

    #[test]
    fn ndc_report_has_no_distance_line() {
        let report = HitReport {
            method: HitMethod::NdcSpace,
            inside: false,
            nearest_corner_distance: None,
            mouse: Vec2::new(-1.0, 1.0),
            top_left: Vec2::new(-0.5, 0.25),
        };

        assert_eq!(
            report.to_string(),
            "Outside square\nMouse: -1; 1\nTop left: -0.5; 0.25"
        );
    }
}
