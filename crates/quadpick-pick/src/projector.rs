use glam::{Vec2, Vec4};

/// Maps a clip-space point to screen pixels.
///
/// Performs the perspective divide, then maps x, y from [-1, 1] to
/// [0, width] and [height, 0] (screen Y grows downward). Model, view and
/// projection are *not* applied here. `point.w == 0` is not guarded.
#[inline]
pub fn local_to_screen(point: Vec4, viewport: Vec2) -> Vec2 {
    let ndc = point / point.w;
    Vec2::new(
        0.5 * (ndc.x + 1.0) * viewport.x,
        viewport.y - 0.5 * (ndc.y + 1.0) * viewport.y,
    )
}

/// Maps a screen pixel back to clip space on the z = 0 plane.
///
/// Depth is fabricated, so this only serves 2D picking; it is not an unproject.
#[inline]
pub fn screen_to_ndc(point: Vec2, viewport: Vec2) -> Vec4 {
    let x = (point.x / viewport.x) * 2.0 - 1.0;
    let y = (1.0 - point.y / viewport.y) * 2.0 - 1.0;
    Vec4::new(x, y, 0.0, 1.0)
}
