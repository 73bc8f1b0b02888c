use glam::{Vec3, Vec4};

/// Named corner of the square, as seen with +Y up in local space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// One rasterized vertex: local position + linear RGB color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SquareVertex {
    pub position: Vec3,
    pub color: Vec3,
}

/// The square drawn and picked by the application.
///
/// Both the draw call and the hit tester read corners from here, so what is
/// picked is always what is rasterized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    half_extent: f32,
}

impl Default for Square {
    fn default() -> Self {
        Self { half_extent: 0.5 }
    }
}

impl Square {
    /// Triangle order for the two-triangle draw: BL, TL, TR, BR, BL, TR.
    const TRIANGLES: [Corner; 6] = [
        Corner::BottomLeft,
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
        Corner::TopRight,
    ];

    /// Local-space position (z = 0).
    pub fn position(&self, corner: Corner) -> Vec3 {
        let h = self.half_extent;
        match corner {
            Corner::TopLeft => Vec3::new(-h, h, 0.0),
            Corner::TopRight => Vec3::new(h, h, 0.0),
            Corner::BottomLeft => Vec3::new(-h, -h, 0.0),
            Corner::BottomRight => Vec3::new(h, -h, 0.0),
        }
    }

    /// Homogeneous local-space position (w = 1).
    #[inline]
    pub fn corner(&self, corner: Corner) -> Vec4 {
        self.position(corner).extend(1.0)
    }

    pub fn color(&self, corner: Corner) -> Vec3 {
        match corner {
            Corner::BottomLeft => Vec3::ONE,
            Corner::TopLeft => Vec3::X,
            Corner::TopRight => Vec3::Y,
            Corner::BottomRight => Vec3::Z,
        }
    }

    /// The six vertices of the two triangles covering the square.
    pub fn triangle_vertices(&self) -> [SquareVertex; 6] {
        Self::TRIANGLES.map(|c| SquareVertex {
            position: self.position(c),
            color: self.color(c),
        })
    }
}
