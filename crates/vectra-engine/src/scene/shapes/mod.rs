pub mod line;
pub mod polygon;
pub mod rectangle;
pub mod square;

use crate::coords::Vec2;
use crate::paint::Color;

use super::Point;

/// Per-corner colors of an axis-aligned quad.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VertexColors {
    pub tl: Color,
    pub tr: Color,
    pub bl: Color,
    pub br: Color,
}

impl VertexColors {
    #[inline]
    pub const fn new(tl: Color, tr: Color, bl: Color, br: Color) -> Self {
        Self { tl, tr, bl, br }
    }

    /// Same color on every corner.
    #[inline]
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color, color, color)
    }
}

/// The four corners of an axis-aligned quad, each carrying its vertex color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QuadCorners {
    pub bl: Point,
    pub br: Point,
    pub tl: Point,
    pub tr: Point,
}

impl QuadCorners {
    /// Corners of the box `[anchor, anchor + size]` with `anchor` at bottom-left (+Y up).
    pub fn from_anchor(anchor: Vec2, size: Vec2, colors: &VertexColors) -> Self {
        let Vec2 { x, y } = anchor;
        Self {
            bl: Point::new(x, y, colors.bl),
            br: Point::new(x + size.x, y, colors.br),
            tl: Point::new(x, y + size.y, colors.tl),
            tr: Point::new(x + size.x, y + size.y, colors.tr),
        }
    }

    /// Corners in `bl, br, tl, tr` order.
    #[inline]
    pub fn to_array(self) -> [Point; 4] {
        [self.bl, self.br, self.tl, self.tr]
    }

    #[inline]
    pub fn to_vec(self) -> Vec<Point> {
        self.to_array().to_vec()
    }
}
