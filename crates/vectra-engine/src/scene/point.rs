use crate::coords::Vec2;
use crate::paint::Color;

/// Colored vertex in world space.
///
/// The implicit `z` is always `0`; matrices treat a point as `(x, y, 0, 1)`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self { x, y, color }
    }

    /// Black point at `(x, y)`.
    #[inline]
    pub const fn at(x: f32, y: f32) -> Self {
        Self::new(x, y, Color::black())
    }

    #[inline]
    pub fn pos(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Same color, new position.
    #[inline]
    pub fn with_pos(self, pos: Vec2) -> Self {
        Self { x: pos.x, y: pos.y, color: self.color }
    }

    /// `false` if either coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.pos().is_finite()
    }
}
