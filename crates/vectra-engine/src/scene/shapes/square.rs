use crate::coords::Vec2;
use crate::scene::{Effect, Point, ShapeId};

use super::{QuadCorners, VertexColors};

/// Axis-aligned square anchored at its bottom-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Square {
    pub id: ShapeId,
    /// Bottom-left corner. Its color is not used for drawing; see `vertex_colors`.
    pub start: Point,
    pub side_length: f32,
    pub vertex_colors: VertexColors,
    pub effect: Option<Effect>,
}

impl Square {
    #[inline]
    pub fn new(id: ShapeId, start: Point, side_length: f32, vertex_colors: VertexColors) -> Self {
        Self { id, start, side_length, vertex_colors, effect: None }
    }

    #[inline]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Geometric center; the pivot for rotation.
    #[inline]
    pub fn center(&self) -> Vec2 {
        let half = self.side_length / 2.0;
        self.start.pos() + Vec2::new(half, half)
    }

    #[inline]
    pub fn corners(&self) -> QuadCorners {
        QuadCorners::from_anchor(
            self.start.pos(),
            Vec2::new(self.side_length, self.side_length),
            &self.vertex_colors,
        )
    }
}
