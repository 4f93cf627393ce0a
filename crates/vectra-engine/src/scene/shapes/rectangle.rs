use crate::coords::Vec2;
use crate::scene::{Effect, Point, ShapeId};

use super::{QuadCorners, VertexColors};

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub id: ShapeId,
    pub start: Point,
    pub width: f32,
    pub height: f32,
    pub vertex_colors: VertexColors,
    pub effect: Option<Effect>,
}

impl Rectangle {
    #[inline]
    pub fn new(
        id: ShapeId,
        start: Point,
        width: f32,
        height: f32,
        vertex_colors: VertexColors,
    ) -> Self {
        Self { id, start, width, height, vertex_colors, effect: None }
    }

    #[inline]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.start.pos() + self.size() / 2.0
    }

    #[inline]
    pub fn corners(&self) -> QuadCorners {
        QuadCorners::from_anchor(self.start.pos(), self.size(), &self.vertex_colors)
    }
}
