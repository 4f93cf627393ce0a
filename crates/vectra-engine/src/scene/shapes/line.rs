use crate::scene::{Effect, Point, ShapeId};

/// Segment between two owned endpoints.
///
/// A zero-length line is valid and renders as a degenerate segment.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub id: ShapeId,
    pub start: Point,
    pub end: Point,
    pub effect: Option<Effect>,
}

impl Line {
    #[inline]
    pub fn new(id: ShapeId, start: Point, end: Point) -> Self {
        Self { id, start, end, effect: None }
    }

    #[inline]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[inline]
    pub fn length(&self) -> f32 {
        let d = self.end.pos() - self.start.pos();
        (d.x * d.x + d.y * d.y).sqrt()
    }
}
