use crate::coords::Vec2;
use crate::scene::{Effect, Line, Point, Polygon, Rectangle, Shape, Square};

use super::Mat4;

/// Produces a world-space copy of a shape with its effect applied.
///
/// The returned value carries no effect (`None`), so resolving it again is a no-op.
pub trait Resolve {
    fn resolved(&self) -> Self;
}

/// `translate(dx, dy) * rotate * scale`: rotation and scale act about the origin.
///
/// Used for lines and polygon vertices.
pub fn effect_matrix(effect: &Effect) -> Mat4 {
    Mat4::translate(effect.dx, effect.dy)
        * Mat4::rotate_degrees(effect.rotate)
        * Mat4::scale(effect.scale)
}

/// `translate(dx, dy) * translate(pivot) * rotate * translate(-pivot) * scale`.
///
/// Used for squares and rectangles with `pivot` at the shape's center. Scale is
/// innermost and therefore acts about the origin; only rotation is pivoted.
pub fn pivot_effect_matrix(effect: &Effect, pivot: Vec2) -> Mat4 {
    Mat4::translate(effect.dx, effect.dy)
        * Mat4::translate_vec(pivot)
        * Mat4::rotate_degrees(effect.rotate)
        * Mat4::translate_vec(-pivot)
        * Mat4::scale(effect.scale)
}

/// The matrix `resolved()` applies to the given shape's anchor points.
pub fn resolve_matrix(shape: &Shape) -> Mat4 {
    let effect = Effect::or_identity(shape.effect());
    match shape {
        Shape::Line(_) | Shape::Polygon(_) => effect_matrix(&effect),
        Shape::Square(s) => pivot_effect_matrix(&effect, s.center()),
        Shape::Rectangle(r) => pivot_effect_matrix(&effect, r.center()),
    }
}

#[inline]
fn apply(m: &Mat4, p: Point) -> Point {
    p.with_pos(m.transform_point(p.pos()))
}

impl Resolve for Line {
    fn resolved(&self) -> Self {
        let m = effect_matrix(&Effect::or_identity(self.effect.as_ref()));
        Line {
            id: self.id,
            start: apply(&m, self.start),
            end: apply(&m, self.end),
            effect: None,
        }
    }
}

impl Resolve for Square {
    /// Only the anchor goes through the matrix; the side length is scaled
    /// directly and corners are rebuilt axis-aligned from the new anchor.
    fn resolved(&self) -> Self {
        let effect = Effect::or_identity(self.effect.as_ref());
        let m = pivot_effect_matrix(&effect, self.center());
        Square {
            start: apply(&m, self.start),
            side_length: self.side_length * effect.scale,
            effect: None,
            ..*self
        }
    }
}

impl Resolve for Rectangle {
    fn resolved(&self) -> Self {
        let effect = Effect::or_identity(self.effect.as_ref());
        let m = pivot_effect_matrix(&effect, self.center());
        Rectangle {
            start: apply(&m, self.start),
            width: self.width * effect.scale,
            height: self.height * effect.scale,
            effect: None,
            ..*self
        }
    }
}

impl Resolve for Polygon {
    /// Each vertex is transformed independently about the origin. Edges are
    /// index-based and need no update.
    fn resolved(&self) -> Self {
        let m = effect_matrix(&Effect::or_identity(self.effect.as_ref()));
        Polygon {
            id: self.id,
            vertices: self.vertices.iter().map(|&p| apply(&m, p)).collect(),
            edges: self.edges.clone(),
            effect: None,
        }
    }
}

impl Resolve for Shape {
    fn resolved(&self) -> Self {
        match self {
            Shape::Line(s) => Shape::Line(s.resolved()),
            Shape::Square(s) => Shape::Square(s.resolved()),
            Shape::Rectangle(s) => Shape::Rectangle(s.resolved()),
            Shape::Polygon(s) => Shape::Polygon(s.resolved()),
        }
    }
}
