use crate::scene::shapes::line::Line;
use crate::scene::shapes::polygon::Polygon;
use crate::scene::shapes::rectangle::Rectangle;
use crate::scene::shapes::square::Square;

use super::{Effect, Point};

/// Identifier assigned by the owning editor. Not interpreted by the core.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ShapeId(pub u32);

/// Discriminant of [`Shape`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Line,
    Square,
    Rectangle,
    Polygon,
}

/// A shape in the editor's collection.
///
/// Adding a kind:
/// - add a shape module under `scene::shapes::*`
/// - add a variant here
/// - extend the matches in `transform::resolve`, `hull` and `render::shapes`
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Square(Square),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl Shape {
    #[inline]
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Line(s) => s.id,
            Shape::Square(s) => s.id,
            Shape::Rectangle(s) => s.id,
            Shape::Polygon(s) => s.id,
        }
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    #[inline]
    pub fn effect(&self) -> Option<&Effect> {
        match self {
            Shape::Line(s) => s.effect.as_ref(),
            Shape::Square(s) => s.effect.as_ref(),
            Shape::Rectangle(s) => s.effect.as_ref(),
            Shape::Polygon(s) => s.effect.as_ref(),
        }
    }

    /// Replaces the shape's effect; `None` means identity.
    pub fn set_effect(&mut self, effect: Option<Effect>) {
        match self {
            Shape::Line(s) => s.effect = effect,
            Shape::Square(s) => s.effect = effect,
            Shape::Rectangle(s) => s.effect = effect,
            Shape::Polygon(s) => s.effect = effect,
        }
    }

    /// Vertices in the shape's own coordinates (effect not applied).
    ///
    /// - Line: `start`, `end`
    /// - Square / Rectangle: corners `bl`, `br`, `tl`, `tr` with their vertex colors
    /// - Polygon: vertices in insertion order
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Shape::Line(s) => vec![s.start, s.end],
            Shape::Square(s) => s.corners().to_vec(),
            Shape::Rectangle(s) => s.corners().to_vec(),
            Shape::Polygon(s) => s.vertices().to_vec(),
        }
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::VertexColors;

    #[test]
    fn quad_vertices_are_corner_ordered() {
        let colors = VertexColors::new(Color::rgb(1, 0, 0), Color::rgb(2, 0, 0), Color::rgb(3, 0, 0), Color::rgb(4, 0, 0));
        let shape: Shape = Rectangle::new(ShapeId(7), Point::at(1.0, 2.0), 4.0, 3.0, colors).into();
        let v: Vec<(f32, f32, u8)> = shape.vertices().iter().map(|p| (p.x, p.y, p.color.r)).collect();
        assert_eq!(v, vec![(1.0, 2.0, 3), (5.0, 2.0, 4), (1.0, 5.0, 1), (5.0, 5.0, 2)]);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.id(), ShapeId(7));
    }

    #[test]
    fn set_effect_round_trips() {
        let mut shape: Shape = Line::new(ShapeId(1), Point::at(0.0, 0.0), Point::at(1.0, 0.0)).into();
        assert_eq!(shape.effect(), None);
        shape.set_effect(Some(Effect::rotate(45.0)));
        assert_eq!(shape.effect(), Some(&Effect::rotate(45.0)));
        shape.set_effect(None);
        assert_eq!(shape.effect(), None);
    }
}
