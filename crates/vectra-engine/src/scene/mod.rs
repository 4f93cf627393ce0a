//! Geometry model: the shapes an editor hands to the core.
//!
//! Responsibilities:
//! - store shapes in their own (untransformed) coordinates plus an optional effect
//! - enforce structural invariants (polygon edges index live vertices)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`
//!
//! The core never owns the collection; it reads a `&[Shape]` snapshot per frame.

mod effect;
mod error;
mod point;
mod shape;

pub mod shapes;

pub use effect::Effect;
pub use error::GeometryError;
pub use point::Point;
pub use shape::{Shape, ShapeId, ShapeKind};
pub use shapes::line::Line;
pub use shapes::polygon::{Edge, Polygon};
pub use shapes::rectangle::Rectangle;
pub use shapes::square::Square;
pub use shapes::{QuadCorners, VertexColors};
