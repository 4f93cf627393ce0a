use crate::scene::Line;

use super::common::{ShapeMesh, ShapeVertex, Topology};

/// Two vertices, one segment. Each endpoint keeps its own color.
pub fn tessellate(line: &Line) -> ShapeMesh {
    ShapeMesh {
        topology: Topology::Lines,
        vertices: vec![ShapeVertex::from_point(line.start), ShapeVertex::from_point(line.end)],
        indices: Vec::new(),
    }
}
