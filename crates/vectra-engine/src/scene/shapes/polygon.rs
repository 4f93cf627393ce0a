use crate::coords::Vec2;
use crate::scene::{Effect, GeometryError, Point, ShapeId};

use super::line::Line;

/// Smallest vertex count `remove_vertex` will leave behind.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// Edge between two polygon vertices, stored as indices into `Polygon::vertices`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Edge {
    pub start: usize,
    pub end: usize,
}

impl Edge {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn references(self, index: usize) -> bool {
        self.start == index || self.end == index
    }
}

/// Polygon with ordered vertices and an optional set of edges.
///
/// Invariant: every edge index is `< vertices.len()`. Mutators that could break
/// this (`add_edge`, `remove_vertex`) validate and return [`GeometryError`].
///
/// Vertex order is the user's insertion order and need not be convex or simple;
/// the renderer reorders around the centroid before fanning.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub id: ShapeId,
    pub(crate) vertices: Vec<Point>,
    pub(crate) edges: Vec<Edge>,
    pub effect: Option<Effect>,
}

impl Polygon {
    /// Creates a polygon without edges.
    ///
    /// The editor is expected to supply at least three vertices; fewer are
    /// tolerated and simply produce nothing when drawn.
    pub fn new(id: ShapeId, vertices: Vec<Point>) -> Self {
        Self { id, vertices, edges: Vec::new(), effect: None }
    }

    #[inline]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Mutable access to vertex data. Length cannot change through this slice,
    /// so edge indices stay valid.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Point] {
        &mut self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn push_vertex(&mut self, point: Point) -> usize {
        self.vertices.push(point);
        self.vertices.len() - 1
    }

    /// Connects two existing vertices.
    pub fn add_edge(&mut self, start: usize, end: usize) -> Result<Edge, GeometryError> {
        let len = self.vertices.len();
        for index in [start, end] {
            if index >= len {
                return Err(GeometryError::IndexOutOfRange { index, len });
            }
        }
        let edge = Edge::new(start, end);
        self.edges.push(edge);
        Ok(edge)
    }

    /// Removes the edge at `edge_index` (position in `edges()`), if any.
    pub fn remove_edge(&mut self, edge_index: usize) -> Option<Edge> {
        (edge_index < self.edges.len()).then(|| self.edges.remove(edge_index))
    }

    /// Removes a vertex that no edge references.
    ///
    /// Edge indices above `index` are shifted down to keep pointing at the same
    /// vertices.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Point, GeometryError> {
        let len = self.vertices.len();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len });
        }
        if self.edges.iter().any(|e| e.references(index)) {
            return Err(GeometryError::VertexInUse { index });
        }
        if len <= MIN_POLYGON_VERTICES {
            return Err(GeometryError::TooFewVertices { min: MIN_POLYGON_VERTICES });
        }

        let removed = self.vertices.remove(index);
        for e in &mut self.edges {
            if e.start > index {
                e.start -= 1;
            }
            if e.end > index {
                e.end -= 1;
            }
        }
        Ok(removed)
    }

    /// Arithmetic mean of the vertices, or `None` for an empty polygon.
    pub fn centroid(&self) -> Option<Vec2> {
        centroid(&self.vertices)
    }

    /// Materializes edges as lines sharing this polygon's id.
    ///
    /// Edges with stale indices are skipped.
    pub fn edge_lines(&self) -> Vec<Line> {
        self.edges
            .iter()
            .filter_map(|e| {
                let (Some(&start), Some(&end)) = (self.vertices.get(e.start), self.vertices.get(e.end))
                else {
                    log::warn!("polygon {:?}: edge {:?} references a missing vertex", self.id, e);
                    return None;
                };
                Some(Line::new(self.id, start, end))
            })
            .collect()
    }
}

/// Arithmetic mean of the point positions.
pub(crate) fn centroid(points: &[Point]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::zero(), |acc, p| acc + p.pos());
    Some(sum / points.len() as f32)
}
