use crate::scene::shapes::polygon::centroid;
use crate::scene::{Point, Polygon};

use super::common::{ShapeMesh, ShapeVertex, Topology};

/// Triangle fan over the vertices sorted by angle around their centroid.
///
/// Uploads N vertices and `3 * (N - 2)` fan indices. Fewer than three vertices
/// produce an empty mesh.
pub fn tessellate(polygon: &Polygon) -> ShapeMesh {
    let n = polygon.vertices().len();
    if n < 3 {
        return ShapeMesh::empty(Topology::TriangleFan);
    }

    let ordered = sort_by_centroid_angle(polygon.vertices());
    ShapeMesh {
        topology: Topology::TriangleFan,
        vertices: ordered.into_iter().map(ShapeVertex::from_point).collect(),
        indices: fan_indices(n),
    }
}

/// Reorders points by `atan2(p - centroid)`, ascending.
///
/// Self-intersecting input order is silently untangled into a star-shaped one.
/// The sort is stable, so points at equal angles keep their relative order.
pub fn sort_by_centroid_angle(points: &[Point]) -> Vec<Point> {
    let Some(c) = centroid(points) else { return Vec::new() };

    let mut keyed: Vec<(f32, Point)> = points.iter().map(|&p| ((p.pos() - c).angle(), p)).collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().map(|(_, p)| p).collect()
}

/// `[0, i, i + 1]` for `i` in `1..n - 1`.
pub fn fan_indices(n: usize) -> Vec<u32> {
    (1..n.saturating_sub(1))
        .flat_map(|i| [0, i as u32, i as u32 + 1])
        .collect()
}
