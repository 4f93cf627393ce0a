use crate::scene::QuadCorners;

use super::common::{ShapeMesh, ShapeVertex, Topology};

/// Two triangles sharing the `br`–`tl` diagonal: `[bl, br, tl, br, tr, tl]`.
///
/// Used for both squares and rectangles; every corner carries its own color.
pub fn tessellate(corners: QuadCorners) -> ShapeMesh {
    let QuadCorners { bl, br, tl, tr } = corners;
    ShapeMesh {
        topology: Topology::Triangles,
        vertices: [bl, br, tl, br, tr, tl].map(ShapeVertex::from_point).to_vec(),
        indices: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::{Point, Rectangle, ShapeId, Square, VertexColors};

    #[test]
    fn square_emits_six_vertices_in_fixed_order() {
        let sq = Square::new(ShapeId(1), Point::at(0.0, 0.0), 2.0, VertexColors::default());
        let mesh = tessellate(sq.corners());

        let coords: Vec<[f32; 2]> = mesh.vertices.iter().map(|v| v.coordinates).collect();
        assert_eq!(
            coords,
            vec![[0.0, 0.0], [2.0, 0.0], [0.0, 2.0], [2.0, 0.0], [2.0, 2.0], [0.0, 2.0]]
        );
        assert_eq!(mesh.primitive_count(), 2);
        assert!(mesh.indices.is_empty());
    }

    #[test]
    fn rectangle_corners_keep_own_colors() {
        let colors = VertexColors::new(
            Color::rgb(255, 0, 0),   // tl
            Color::rgb(0, 255, 0),   // tr
            Color::rgb(0, 0, 255),   // bl
            Color::rgb(255, 255, 0), // br
        );
        let rect = Rectangle::new(ShapeId(1), Point::at(1.0, 1.0), 4.0, 2.0, colors);
        let mesh = tessellate(rect.corners());

        let rgb: Vec<[f32; 3]> = mesh.vertices.iter().map(|v| v.vertex_color).collect();
        let (tl, tr, bl, br) = ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 1.0, 0.0]);
        assert_eq!(rgb, vec![bl, br, tl, br, tr, tl]);
        assert_eq!(mesh.vertices[4].coordinates, [5.0, 3.0]);
    }
}
