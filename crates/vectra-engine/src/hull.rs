//! Convex hull over the resolved vertices of a shape collection.
//!
//! Monotone-chain scan:
//! 1) sort by `(y, x)` ascending
//! 2) build one chain forward and one backward, popping while the last three
//!    points do not make a strictly counter-clockwise turn
//! 3) concatenate, dropping each chain's closing point
//!
//! Output is counter-clockwise, starts at the lowest (then leftmost) point and
//! contains no duplicate or collinear points.

use core::cmp::Ordering;

use crate::scene::{Point, Shape};
use crate::transform::Resolve;

/// Resolves every shape and returns the hull of all their vertices.
pub fn shapes_hull(shapes: &[Shape]) -> Vec<Point> {
    let points: Vec<Point> = shapes.iter().flat_map(|s| s.resolved().vertices()).collect();
    convex_hull(points)
}

/// Hull of a raw point set.
///
/// Points with a NaN or infinite coordinate are dropped. Fewer than three
/// distinct positions are returned as-is (sorted, deduplicated). A fully
/// collinear set collapses to its two extreme points.
pub fn convex_hull(points: Vec<Point>) -> Vec<Point> {
    let total = points.len();
    let mut points: Vec<Point> = points.into_iter().filter(|p| p.is_finite()).collect();
    if points.len() < total {
        log::debug!("convex_hull: dropped {} non-finite points", total - points.len());
    }

    points.sort_by(sort_key);
    points.dedup_by(|a, b| sort_key(a, b) == Ordering::Equal);

    if points.len() < 3 {
        return points;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(points.len());
    for &p in &points {
        push_ccw(&mut lower, p);
    }

    let mut upper: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        push_ccw(&mut upper, p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// `true` when `p` lies inside or on the boundary of a counter-clockwise `hull`.
///
/// `epsilon` absorbs rounding on the boundary. Degenerate hulls (fewer than three
/// points) contain only points on their segment.
pub fn hull_contains(hull: &[Point], p: Point, epsilon: f32) -> bool {
    match hull {
        [] => false,
        [a] => (a.pos() - p.pos()).x.abs() <= epsilon && (a.pos() - p.pos()).y.abs() <= epsilon,
        [a, b] => {
            let ab = b.pos() - a.pos();
            let ap = p.pos() - a.pos();
            let len = ab.x.hypot(ab.y).max(f32::MIN_POSITIVE);
            let along = (ap.x * ab.x + ap.y * ab.y) / (len * len);
            (ab.cross(ap) / len).abs() <= epsilon && (-epsilon..=1.0 + epsilon).contains(&along)
        }
        _ => hull.iter().zip(hull.iter().cycle().skip(1)).all(|(a, b)| {
            let edge = b.pos() - a.pos();
            let len = edge.x.hypot(edge.y).max(f32::MIN_POSITIVE);
            edge.cross(p.pos() - a.pos()) / len >= -epsilon
        }),
    }
}

/// Numeric `(y, x)` order. Adding `0.0` folds `-0.0` into `+0.0`, which
/// `total_cmp` would otherwise order apart.
fn sort_key(a: &Point, b: &Point) -> Ordering {
    (a.y + 0.0)
        .total_cmp(&(b.y + 0.0))
        .then_with(|| (a.x + 0.0).total_cmp(&(b.x + 0.0)))
}

/// Cross product of `(a - o) x (b - o)`; positive for a counter-clockwise turn.
#[inline]
fn turn(o: Point, a: Point, b: Point) -> f32 {
    (a.pos() - o.pos()).cross(b.pos() - o.pos())
}

fn push_ccw(chain: &mut Vec<Point>, p: Point) {
    while let [.., o, a] = chain[..] {
        if turn(o, a, p) > 0.0 {
            break;
        }
        chain.pop();
    }
    chain.push(p);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::{Effect, Line, Polygon, Rectangle, ShapeId, Square, VertexColors};

    fn pts(coords: &[(f32, f32)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::at(x, y)).collect()
    }

    fn positions(points: &[Point]) -> Vec<(f32, f32)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    // ── degenerate input ──────────────────────────────────────────────────

    #[test]
    fn empty_input() {
        assert!(convex_hull(Vec::new()).is_empty());
    }

    #[test]
    fn fewer_than_three_distinct_points_pass_through() {
        let hull = convex_hull(pts(&[(3.0, 1.0), (0.0, 0.0), (3.0, 1.0)]));
        assert_eq!(positions(&hull), vec![(0.0, 0.0), (3.0, 1.0)]);
    }

    #[test]
    fn collinear_points_collapse_to_extremes() {
        let hull = convex_hull(pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]));
        assert_eq!(positions(&hull), vec![(0.0, 0.0), (2.0, 2.0)]);
    }

    #[test]
    fn horizontal_collinear_points() {
        let hull = convex_hull(pts(&[(4.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]));
        assert_eq!(positions(&hull), vec![(1.0, 0.0), (4.0, 0.0)]);
    }

    #[test]
    fn non_finite_points_are_dropped() {
        let hull = convex_hull(pts(&[
            (f32::NAN, 0.0),
            (0.0, 0.0),
            (2.0, f32::NAN),
            (3.0, 0.0),
            (f32::INFINITY, 1.0),
            (0.0, 3.0),
        ]));
        assert_eq!(positions(&hull), vec![(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
    }

    #[test]
    fn signed_zeros_are_one_position() {
        let input = pts(&[(0.0, -0.0), (1.0, -0.0), (0.0, 0.0), (0.5, 2.0)]);
        let hull = convex_hull(input.clone());
        assert_eq!(hull.len(), 3);
        assert_eq!(positions(&hull), vec![(0.0, -0.0), (1.0, -0.0), (0.5, 2.0)]);
        for p in input {
            assert!(hull_contains(&hull, p, 1e-6), "{:?} outside hull", p.pos());
        }
    }

    #[test]
    fn negative_zero_x_sorts_with_positive_zero() {
        let hull = convex_hull(pts(&[(-0.0, 1.0), (2.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.5, 3.0)]));
        assert_eq!(positions(&hull), vec![(-1.0, 0.0), (2.0, 0.0), (0.5, 3.0)]);
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn square_with_interior_and_edge_points() {
        let hull = convex_hull(pts(&[
            (1.0, 1.0),
            (0.0, 2.0),
            (2.0, 2.0),
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0), // on bottom edge
            (2.0, 1.0), // on right edge
        ]));
        assert_eq!(positions(&hull), vec![(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
    }

    #[test]
    fn hull_is_counter_clockwise() {
        let hull = convex_hull(pts(&[(5.0, 1.0), (-2.0, 3.0), (0.0, -4.0), (1.0, 6.0), (0.5, 0.5)]));
        let area2: f32 = hull
            .iter()
            .zip(hull.iter().cycle().skip(1))
            .map(|(a, b)| a.pos().cross(b.pos()))
            .sum();
        assert!(area2 > 0.0);
    }

    #[test]
    fn hull_is_idempotent() {
        let input = pts(&[
            (3.0, 7.0),
            (-1.0, 2.0),
            (4.0, -3.0),
            (0.0, 0.0),
            (9.0, 1.0),
            (2.0, 2.0),
            (-4.0, -4.0),
            (6.0, 6.0),
        ]);
        let once = convex_hull(input);
        let twice = convex_hull(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn every_input_point_is_contained() {
        let input = pts(&[
            (0.3, 7.1),
            (-1.2, 2.9),
            (4.4, -3.3),
            (0.0, 0.0),
            (9.5, 1.25),
            (2.0, 2.0),
            (-4.0, -4.5),
            (6.0, 6.0),
            (1.0, -1.0),
            (5.5, 0.5),
        ]);
        let hull = convex_hull(input.clone());
        for p in input {
            assert!(hull_contains(&hull, p, 1e-4), "{:?} outside hull", p.pos());
        }
    }

    #[test]
    fn repeated_corners_with_interior_points() {
        let input = pts(&[
            (4.0, 0.0),
            (0.0, 0.0),
            (1.0, 1.0),
            (4.0, 4.0),
            (0.0, 0.0),
            (2.0, 3.0),
            (4.0, 0.0),
            (0.0, 4.0),
            (4.0, 4.0),
            (3.0, 1.0),
        ]);
        let hull = convex_hull(input.clone());
        assert_eq!(positions(&hull), vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        for p in input {
            assert!(hull_contains(&hull, p, 1e-6), "{:?} outside hull", p.pos());
        }
    }

    #[test]
    fn contains_rejects_outside_point() {
        let hull = convex_hull(pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]));
        assert!(!hull_contains(&hull, Point::at(5.0, 2.0), 1e-4));
        assert!(hull_contains(&hull, Point::at(4.0, 2.0), 1e-4));
    }

    #[test]
    fn contains_on_degenerate_hull() {
        let hull = convex_hull(pts(&[(0.0, 0.0), (2.0, 2.0)]));
        assert!(hull_contains(&hull, Point::at(1.0, 1.0), 1e-4));
        assert!(!hull_contains(&hull, Point::at(3.0, 3.0), 1e-4));
        assert!(!hull_contains(&hull, Point::at(1.0, 0.0), 1e-4));
    }

    // ── shape collections ─────────────────────────────────────────────────

    #[test]
    fn shapes_hull_uses_resolved_vertices_and_corner_colors() {
        let red = Color::rgb(255, 0, 0);
        let colors = VertexColors::new(Color::white(), Color::white(), red, Color::white());
        let shapes: Vec<Shape> = vec![
            Square::new(ShapeId(1), Point::at(0.0, 0.0), 2.0, colors)
                .with_effect(Effect::translate(-10.0, -10.0))
                .into(),
            Line::new(ShapeId(2), Point::at(5.0, 5.0), Point::at(6.0, 5.0)).into(),
        ];

        let hull = shapes_hull(&shapes);
        assert_eq!(
            positions(&hull),
            vec![(-10.0, -10.0), (-8.0, -10.0), (6.0, 5.0), (5.0, 5.0), (-10.0, -8.0)]
        );
        // bottom-left corner of the square keeps its vertex color
        assert_eq!(hull[0].color, red);
    }

    #[test]
    fn shapes_hull_includes_rectangles_and_polygons() {
        let shapes: Vec<Shape> = vec![
            Rectangle::new(ShapeId(1), Point::at(0.0, 0.0), 4.0, 1.0, VertexColors::default()).into(),
            Polygon::new(ShapeId(2), pts(&[(1.0, 4.0), (2.0, 5.0), (3.0, 4.0)])).into(),
        ];
        let hull = shapes_hull(&shapes);
        assert_eq!(
            positions(&hull),
            vec![(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (3.0, 4.0), (2.0, 5.0), (1.0, 4.0), (0.0, 1.0)]
        );
    }
}
