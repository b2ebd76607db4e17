// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Containment tests.

use kurbo::{Point, Rect, Vec2};

/// Returns `true` if `point` lies inside `polygon`.
///
/// The vertex list is closed implicitly (the last vertex connects back to the
/// first) and may describe a non-convex or self-intersecting shape. Polygons
/// with fewer than three vertices or with every vertex on one line contain
/// nothing.
///
/// Boundary convention: a crossing is counted only when the edge lies strictly
/// to the right of the point and spans it half-open in `y`. For an axis-aligned
/// box this puts points on the minimum-`x` and minimum-`y` edges inside and
/// points on the maximum-`x` and maximum-`y` edges outside, so adjacent boxes
/// never both claim a shared edge.
pub fn point_in_polygon(point: Point, polygon: &[Point]) -> bool {
    if polygon.len() < 3 || is_collinear(polygon) {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);
        // `yi > y` differing from `yj > y` implies `yj != yi`, so the division is safe.
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// All vertices lie on a single line (or coincide).
fn is_collinear(polygon: &[Point]) -> bool {
    let origin = polygon[0];
    let Some(dir) = polygon.iter().map(|p| *p - origin).find(|d| *d != Vec2::ZERO) else {
        return true;
    };
    polygon.iter().all(|p| dir.cross(*p - origin) == 0.0)
}

/// Returns `true` if `point` lies inside `rect` or on any of its edges.
///
/// Unlike [`Rect::contains`], the maximum edges are included too. The rect is
/// expected to be normalized (`x0 <= x1`, `y0 <= y1`).
pub fn point_in_rect(point: Point, rect: Rect) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Signed area of an implicitly closed polygon (shoelace formula).
///
/// Positive for clockwise winding in a y-down coordinate space.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        twice += polygon[j].x * polygon[i].y - polygon[i].x * polygon[j].y;
        j = i;
    }
    twice * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> [Point; 4] {
        [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn interior_and_far_points() {
        let sq = square();
        assert!(point_in_polygon(Point::new(5.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(500.0, -300.0), &sq));
        assert!(!point_in_polygon(Point::new(-0.001, 5.0), &sq));
    }

    #[test]
    fn edges_follow_half_open_convention() {
        let sq = square();
        // Minimum edges are inside.
        assert!(point_in_polygon(Point::new(0.0, 5.0), &sq));
        assert!(point_in_polygon(Point::new(5.0, 0.0), &sq));
        // Maximum edges are outside.
        assert!(!point_in_polygon(Point::new(10.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(5.0, 10.0), &sq));
    }

    #[test]
    fn winding_does_not_matter() {
        let mut sq = square();
        sq.reverse();
        assert!(point_in_polygon(Point::new(5.0, 5.0), &sq));
        assert!(!point_in_polygon(Point::new(15.0, 5.0), &sq));
    }

    #[test]
    fn non_convex_notch_is_outside() {
        // A "U" shape opening upwards.
        let u = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(3.0, 6.0),
            Point::new(6.0, 6.0),
            Point::new(6.0, 0.0),
            Point::new(9.0, 0.0),
            Point::new(9.0, 9.0),
            Point::new(0.0, 9.0),
        ];
        assert!(!point_in_polygon(Point::new(4.5, 3.0), &u));
        assert!(point_in_polygon(Point::new(1.5, 3.0), &u));
        assert!(point_in_polygon(Point::new(4.5, 7.5), &u));
    }

    #[test]
    fn empty_and_degenerate_polygons_contain_nothing() {
        assert!(!point_in_polygon(Point::ZERO, &[]));
        assert!(!point_in_polygon(Point::ZERO, &[Point::ZERO, Point::new(1.0, 1.0)]));
        let line = [Point::new(0.0, 0.0), Point::new(0.0, 10.0), Point::new(0.0, 5.0)];
        assert!(!point_in_polygon(Point::new(-1.0, 5.0), &line));
        assert!(!point_in_polygon(Point::new(0.0, 5.0), &line));
    }

    #[test]
    fn self_intersecting_bow_tie_keeps_its_lobes() {
        let bow_tie = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        // The lobes cancel in the signed area but still enclose points.
        assert_eq!(polygon_area(&bow_tie), 0.0);
        assert!(point_in_polygon(Point::new(9.0, 5.0), &bow_tie));
        assert!(point_in_polygon(Point::new(1.0, 5.0), &bow_tie));
        // Between the lobes, above the crossing.
        assert!(!point_in_polygon(Point::new(5.0, 2.0), &bow_tie));
        assert!(!point_in_polygon(Point::new(20.0, 5.0), &bow_tie));
    }

    #[test]
    fn rect_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(point_in_rect(Point::new(10.0, 10.0), r));
        assert!(point_in_rect(Point::new(0.0, 0.0), r));
        assert!(!point_in_rect(Point::new(10.0001, 5.0), r));
    }

    #[test]
    fn area_sign_tracks_winding() {
        let sq = square();
        assert_eq!(polygon_area(&sq), 100.0);
        let mut rev = sq;
        rev.reverse();
        assert_eq!(polygon_area(&rev), -100.0);
    }
}
