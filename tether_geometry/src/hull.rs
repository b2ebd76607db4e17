// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convex hull.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;

/// Computes the convex hull of `points` with Andrew's monotone chain.
///
/// Points are sorted by `x`, then `y`. The returned hull starts at the
/// smallest point and walks the upper chain (towards larger `y` first in a
/// y-down space) before coming back along the lower chain. Interior points and
/// interior collinear points are dropped.
///
/// Inputs of two points or fewer are returned unchanged.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then(a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut upper = chain(sorted.iter().copied());
    let mut lower = chain(sorted.iter().rev().copied());
    upper.pop();
    lower.pop();

    if upper.len() == 1 && lower.len() == 1 && upper[0] == lower[0] {
        return upper;
    }
    upper.extend(lower);
    upper
}

/// One half of the monotone chain. Pops while the last two points and `p` do
/// not make a strict turn in the chain's direction.
fn chain(points: impl Iterator<Item = Point>) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::new();
    for p in points {
        while out.len() >= 2 {
            let q = out[out.len() - 1];
            let r = out[out.len() - 2];
            if (q.x - r.x) * (p.y - r.y) >= (q.y - r.y) * (p.x - r.x) {
                out.pop();
            } else {
                break;
            }
        }
        out.push(p);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn unit_square_drops_center() {
        let hull = convex_hull(&[p(1.0, 1.0), p(0.5, 0.5), p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)]);
        assert_eq!(hull, vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
    }

    #[test]
    fn input_order_is_irrelevant() {
        let a = convex_hull(&[p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0), p(0.5, 0.5)]);
        let b = convex_hull(&[p(0.5, 0.5), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0), p(0.0, 0.0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn collinear_interior_points_are_excluded() {
        let hull = convex_hull(&[
            p(0.0, 0.0),
            p(2.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 4.0),
            p(0.0, 4.0),
            p(0.0, 2.0),
        ]);
        assert_eq!(hull.len(), 4, "only the corners survive: {hull:?}");
        assert!(!hull.contains(&p(2.0, 0.0)));
        assert!(!hull.contains(&p(0.0, 2.0)));
    }

    #[test]
    fn tiny_inputs_pass_through() {
        assert!(convex_hull(&[]).is_empty());
        assert_eq!(convex_hull(&[p(3.0, 1.0)]), vec![p(3.0, 1.0)]);
        assert_eq!(
            convex_hull(&[p(3.0, 1.0), p(0.0, 0.0)]),
            vec![p(3.0, 1.0), p(0.0, 0.0)]
        );
    }

    #[test]
    fn repeated_point_collapses_to_one() {
        let hull = convex_hull(&[p(2.0, 2.0), p(2.0, 2.0), p(2.0, 2.0)]);
        assert_eq!(hull, vec![p(2.0, 2.0)]);
    }

    #[test]
    fn triangle_keeps_all_vertices() {
        let hull = convex_hull(&[p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)]);
        assert_eq!(hull.len(), 3);
    }
}
