// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Safe zones between two surfaces.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use tether_geometry::{Axis, Side, convex_hull, nearest_edge, rect_corners};

/// How far the fan spreads around the exit point, in buffers.
const FAN_SPREAD: f64 = 4.0;

/// Padding around the exit point for the grace-area hull.
pub const GRACE_EXIT_PADDING: f64 = 5.0;

fn on_axes(main_axis: Axis, main: f64, cross: f64) -> Point {
    match main_axis {
        Axis::X => Point::new(main, cross),
        Axis::Y => Point::new(cross, main),
    }
}

fn cross_range(axis: Axis, rect: Rect) -> (f64, f64) {
    match axis {
        Axis::X => (rect.x0, rect.x1),
        Axis::Y => (rect.y0, rect.y1),
    }
}

/// The band covering the gap between `from` and `to`, where `to` lies on
/// `side` of `from`.
///
/// Across the travel direction it spans both boxes; along it, the space between
/// their facing edges. Everything is padded by `buffer`. Overlapping boxes
/// give a band over the overlap.
pub(crate) fn corridor(from: Rect, to: Rect, side: Side, buffer: f64) -> Rect {
    let main = side.axis();
    let cross = main.cross();
    let a = side.edge_of(from);
    let b = side.opposite().edge_of(to);
    let (f0, f1) = cross_range(cross, from);
    let (t0, t1) = cross_range(cross, to);
    let lo = on_axes(main, a.min(b) - buffer, f0.min(t0) - buffer);
    let hi = on_axes(main, a.max(b) + buffer, f1.max(t1) + buffer);
    Rect::from_points(lo, hi)
}

/// A quadrilateral fanning from `exit` out to the far edge of `target`, which
/// lies on `side` of the surface the pointer left.
///
/// The narrow end straddles the exit point, spread across the travel direction
/// and pulled back by `buffer`, so the first few pixels of movement stay
/// inside.
pub(crate) fn fan(exit: Point, target: Rect, side: Side, buffer: f64) -> [Point; 4] {
    let main = side.axis();
    let cross = main.cross();
    let toward = if side.is_origin() { -1.0 } else { 1.0 };
    let back = main.of(exit) - toward * buffer;
    let c = cross.of(exit);
    let spread = FAN_SPREAD * buffer;
    let far = side.edge_of(target);
    let (t0, t1) = cross_range(cross, target);
    [
        on_axes(main, back, c - spread),
        on_axes(main, back, c + spread),
        on_axes(main, far, t1 + buffer),
        on_axes(main, far, t0 - buffer),
    ]
}

/// Convex hull of the padded exit point and the target's corners.
///
/// The exit side is the edge of `source` nearest to `exit`; the two padded
/// points sit just inside it.
pub(crate) fn grace_area(exit: Point, source: Rect, target: Rect, padding: f64) -> Vec<Point> {
    let Point { x, y } = exit;
    let padded = match nearest_edge(exit, source) {
        Side::Top => [Point::new(x - padding, y + padding), Point::new(x + padding, y + padding)],
        Side::Bottom => [Point::new(x - padding, y - padding), Point::new(x + padding, y - padding)],
        Side::Left => [Point::new(x + padding, y - padding), Point::new(x + padding, y + padding)],
        Side::Right => [Point::new(x - padding, y - padding), Point::new(x - padding, y + padding)],
    };
    let mut points = Vec::with_capacity(6);
    points.extend_from_slice(&padded);
    points.extend_from_slice(&rect_corners(target));
    convex_hull(&points)
}
