// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Geometry: the handful of planar predicates overlay interaction needs.
//!
//! ## Overview
//!
//! Everything here is a pure function over [`kurbo`] values. Nothing allocates
//! except [`convex_hull`], and nothing panics on malformed input: empty or
//! degenerate polygons simply contain no points.
//!
//! - [`point_in_polygon`]: ray casting over an implicitly closed vertex list.
//! - [`point_in_rect`]: containment that is inclusive on all four edges.
//! - [`convex_hull`]: Andrew's monotone chain, dropping interior collinear points.
//! - [`Side`] and [`side_between`]: which side of one box another box sits on.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tether_geometry::{Side, convex_hull, point_in_polygon, side_between};
//!
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(0.5, 0.5),
//! ];
//! let hull = convex_hull(&square);
//! assert_eq!(hull.len(), 4);
//! assert!(point_in_polygon(Point::new(0.25, 0.75), &hull));
//!
//! let trigger = Rect::new(0.0, 0.0, 100.0, 40.0);
//! let content = Rect::new(0.0, 60.0, 100.0, 160.0);
//! assert_eq!(side_between(trigger, content), Side::Bottom);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hull;
mod polygon;
mod side;

pub use hull::convex_hull;
pub use polygon::{point_in_polygon, point_in_rect, polygon_area};
pub use side::{Axis, Side, nearest_edge, rect_corners, side_between};
