// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sides, axes, and relative placement of boxes.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// One of the four sides of a box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Towards smaller `y`.
    Top,
    /// Towards larger `x`.
    Right,
    /// Towards larger `y`.
    #[default]
    Bottom,
    /// Towards smaller `x`.
    Left,
}

/// A coordinate axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Component of `p` along this axis.
    pub fn of(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

impl Side {
    /// All sides, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The side facing this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// The axis along which moving towards this side changes the coordinate.
    ///
    /// `Top`/`Bottom` move along [`Axis::Y`], `Left`/`Right` along [`Axis::X`].
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Y,
            Self::Left | Self::Right => Axis::X,
        }
    }

    /// Whether this side lies at the smaller end of its axis.
    pub const fn is_origin(self) -> bool {
        matches!(self, Self::Top | Self::Left)
    }

    /// Lowercase name, as used in placement strings and style values.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// The coordinate of this edge of `rect`.
    pub fn edge_of(self, rect: Rect) -> f64 {
        match self {
            Self::Top => rect.y0,
            Self::Right => rect.x1,
            Self::Bottom => rect.y1,
            Self::Left => rect.x0,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of `from` the box `to` sits on.
///
/// Decided by the dominant component of the center-to-center delta. Ties go
/// to the vertical sides, and coincident centers report [`Side::Top`].
pub fn side_between(from: Rect, to: Rect) -> Side {
    let d = to.center() - from.center();
    if d.x.abs() > d.y.abs() {
        if d.x > 0.0 { Side::Right } else { Side::Left }
    } else if d.y > 0.0 {
        Side::Bottom
    } else {
        Side::Top
    }
}

/// The edge of `rect` closest to `point`.
///
/// Useful for finding where a pointer left a box. Ties prefer `Left`, then
/// `Right`, then `Top`, then `Bottom`.
pub fn nearest_edge(point: Point, rect: Rect) -> Side {
    let candidates = [
        (Side::Left, (point.x - rect.x0).abs()),
        (Side::Right, (rect.x1 - point.x).abs()),
        (Side::Top, (point.y - rect.y0).abs()),
        (Side::Bottom, (rect.y1 - point.y).abs()),
    ];
    let mut best = candidates[0];
    for c in &candidates[1..] {
        if c.1 < best.1 {
            best = *c;
        }
    }
    best.0
}

/// Corners of `rect`, clockwise in a y-down space starting at the top-left.
pub fn rect_corners(rect: Rect) -> [Point; 4] {
    [
        Point::new(rect.x0, rect.y0),
        Point::new(rect.x1, rect.y0),
        Point::new(rect.x1, rect.y1),
        Point::new(rect.x0, rect.y1),
    ]
}
