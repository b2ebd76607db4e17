// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot placement from measured rectangles.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect, Size};
use tether_geometry::Axis;

use crate::middleware::Pipeline;
use crate::types::{FloatingOptions, Placement, TransformOrigin};

/// Measured inputs for one placement computation, all in the same
/// coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geometry {
    /// The anchor's border box (or a virtual rect for point anchors).
    pub anchor: Rect,
    /// The floating content's size.
    pub content: Size,
    /// The arrow's size, if the content has one.
    pub arrow: Option<Size>,
    /// Region the content should stay inside, see [`clipping_rect`].
    pub boundary: Rect,
}

/// Where the arrow ended up, relative to the content box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowPosition {
    /// Axis the offset runs along: `X` for top/bottom placements.
    pub axis: Axis,
    /// Offset of the arrow's leading edge from the content's leading edge.
    pub offset: f64,
    /// Distance between the arrow and the anchor's center. Zero when the
    /// arrow points at the anchor's center.
    pub center_offset: f64,
}

impl ArrowPosition {
    /// Horizontal offset, for top and bottom placements.
    pub fn x(&self) -> Option<f64> {
        (self.axis == Axis::X).then_some(self.offset)
    }

    /// Vertical offset, for left and right placements.
    pub fn y(&self) -> Option<f64> {
        (self.axis == Axis::Y).then_some(self.offset)
    }
}

/// Result of [`compute_position`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Positioned {
    /// The placement actually used; differs from the requested one after a flip.
    pub placement: Placement,
    /// Top-left corner of the content.
    pub position: Point,
    /// Room left inside the boundary for the content to grow into.
    pub available: Size,
    /// Size of the anchor.
    pub anchor: Size,
    /// Arrow placement, when an arrow was measured.
    pub arrow: Option<ArrowPosition>,
    /// Origin for open and close animations.
    pub transform_origin: TransformOrigin,
    /// The anchor is entirely outside the boundary. Only computed when
    /// [`FloatingOptions::hide_when_detached`] is set.
    pub reference_hidden: bool,
}

impl Positioned {
    /// Whether the arrow should be hidden because it could not point at the
    /// anchor's center. Always `true` without an arrow.
    pub fn cannot_center_arrow(&self) -> bool {
        self.arrow.is_none_or(|a| a.center_offset != 0.0)
    }

    /// The position snapped to the device pixel grid.
    pub fn snapped_position(&self, device_pixel_ratio: f64) -> Point {
        let snap = |v: f64| (v * device_pixel_ratio).round() / device_pixel_ratio;
        Point::new(snap(self.position.x), snap(self.position.y))
    }
}

/// Intersect the viewport with every boundary rect.
///
/// With no boundaries this is the viewport itself. Disjoint boundaries give an
/// empty (possibly inverted) rect, which makes every placement overflow.
pub fn clipping_rect(viewport: Rect, boundaries: impl IntoIterator<Item = Rect>) -> Rect {
    boundaries.into_iter().fold(viewport, |acc, b| {
        Rect::new(
            acc.x0.max(b.x0),
            acc.y0.max(b.y0),
            acc.x1.min(b.x1),
            acc.y1.min(b.y1),
        )
    })
}

/// Place floating content next to its anchor.
///
/// Runs offset, then shift and flip (when avoiding collisions), then size,
/// arrow, transform origin and hide (when requested).
///
/// ```
/// use kurbo::{Rect, Size};
/// use tether_floating::{FloatingOptions, Geometry, compute_position};
/// use tether_geometry::Side;
///
/// let geometry = Geometry {
///     anchor: Rect::new(100.0, 250.0, 200.0, 280.0),
///     content: Size::new(100.0, 100.0),
///     arrow: None,
///     boundary: Rect::new(0.0, 0.0, 400.0, 300.0),
/// };
/// let placed = compute_position(&geometry, &FloatingOptions::default());
/// // No room below, so the content flips above the anchor.
/// assert_eq!(placed.placement.side, Side::Top);
/// assert_eq!(placed.position.y, 150.0);
/// ```
pub fn compute_position(geometry: &Geometry, options: &FloatingOptions) -> Positioned {
    let done = Pipeline::new(
        options,
        geometry.anchor,
        geometry.content,
        geometry.boundary,
        geometry.arrow,
    )
    .run();

    let desired = options.desired_placement();
    if done.placement != desired {
        tracing::debug!(desired = %desired, resolved = %done.placement, "placement changed to avoid collision");
    }

    let axis = done.placement.alignment_axis();
    Positioned {
        placement: done.placement,
        position: done.coords,
        available: done.data.available.unwrap_or(geometry.content),
        anchor: geometry.anchor.size(),
        arrow: done.data.arrow.map(|a| ArrowPosition {
            axis,
            offset: a.offset,
            center_offset: a.center_offset,
        }),
        transform_origin: done.data.transform_origin.unwrap_or_default(),
        reference_hidden: done.data.reference_hidden.unwrap_or(false),
    }
}
