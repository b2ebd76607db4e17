// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement vocabulary, options, and errors.

use core::fmt;

use kurbo::{Insets, Size};
use tether_geometry::{Axis, Side};

/// Alignment of the content along the anchor edge it sits against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    /// Line up the leading edges (left in LTR, top for side placements).
    Start,
    /// Center on the anchor.
    #[default]
    Center,
    /// Line up the trailing edges.
    End,
}

impl Align {
    /// The mirrored alignment; `Center` stays put.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::Center => Self::Center,
            Self::End => Self::Start,
        }
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

/// A side plus an alignment, e.g. `bottom-start`.
///
/// Formats the way placement strings are usually spelled: the side alone for
/// centered placements, `side-align` otherwise.
///
/// ```
/// use tether_floating::{Align, Placement};
/// use tether_geometry::Side;
///
/// assert_eq!(Placement::new(Side::Bottom, Align::Start).to_string(), "bottom-start");
/// assert_eq!(Placement::new(Side::Left, Align::Center).to_string(), "left");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Side of the anchor the content is placed on.
    pub side: Side,
    /// Alignment along that side.
    pub align: Align,
}

impl Placement {
    /// Create a placement.
    pub const fn new(side: Side, align: Align) -> Self {
        Self { side, align }
    }

    /// Axis the content moves along when it gets further from the anchor.
    pub const fn side_axis(self) -> Axis {
        self.side.axis()
    }

    /// Axis the alignment applies to.
    pub const fn alignment_axis(self) -> Axis {
        self.side.axis().cross()
    }

    /// Same alignment on the facing side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::new(self.side.opposite(), self.align)
    }

    /// Same side with start and end swapped.
    #[must_use]
    pub const fn opposite_alignment(self) -> Self {
        Self::new(self.side, self.align.opposite())
    }

    /// Whether this placement carries an alignment suffix.
    pub const fn is_aligned(self) -> bool {
        !matches!(self.align, Align::Center)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_aligned() {
            write!(f, "{}-{}", self.side, self.align.as_str())
        } else {
            write!(f, "{}", self.side)
        }
    }
}

/// How hard the content holds on to its anchor when it would overflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sticky {
    /// Shift only while the content still overlaps the anchor extents.
    #[default]
    Partial,
    /// Keep shifting into the boundary even if that detaches it from the anchor.
    Always,
}

/// When a mounted floating layer recomputes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum UpdateStrategy {
    /// Only after scroll, resize, or layout notifications.
    #[default]
    Optimized,
    /// Additionally on every animation frame in which the anchor moved.
    Always,
}

/// Reading direction, which mirrors start/end on top and bottom placements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right.
    #[default]
    Ltr,
    /// Right to left.
    Rtl,
}

/// A CSS length used in transform origins.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the content box.
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero folds `-0.0` into `0.0`.
        match *self {
            Self::Px(v) => write!(f, "{}px", v + 0.0),
            Self::Percent(v) => write!(f, "{}%", v + 0.0),
        }
    }
}

/// Point the content scales from when it animates in or out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransformOrigin {
    /// Horizontal component.
    pub x: Length,
    /// Vertical component.
    pub y: Length,
}

impl Default for TransformOrigin {
    fn default() -> Self {
        Self {
            x: Length::Percent(50.0),
            y: Length::Percent(50.0),
        }
    }
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Options for placing floating content.
///
/// The defaults describe content centered below its anchor, touching it, with
/// collision avoidance on.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingOptions {
    /// Preferred side of the anchor.
    pub side: Side,
    /// Gap between anchor and content, in addition to the arrow height.
    pub side_offset: f64,
    /// Preferred alignment.
    pub align: Align,
    /// Nudge along the alignment axis. Ignored for centered placements and
    /// mirrored for `End`.
    pub align_offset: f64,
    /// Minimum distance between the arrow and the content corners.
    pub arrow_padding: f64,
    /// Shift and flip to stay inside the collision boundary.
    pub avoid_collisions: bool,
    /// Extra room to keep between the content and the collision boundary.
    pub collision_padding: Insets,
    /// See [`Sticky`].
    pub sticky: Sticky,
    /// Hide the content once the anchor is fully clipped by the boundary.
    pub hide_when_detached: bool,
    /// See [`UpdateStrategy`].
    pub update_strategy: UpdateStrategy,
    /// See [`Direction`].
    pub direction: Direction,
    /// Device pixels per layout pixel; the final translate snaps to this grid.
    pub device_pixel_ratio: f64,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            side_offset: 0.0,
            align: Align::Center,
            align_offset: 0.0,
            arrow_padding: 0.0,
            avoid_collisions: true,
            collision_padding: Insets::ZERO,
            sticky: Sticky::Partial,
            hide_when_detached: false,
            update_strategy: UpdateStrategy::Optimized,
            direction: Direction::Ltr,
            device_pixel_ratio: 1.0,
        }
    }
}

impl FloatingOptions {
    /// The requested placement before collision handling.
    pub const fn desired_placement(&self) -> Placement {
        Placement::new(self.side, self.align)
    }

    /// Check numeric fields for values no layout can satisfy.
    pub fn validate(&self) -> Result<(), FloatingError> {
        finite("side_offset", self.side_offset)?;
        finite("align_offset", self.align_offset)?;
        non_negative("arrow_padding", self.arrow_padding)?;
        let p = self.collision_padding;
        for v in [p.x0, p.y0, p.x1, p.y1] {
            non_negative("collision_padding", v)?;
        }
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return Err(FloatingError::InvalidPixelRatio(self.device_pixel_ratio));
        }
        Ok(())
    }
}

/// Check an arrow glyph size: `width` runs along the anchor edge, `height`
/// points from the content towards the anchor.
pub fn validate_arrow(size: Size) -> Result<Size, FloatingError> {
    non_negative("arrow width", size.width)?;
    non_negative("arrow height", size.height)?;
    Ok(size)
}

fn finite(field: &'static str, value: f64) -> Result<(), FloatingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FloatingError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), FloatingError> {
    finite(field, value)?;
    if value < 0.0 {
        Err(FloatingError::Negative { field, value })
    } else {
        Ok(())
    }
}

/// Rejected floating configuration.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum FloatingError {
    /// A numeric option was NaN or infinite.
    #[error("`{field}` must be finite, got {value}")]
    NonFinite {
        /// Offending option.
        field: &'static str,
        /// Its value.
        value: f64,
    },
    /// A length that cannot be negative was.
    #[error("`{field}` must not be negative, got {value}")]
    Negative {
        /// Offending option.
        field: &'static str,
        /// Its value.
        value: f64,
    },
    /// The device pixel ratio was zero, negative, or not finite.
    #[error("device pixel ratio must be positive, got {0}")]
    InvalidPixelRatio(f64),
}
