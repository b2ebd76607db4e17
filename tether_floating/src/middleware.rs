// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement pipeline.
//!
//! Each step reads the current coordinates and placement, may move the
//! content, records what it did, and may ask for a reset. A reset restarts the
//! pipeline from the first step; a reset to a new placement also recomputes the
//! starting coordinates. Recorded data survives resets so later runs can see
//! what earlier runs decided.

use kurbo::{Insets, Point, Rect, Size, Vec2};
use smallvec::SmallVec;
use tether_geometry::{Axis, Side};

use crate::types::{Align, Direction, FloatingOptions, Length, Placement, Sticky, TransformOrigin};

/// Upper bound on pipeline restarts for one computation.
pub(crate) const MAX_RESETS: u32 = 50;

bitflags::bitflags! {
    /// Pipeline steps enabled for a computation.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Steps: u8 {
        /// Push away from the anchor by the side and alignment offsets.
        const OFFSET = 1 << 0;
        /// Slide along the anchor edge to stay inside the boundary.
        const SHIFT = 1 << 1;
        /// Move to the opposite side when the preferred one overflows.
        const FLIP = 1 << 2;
        /// Measure the room left inside the boundary.
        const SIZE = 1 << 3;
        /// Center the arrow on the anchor.
        const ARROW = 1 << 4;
        /// Derive the animation origin.
        const TRANSFORM_ORIGIN = 1 << 5;
        /// Detect an anchor that left the boundary.
        const HIDE = 1 << 6;
    }
}

impl Steps {
    /// Steps implied by `options`.
    pub fn for_options(options: &FloatingOptions, has_arrow: bool) -> Self {
        let mut steps = Self::OFFSET | Self::SIZE | Self::TRANSFORM_ORIGIN;
        steps.set(Self::SHIFT | Self::FLIP, options.avoid_collisions);
        steps.set(Self::ARROW, has_arrow);
        steps.set(Self::HIDE, options.hide_when_detached);
        steps
    }
}

/// A single pipeline step, in run order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Step {
    Offset,
    Shift,
    Flip,
    Size,
    Arrow,
    TransformOrigin,
    Hide,
}

impl Step {
    const ORDER: [Self; 7] = [
        Self::Offset,
        Self::Shift,
        Self::Flip,
        Self::Size,
        Self::Arrow,
        Self::TransformOrigin,
        Self::Hide,
    ];

    const fn flag(self) -> Steps {
        match self {
            Self::Offset => Steps::OFFSET,
            Self::Shift => Steps::SHIFT,
            Self::Flip => Steps::FLIP,
            Self::Size => Steps::SIZE,
            Self::Arrow => Steps::ARROW,
            Self::TransformOrigin => Steps::TRANSFORM_ORIGIN,
            Self::Hide => Steps::HIDE,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct OffsetData {
    pub(crate) delta: Vec2,
    pub(crate) placement: Placement,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ShiftData {
    pub(crate) delta: Vec2,
    /// The axis the shift was allowed to move along.
    pub(crate) axis: Axis,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct FlipData {
    pub(crate) index: usize,
    /// Placements tried so far with their `[side, align, align]` overflows.
    pub(crate) history: SmallVec<[(Placement, [f64; 3]); 4]>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ArrowData {
    /// Offset of the arrow's leading edge from the content's leading edge.
    pub(crate) offset: f64,
    /// How far the arrow is from the anchor's center; zero when centered.
    pub(crate) center_offset: f64,
    /// Extra shift applied to the content so an aligned arrow can reach a small anchor.
    pub(crate) alignment_offset: Option<f64>,
}

/// Everything the steps have recorded.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct MiddlewareData {
    pub(crate) offset: Option<OffsetData>,
    pub(crate) shift: Option<ShiftData>,
    pub(crate) flip: Option<FlipData>,
    pub(crate) available: Option<Size>,
    pub(crate) arrow: Option<ArrowData>,
    pub(crate) transform_origin: Option<TransformOrigin>,
    pub(crate) reference_hidden: Option<bool>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Reset {
    /// Start over from the current coordinates.
    Restart,
    /// Start over from the given placement's initial coordinates.
    To(Placement),
}

/// One placement computation in progress.
#[derive(Clone, Debug)]
pub(crate) struct Pipeline<'a> {
    options: &'a FloatingOptions,
    reference: Rect,
    floating: Size,
    clipping: Rect,
    arrow: Option<Size>,
    initial: Placement,
    pub(crate) placement: Placement,
    pub(crate) coords: Point,
    pub(crate) data: MiddlewareData,
    pub(crate) resets: u32,
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(
        options: &'a FloatingOptions,
        reference: Rect,
        floating: Size,
        clipping: Rect,
        arrow: Option<Size>,
    ) -> Self {
        let initial = options.desired_placement();
        Self {
            options,
            reference,
            floating,
            clipping,
            arrow,
            initial,
            placement: initial,
            coords: coords_from_placement(reference, floating, initial, options.direction),
            data: MiddlewareData::default(),
            resets: 0,
        }
    }

    /// Run the enabled steps to completion.
    pub(crate) fn run(mut self) -> Self {
        let steps = Steps::for_options(self.options, self.arrow.is_some());
        let mut i = 0;
        while i < Step::ORDER.len() {
            let step = Step::ORDER[i];
            i += 1;
            if !steps.contains(step.flag()) {
                continue;
            }
            let reset = match step {
                Step::Offset => self.offset(),
                Step::Shift => self.shift(),
                Step::Flip => self.flip(),
                Step::Size => self.size(),
                Step::Arrow => self.arrow(),
                Step::TransformOrigin => self.transform_origin(),
                Step::Hide => self.hide(),
            };
            let Some(reset) = reset else { continue };
            if self.resets > MAX_RESETS {
                continue;
            }
            self.resets += 1;
            if let Reset::To(placement) = reset {
                self.placement = placement;
                self.coords = coords_from_placement(
                    self.reference,
                    self.floating,
                    placement,
                    self.options.direction,
                );
            }
            i = 0;
        }
        self
    }

    fn rtl(&self) -> bool {
        self.options.direction == Direction::Rtl
    }

    fn floating_rect(&self) -> Rect {
        Rect::from_origin_size(self.coords, self.floating)
    }

    /// How far `element` sticks out of the padded clipping rect on each side.
    /// Negative values are room to spare.
    fn overflow(&self, element: Rect) -> Insets {
        let clip = self.clipping;
        let pad = self.options.collision_padding;
        Insets::new(
            clip.x0 - element.x0 + pad.x0,
            clip.y0 - element.y0 + pad.y0,
            element.x1 - clip.x1 + pad.x1,
            element.y1 - clip.y1 + pad.y1,
        )
    }

    fn offset(&mut self) -> Option<Reset> {
        let p = self.placement;
        let settled = self.data.offset.is_some_and(|o| o.placement == p)
            && self.data.arrow.is_some_and(|a| a.alignment_offset.is_some());
        if settled {
            return None;
        }

        let main = self.options.side_offset + self.arrow.map_or(0.0, |a| a.height);
        let main = if p.side.is_origin() { -main } else { main };
        let cross = match p.align {
            Align::Start => self.options.align_offset,
            Align::Center => 0.0,
            Align::End => -self.options.align_offset,
        };
        let vertical = p.side_axis() == Axis::Y;
        let cross = if self.rtl() && vertical { -cross } else { cross };
        let delta = if vertical {
            Vec2::new(cross, main)
        } else {
            Vec2::new(main, cross)
        };

        self.coords += delta;
        self.data.offset = Some(OffsetData {
            delta,
            placement: p,
        });
        None
    }

    fn shift(&mut self) -> Option<Reset> {
        let overflow = self.overflow(self.floating_rect());
        let axis = self.placement.alignment_axis();
        let (min_side, max_side) = match axis {
            Axis::X => (Side::Left, Side::Right),
            Axis::Y => (Side::Top, Side::Bottom),
        };

        let mut next = self.coords;
        let v = axis.of(next);
        let lo = v + inset(overflow, min_side);
        let hi = v - inset(overflow, max_side);
        set_along(&mut next, axis, lo.max(v.min(hi)));
        if self.options.sticky == Sticky::Partial {
            next = self.limit_shift(next);
        }

        self.data.shift = Some(ShiftData {
            delta: next - self.coords,
            axis,
        });
        self.coords = next;
        None
    }

    /// Keep shifted coordinates within reach of the anchor.
    fn limit_shift(&self, mut c: Point) -> Point {
        let p = self.placement;
        let r = self.reference;
        let f = self.floating;

        let main = p.alignment_axis();
        let lo = main.of(r.origin()) - extent(f, main);
        let hi = main.of(r.origin()) + extent(r.size(), main);
        let v = clamp_loose(main.of(c), lo, hi);
        set_along(&mut c, main, v);

        let cross = p.side_axis();
        let offset = self
            .data
            .offset
            .map_or(0.0, |o| cross.of(o.delta.to_point()));
        let origin_side = p.side.is_origin();
        let lo = cross.of(r.origin()) - extent(f, cross) + if origin_side { offset } else { 0.0 };
        let hi = cross.of(r.origin()) + extent(r.size(), cross) + if origin_side { 0.0 } else { offset };
        let v = clamp_loose(cross.of(c), lo, hi);
        set_along(&mut c, cross, v);
        c
    }

    /// The two sides along the alignment axis that matter for overflow, the
    /// one the content grows towards first.
    fn alignment_sides(&self, p: Placement) -> (Side, Side) {
        let axis = p.alignment_axis();
        let leading = if self.rtl() { Align::End } else { Align::Start };
        let side = match axis {
            Axis::X if p.align == leading => Side::Right,
            Axis::X => Side::Left,
            Axis::Y if p.align == Align::Start => Side::Bottom,
            Axis::Y => Side::Top,
        };
        let side = if extent(self.reference.size(), axis) > extent(self.floating, axis) {
            side.opposite()
        } else {
            side
        };
        (side, side.opposite())
    }

    fn flip(&mut self) -> Option<Reset> {
        if self.data.arrow.is_some_and(|a| a.alignment_offset.is_some()) {
            return None;
        }

        let p = self.placement;
        let initial = self.initial;
        let mut candidates: SmallVec<[Placement; 4]> = SmallVec::new();
        candidates.push(initial);
        if initial.is_aligned() {
            candidates.push(initial.opposite_alignment());
            candidates.push(initial.opposite());
            candidates.push(initial.opposite().opposite_alignment());
        } else {
            candidates.push(initial.opposite());
        }

        let overflow = self.overflow(self.floating_rect());
        let (a, b) = self.alignment_sides(p);
        let overflows = [inset(overflow, p.side), inset(overflow, a), inset(overflow, b)];

        let previous = self.data.flip.as_ref();
        let next_index = previous.map_or(0, |f| f.index) + 1;
        let mut history = previous.map(|f| f.history.clone()).unwrap_or_default();
        history.push((p, overflows));

        if overflows.iter().all(|&o| o <= 0.0) {
            return None;
        }

        if let Some(&next) = candidates.get(next_index) {
            tracing::trace!(from = %p, to = %next, "placement overflows, trying next");
            self.data.flip = Some(FlipData {
                index: next_index,
                history,
            });
            return Some(Reset::To(next));
        }

        // Nothing fit outright. Prefer a placement whose side fits, least
        // alignment overflow first; else the least total overflow.
        let mut best: Option<(Placement, f64)> = None;
        for &(placement, o) in &history {
            if o[0] <= 0.0 && best.is_none_or(|(_, v)| o[1] < v) {
                best = Some((placement, o[1]));
            }
        }
        if best.is_none() {
            for &(placement, o) in &history {
                let total: f64 = o.iter().filter(|&&v| v > 0.0).sum();
                if best.is_none_or(|(_, v)| total < v) {
                    best = Some((placement, total));
                }
            }
        }

        match best {
            Some((fallback, _)) if fallback != p => {
                tracing::debug!(from = %p, to = %fallback, "no placement fits, using best fit");
                Some(Reset::To(fallback))
            }
            _ => None,
        }
    }

    fn size(&mut self) -> Option<Reset> {
        let overflow = self.overflow(self.floating_rect());
        let p = self.placement;
        let Size { width, height } = self.floating;

        let (height_side, width_side) = match p.side_axis() {
            Axis::Y => {
                let trailing = if self.rtl() { Align::Start } else { Align::End };
                let w = if p.align == trailing { Side::Left } else { Side::Right };
                (p.side, w)
            }
            Axis::X => {
                let h = if p.align == Align::End { Side::Top } else { Side::Bottom };
                (h, p.side)
            }
        };

        let max_clip_height = height - overflow.y0 - overflow.y1;
        let max_clip_width = width - overflow.x0 - overflow.x1;
        let mut available_height = (height - inset(overflow, height_side)).min(max_clip_height);
        let mut available_width = (width - inset(overflow, width_side)).min(max_clip_width);

        match self.data.shift {
            Some(ShiftData { axis: Axis::X, .. }) => available_width = max_clip_width,
            Some(ShiftData { axis: Axis::Y, .. }) => available_height = max_clip_height,
            None if !p.is_aligned() => {
                // Centered content grows symmetrically, so the tighter side counts twice.
                if p.side_axis() == Axis::Y {
                    available_width = width - 2.0 * symmetric_overflow(overflow.x0, overflow.x1);
                } else {
                    available_height = height - 2.0 * symmetric_overflow(overflow.y0, overflow.y1);
                }
            }
            None => {}
        }

        self.data.available = Some(Size::new(available_width, available_height));
        None
    }

    fn arrow(&mut self) -> Option<Reset> {
        let arrow = self.arrow?;
        let p = self.placement;
        let axis = p.alignment_axis();
        let padding = self.options.arrow_padding;

        let coord = axis.of(self.coords);
        let ref_start = axis.of(self.reference.origin());
        let ref_len = extent(self.reference.size(), axis);
        let client = extent(self.floating, axis);
        let arrow_len = arrow.width;

        let end_diff = ref_len + ref_start - coord - client;
        let start_diff = coord - ref_start;
        let center_to_reference = end_diff / 2.0 - start_diff / 2.0;

        let largest_padding = client / 2.0 - arrow_len / 2.0 - 1.0;
        let min_padding = padding.min(largest_padding);
        let max_padding = padding.min(largest_padding);
        let min = min_padding;
        let max = client - arrow_len - max_padding;
        let center = client / 2.0 - arrow_len / 2.0 + center_to_reference;
        let offset = min.max(center.min(max));

        // An aligned placement against a tiny anchor can leave the arrow
        // hanging past it; nudge the content once so the arrow still lands.
        let edge_padding = if center < min { min_padding } else { max_padding };
        let should_add = self.data.arrow.is_none()
            && p.is_aligned()
            && center != offset
            && ref_len / 2.0 - edge_padding - arrow_len / 2.0 < 0.0;
        let alignment_offset = match (should_add, center < min) {
            (false, _) => 0.0,
            (true, true) => center - min,
            (true, false) => center - max,
        };

        set_along(&mut self.coords, axis, coord + alignment_offset);
        let kept = self.data.arrow.and_then(|a| a.alignment_offset);
        self.data.arrow = Some(ArrowData {
            offset,
            center_offset: center - offset - alignment_offset,
            alignment_offset: if should_add { Some(alignment_offset) } else { kept },
        });
        should_add.then_some(Reset::Restart)
    }

    fn transform_origin(&mut self) -> Option<Reset> {
        let p = self.placement;
        let hidden = self.data.arrow.is_none_or(|a| a.center_offset != 0.0);
        let arrow = if hidden {
            Size::ZERO
        } else {
            self.arrow.unwrap_or(Size::ZERO)
        };

        let along = if hidden {
            Length::Percent(match p.align {
                Align::Start => 0.0,
                Align::Center => 50.0,
                Align::End => 100.0,
            })
        } else {
            Length::Px(self.data.arrow.map_or(0.0, |a| a.offset) + arrow.width / 2.0)
        };
        let h = arrow.height;
        let origin = match p.side {
            Side::Bottom => TransformOrigin {
                x: along,
                y: Length::Px(-h),
            },
            Side::Top => TransformOrigin {
                x: along,
                y: Length::Px(self.floating.height + h),
            },
            Side::Right => TransformOrigin {
                x: Length::Px(-h),
                y: along,
            },
            Side::Left => TransformOrigin {
                x: Length::Px(self.floating.width + h),
                y: along,
            },
        };
        self.data.transform_origin = Some(origin);
        None
    }

    fn hide(&mut self) -> Option<Reset> {
        let r = self.reference;
        let o = self.overflow(r);
        let clipped = [
            o.y0 - r.height(),
            o.x1 - r.width(),
            o.y1 - r.height(),
            o.x0 - r.width(),
        ];
        self.data.reference_hidden = Some(clipped.iter().any(|&v| v >= 0.0));
        None
    }
}

/// Starting coordinates: flush against `side`, aligned per `align`.
pub(crate) fn coords_from_placement(
    reference: Rect,
    floating: Size,
    placement: Placement,
    direction: Direction,
) -> Point {
    let center = reference.center();
    let common_x = center.x - floating.width / 2.0;
    let common_y = center.y - floating.height / 2.0;

    let mut p = match placement.side {
        Side::Top => Point::new(common_x, reference.y0 - floating.height),
        Side::Bottom => Point::new(common_x, reference.y1),
        Side::Right => Point::new(reference.x1, common_y),
        Side::Left => Point::new(reference.x0 - floating.width, common_y),
    };

    let axis = placement.alignment_axis();
    let common_align = extent(reference.size(), axis) / 2.0 - extent(floating, axis) / 2.0;
    let mirrored = direction == Direction::Rtl && placement.side_axis() == Axis::Y;
    let shift = if mirrored { -common_align } else { common_align };
    match placement.align {
        Align::Start => {
            let v = axis.of(p) - shift;
            set_along(&mut p, axis, v);
        }
        Align::End => {
            let v = axis.of(p) + shift;
            set_along(&mut p, axis, v);
        }
        Align::Center => {}
    }
    p
}

pub(crate) fn inset(insets: Insets, side: Side) -> f64 {
    match side {
        Side::Left => insets.x0,
        Side::Top => insets.y0,
        Side::Right => insets.x1,
        Side::Bottom => insets.y1,
    }
}

fn extent(size: Size, axis: Axis) -> f64 {
    match axis {
        Axis::X => size.width,
        Axis::Y => size.height,
    }
}

fn set_along(p: &mut Point, axis: Axis, v: f64) {
    match axis {
        Axis::X => p.x = v,
        Axis::Y => p.y = v,
    }
}

/// Clamp that tolerates `lo > hi` by letting the lower bound win.
fn clamp_loose(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

fn symmetric_overflow(a: f64, b: f64) -> f64 {
    let (a_pos, b_pos) = (a.max(0.0), b.max(0.0));
    if a_pos != 0.0 || b_pos != 0.0 {
        a_pos + b_pos
    } else {
        a.max(b)
    }
}
