// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Floating: place popovers, menus and tooltips next to their anchors.
//!
//! ## Overview
//!
//! Given an anchor rect, the floating content's size, and a boundary, the
//! engine finds where the content should go. It works in a fixed order:
//!
//! 1. **offset**: step away from the anchor by `side_offset` plus the arrow
//!    height, and along it by `align_offset`.
//! 2. **shift**: slide along the anchor edge to stay inside the boundary. With
//!    [`Sticky::Partial`] the content never slides past the anchor's extents.
//! 3. **flip**: if the preferred side still overflows, try the opposite side
//!    (and, for aligned placements, the opposite alignment). When nothing fits,
//!    the placement with the least overflow wins.
//! 4. **size**: report how much room is left, for content that wants a
//!    responsive max size.
//! 5. **arrow**: point the arrow at the anchor's center, within padding.
//! 6. **transform origin**: derive the animation origin from the arrow.
//! 7. **hide**: flag an anchor that scrolled entirely out of the boundary.
//!
//! Shift and flip only run when [`FloatingOptions::avoid_collisions`] is set,
//! and hide only with [`FloatingOptions::hide_when_detached`].
//!
//! ## Layers
//!
//! [`compute_position`] is a pure function. [`FloatingLayer`] wraps it with the
//! lifecycle of mounted content: it measures nodes through the
//! [`tether_event`] host traits, recomputes after scroll, resize and layout
//! notifications (or every frame with [`UpdateStrategy::Always`]), publishes
//! sizing custom properties through a [`StyleSink`], and stops as soon as the
//! content unmounts.
//!
//! ```
//! use kurbo::Rect;
//! use tether_event::SimpleTree;
//! use tether_floating::{Align, Anchor, FloatingLayer, FloatingOptions};
//!
//! let mut host = SimpleTree::new();
//! host.insert(1_u32, None, Rect::new(40.0, 20.0, 140.0, 52.0)); // trigger
//! host.insert(2, Some(1), Rect::new(0.0, 0.0, 180.0, 120.0)); // content
//!
//! let mut layer = FloatingLayer::new(FloatingOptions {
//!     align: Align::Start,
//!     side_offset: 8.0,
//!     ..FloatingOptions::default()
//! })
//! .unwrap();
//! layer.set_anchor(Some(Anchor::Node(1)));
//! layer.mount_content(2);
//!
//! let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);
//! let placed = layer.update(&host, viewport).unwrap();
//! assert_eq!(placed.placement.to_string(), "bottom-start");
//! assert_eq!((placed.position.x, placed.position.y), (40.0, 60.0));
//! assert!(layer.placement_state().is_positioned);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod compute;
mod layer;
mod middleware;
mod types;

pub use compute::{ArrowPosition, Geometry, Positioned, clipping_rect, compute_position};
pub use layer::{
    Anchor, ArrowStyle, ContentStyle, FloatingLayer, PlacementState, StyleSink, StyleValue,
    VAR_ANCHOR_HEIGHT, VAR_ANCHOR_WIDTH, VAR_AVAILABLE_HEIGHT, VAR_AVAILABLE_WIDTH,
    VAR_TRANSFORM_ORIGIN,
};
pub use middleware::Steps;
pub use types::{
    Align, Direction, FloatingError, FloatingOptions, Length, Placement, Sticky, TransformOrigin,
    UpdateStrategy, validate_arrow,
};
