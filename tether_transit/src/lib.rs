// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Transit: keep hover content open while the pointer travels to it.
//!
//! Tooltips and hover cards close when the pointer leaves their trigger. If the
//! content sits a little way off, the straight path to it crosses page area
//! that belongs to neither surface, and a naive implementation closes before
//! the pointer arrives. [`TransitTracker`] starts a short session when the
//! pointer leaves one surface and only confirms an exit once the pointer
//! clearly heads elsewhere.
//!
//! Two region shapes are available through [`TransitStrategy`]:
//!
//! - `SafePolygon` (default): a corridor over the gap between the surfaces,
//!   padded by [`TransitOptions::buffer`], plus a fan from the exit point to
//!   the far edge of the destination.
//! - `GraceArea`: the convex hull of the padded exit point and the
//!   destination's corners, fixed when the pointer leaves.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use tether_event::SimpleTree;
//! use tether_transit::{TransitOptions, TransitTracker};
//!
//! let mut host = SimpleTree::new();
//! host.insert(0_u32, None, Rect::new(0.0, 0.0, 800.0, 600.0)); // page
//! host.insert(1, Some(0), Rect::new(0.0, 0.0, 100.0, 40.0)); // trigger
//! host.insert(2, Some(0), Rect::new(0.0, 60.0, 100.0, 160.0)); // tooltip
//!
//! let mut transit = TransitTracker::new(TransitOptions::default()).unwrap();
//! transit.set_trigger(Some(1));
//! transit.set_content(Some(2));
//!
//! // Leave the trigger downwards, onto the page.
//! assert_eq!(transit.trigger_leave(Point::new(50.0, 40.0), Some(0), 0, &host), None);
//! assert!(transit.is_pointer_in_transit());
//!
//! // Straight down across the gap is fine...
//! assert_eq!(transit.pointer_move(Point::new(50.0, 50.0), &host), None);
//! // ...wandering off sideways is not.
//! assert!(transit.pointer_move(Point::new(300.0, 50.0), &host).is_some());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod options;
mod tracker;
mod zone;

pub use options::{FRAME_MS, TransitError, TransitOptions, TransitStrategy};
pub use tracker::{ExitReason, PointerExit, Surface, TransitTracker};
pub use zone::GRACE_EXIT_PADDING;
