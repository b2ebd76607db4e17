// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Event: the small vocabulary the overlay crates share with a host toolkit.
//!
//! ## Overview
//!
//! The overlay crates never own a scene graph. A host hands them node keys
//! (`K: Copy + Eq`, usually a slot id or a generational key) and answers
//! questions about those keys through two lookup traits:
//!
//! - [`NodeTree`]: logical parent of a node and whether it is still attached.
//!   Containment is derived from the parent chain, so a portal can report its
//!   owner as the parent and content rendered elsewhere still counts as inside.
//! - [`NodeBounds`]: the node's current border box in a shared coordinate space.
//!
//! [`SimpleTree`] implements both for tests, demos and small hosts.
//!
//! Time is an explicit millisecond timestamp supplied by the caller.
//! [`Deferred`] turns that into a cancelable "run this later" slot where a new
//! schedule supersedes the old one.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use tether_event::{NodeBounds, NodeTree, SimpleTree};
//!
//! let mut tree = SimpleTree::new();
//! tree.insert(1_u32, None, Rect::new(0.0, 0.0, 800.0, 600.0));
//! tree.insert(2, Some(1), Rect::new(10.0, 10.0, 90.0, 40.0));
//!
//! assert!(tree.contains(&1, &2));
//! assert!(!tree.contains(&2, &1));
//! assert_eq!(tree.bounds(&2), Some(Rect::new(10.0, 10.0, 90.0, 40.0)));
//!
//! tree.detach(&2);
//! assert!(!tree.is_connected(&2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod deferred;
mod pointer;
mod tree;

pub use deferred::Deferred;
pub use pointer::{Button, PRIMARY_BUTTON, PointerEvent, PointerType};
pub use tree::{NodeBounds, NodeTree, SimpleTree};

/// Milliseconds on a host-defined monotonic clock.
pub type Millis = u64;
