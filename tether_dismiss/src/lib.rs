// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Dismiss: decide which overlay closes when the user clicks, tabs or
//! presses Escape outside of it.
//!
//! ## Overview
//!
//! Menus, dialogs and popovers stack. A click outside the topmost submenu
//! should close the whole menu once, not every level separately, and a click
//! inside the submenu must not close its parent. [`LayerRegistry`] keeps the
//! stack (topmost last) and arbitrates with one rule: scanning from the top,
//! the first layer whose [`Behavior`] is `Close` or `Ignore` is responsible;
//! if every layer defers, the bottommost one is.
//!
//! The host forwards document events:
//!
//! - [`LayerRegistry::pointer_down_capture`] and
//!   [`LayerRegistry::pointer_down_bubble`] for pointer-downs, then
//!   [`LayerRegistry::poll`] once [`LayerRegistry::next_deadline`] has passed;
//! - [`LayerRegistry::click`] to confirm touch interactions;
//! - [`LayerRegistry::focus_in`], plus [`LayerRegistry::focus_capture`] and
//!   [`LayerRegistry::blur_capture`] from each layer's own node;
//! - [`LayerRegistry::escape_keydown`].
//!
//! Each returns [`DismissEvent`]s addressed by [`LayerId`]. Closing is up to
//! the owner: an [`InteractOutsideEvent`] can be prevented first.
//!
//! Containment uses the host's logical tree ([`tether_event::NodeTree`]), and
//! anything inside a layer stacked above counts as inside, so portaled
//! submenus work even when the host reports their DOM parent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod registry;
mod types;

pub use registry::{DISPATCH_DELAY_MS, LayerRegistry, RESET_DELAY_MS};
pub use types::{Behavior, DismissEvent, InteractOutsideEvent, LayerId, LayerOptions};
