// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer vocabulary.

use kurbo::Point;

/// Pointer button index, using the DOM numbering (0 = primary).
pub type Button = u8;

/// The primary (usually left) button.
pub const PRIMARY_BUTTON: Button = 0;

/// Kind of device that produced a pointer event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerType {
    /// A mouse or trackpad.
    #[default]
    Mouse,
    /// A stylus.
    Pen,
    /// A finger on a touch surface.
    Touch,
}

/// A pointer-down as seen by the overlay crates.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent<K> {
    /// The innermost node under the pointer.
    pub target: K,
    /// Position in the shared coordinate space.
    pub position: Point,
    /// Button that changed, or `None` when the event carries no button field.
    pub button: Option<Button>,
    /// Device kind.
    pub pointer_type: PointerType,
    /// Whether a handler already prevented the default action.
    pub default_prevented: bool,
}

impl<K> PointerEvent<K> {
    /// A primary-button mouse press on `target` at `position`.
    pub fn primary(target: K, position: Point) -> Self {
        Self {
            target,
            position,
            button: Some(PRIMARY_BUTTON),
            pointer_type: PointerType::Mouse,
            default_prevented: false,
        }
    }

    /// Same event with a different device kind.
    #[must_use]
    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Same event with a different button.
    #[must_use]
    pub fn with_button(mut self, button: Option<Button>) -> Self {
        self.button = button;
        self
    }

    /// Returns `true` for the primary button or when no button is reported.
    pub fn is_primary_or_buttonless(&self) -> bool {
        self.button.is_none_or(|b| b == PRIMARY_BUTTON)
    }
}
