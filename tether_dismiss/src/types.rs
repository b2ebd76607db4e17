// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer configuration and the events the registry reports.

use tether_event::PointerEvent;

/// How a layer reacts to an interaction it might be responsible for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// Dismiss.
    #[default]
    Close,
    /// Claim the interaction and do nothing with it.
    Ignore,
    /// Let a layer below decide; dismiss if none does.
    DeferOtherwiseClose,
    /// Let a layer below decide; do nothing if none does.
    DeferOtherwiseIgnore,
}

impl Behavior {
    /// Whether a layer with this behavior takes responsibility when it is the
    /// topmost candidate.
    pub const fn claims(self) -> bool {
        matches!(self, Self::Close | Self::Ignore)
    }

    /// Whether a responsible layer with this behavior dismisses.
    pub const fn closes(self) -> bool {
        matches!(self, Self::Close | Self::DeferOtherwiseClose)
    }
}

/// Per-layer configuration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerOptions {
    /// Reaction to a pointer-down outside the layer.
    pub interact_outside: Behavior,
    /// Reaction to the Escape key.
    pub escape_keydown: Behavior,
}

impl LayerOptions {
    /// Same behavior for both pointer and Escape.
    pub const fn uniform(behavior: Behavior) -> Self {
        Self {
            interact_outside: behavior,
            escape_keydown: behavior,
        }
    }
}

/// Identity of a registered layer.
///
/// Ids are never reused by the registry that issued them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub(crate) u64);

/// An outside pointer interaction handed to a layer's close logic.
///
/// Reads go to the original event, but preventing the default is tracked
/// separately. When an inner handler already prevented the original, the
/// consumer can still make its own decision without the two interfering.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractOutsideEvent<K> {
    event: PointerEvent<K>,
    prevented: bool,
}

impl<K> InteractOutsideEvent<K> {
    pub(crate) fn new(event: PointerEvent<K>) -> Self {
        Self {
            event,
            prevented: false,
        }
    }

    /// The original event.
    pub fn event(&self) -> &PointerEvent<K> {
        &self.event
    }

    /// Target of the original event.
    pub fn target(&self) -> &K {
        &self.event.target
    }

    /// Whether the original event's default was already prevented upstream.
    pub fn original_default_prevented(&self) -> bool {
        self.event.default_prevented
    }

    /// Ask the layer's owner not to close.
    pub fn prevent_default(&mut self) {
        self.prevented = true;
    }

    /// Whether [`InteractOutsideEvent::prevent_default`] was called.
    pub fn default_prevented(&self) -> bool {
        self.prevented
    }
}

/// Something a layer's owner should react to, usually by closing.
#[derive(Clone, Debug, PartialEq)]
pub enum DismissEvent<K> {
    /// A valid pointer interaction landed outside the responsible layer.
    InteractOutside {
        /// The layer.
        layer: LayerId,
        /// The interaction.
        event: InteractOutsideEvent<K>,
    },
    /// Focus moved to `target`, outside the layer.
    FocusOutside {
        /// The layer.
        layer: LayerId,
        /// The newly focused node.
        target: K,
    },
    /// Escape was pressed and this layer is responsible for it.
    EscapeKeydown {
        /// The layer.
        layer: LayerId,
    },
}

impl<K> DismissEvent<K> {
    /// The layer the event is addressed to.
    pub fn layer(&self) -> LayerId {
        match self {
            Self::InteractOutside { layer, .. }
            | Self::FocusOutside { layer, .. }
            | Self::EscapeKeydown { layer } => *layer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn behavior_predicates() {
        assert!(Behavior::Close.claims() && Behavior::Close.closes());
        assert!(Behavior::Ignore.claims() && !Behavior::Ignore.closes());
        assert!(!Behavior::DeferOtherwiseClose.claims() && Behavior::DeferOtherwiseClose.closes());
        assert!(!Behavior::DeferOtherwiseIgnore.claims() && !Behavior::DeferOtherwiseIgnore.closes());
    }

    #[test]
    fn wrapper_keeps_its_own_prevented_flag() {
        let mut original = PointerEvent::primary(7_u32, Point::new(1.0, 2.0));
        original.default_prevented = true;
        let mut wrapped = InteractOutsideEvent::new(original);
        assert!(wrapped.original_default_prevented());
        assert!(!wrapped.default_prevented());
        wrapped.prevent_default();
        assert!(wrapped.default_prevented());
        assert_eq!(*wrapped.target(), 7);
        assert_eq!(wrapped.event().position, Point::new(1.0, 2.0));
    }
}
