// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transit session state machine.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use tether_event::{Deferred, Millis, NodeBounds, NodeTree};
use tether_geometry::{point_in_polygon, point_in_rect, side_between};

use crate::options::{TransitError, TransitOptions, TransitStrategy};
use crate::zone::{GRACE_EXIT_PADDING, corridor, fan, grace_area};

/// One of the two surfaces a tracker watches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The element that opened the content.
    Trigger,
    /// The floating content.
    Content,
}

impl Surface {
    /// The other surface.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Trigger => Self::Content,
            Self::Content => Self::Trigger,
        }
    }
}

/// Why a pointer exit was confirmed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExitReason {
    /// The pointer left straight onto something unrelated to either surface.
    Unrelated,
    /// The pointer moved outside every safe zone.
    LeftSafeArea,
    /// No movement arrived in time to resolve the session.
    Fallback,
}

/// A confirmed exit: the owner should close the content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PointerExit {
    /// The surface the pointer last left.
    pub from: Surface,
    /// Why the exit was confirmed.
    pub reason: ExitReason,
}

#[derive(Clone, Debug)]
struct Session {
    from: Surface,
    exit: Point,
    /// Precomputed region for [`TransitStrategy::GraceArea`].
    hull: Vec<Point>,
}

/// Keeps hover content open while the pointer crosses the gap between a
/// trigger and its content.
///
/// Leaving one surface starts a session; the session ends quietly when the
/// pointer enters either surface, and ends with a [`PointerExit`] when the
/// pointer strays outside the safe zones, leaves straight onto unrelated UI,
/// or stops reporting movement for [`TransitOptions::fallback_delay_ms`].
///
/// Bounds are read through the host's [`NodeBounds`] on every call, so the
/// tracker follows layout changes without being told.
#[derive(Clone, Debug)]
pub struct TransitTracker<K> {
    options: TransitOptions,
    trigger: Option<K>,
    content: Option<K>,
    enabled: bool,
    ignored: SmallVec<[K; 4]>,
    session: Option<Session>,
    fallback: Deferred<()>,
}

impl<K: Copy + Eq + Debug> TransitTracker<K> {
    /// Create an enabled tracker with no surfaces.
    pub fn new(options: TransitOptions) -> Result<Self, TransitError> {
        options.validate()?;
        Ok(Self {
            options,
            trigger: None,
            content: None,
            enabled: true,
            ignored: SmallVec::new(),
            session: None,
            fallback: Deferred::new(),
        })
    }

    /// Current options.
    pub fn options(&self) -> &TransitOptions {
        &self.options
    }

    /// Replace the options. A running session keeps going under the new
    /// buffer.
    pub fn set_options(&mut self, options: TransitOptions) -> Result<(), TransitError> {
        options.validate()?;
        self.options = options;
        Ok(())
    }

    /// Set or clear the trigger node. Clearing ends any session silently.
    pub fn set_trigger(&mut self, node: Option<K>) {
        self.trigger = node;
        if node.is_none() {
            self.clear();
        }
    }

    /// Set or clear the content node. Clearing ends any session silently.
    pub fn set_content(&mut self, node: Option<K>) {
        self.content = node;
        if node.is_none() {
            self.clear();
        }
    }

    /// Turn tracking on or off. Turning it off ends any session silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear();
        }
    }

    /// Nodes the pointer may leave onto without closing, typically sibling
    /// triggers of a shared hover group whose own enter handling takes over.
    pub fn set_ignored(&mut self, nodes: impl IntoIterator<Item = K>) {
        self.ignored = nodes.into_iter().collect();
    }

    /// Whether a session is in progress.
    pub fn is_pointer_in_transit(&self) -> bool {
        self.session.is_some()
    }

    /// When [`TransitTracker::poll`] would confirm an exit.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.fallback.due_at()
    }

    /// The pointer left the trigger at `position`, onto `related` (the DOM
    /// `relatedTarget`, if any).
    pub fn trigger_leave<H>(
        &mut self,
        position: Point,
        related: Option<K>,
        now: Millis,
        host: &H,
    ) -> Option<PointerExit>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        self.leave(Surface::Trigger, position, related, now, host)
    }

    /// The pointer left the content at `position`, onto `related`.
    pub fn content_leave<H>(
        &mut self,
        position: Point,
        related: Option<K>,
        now: Millis,
        host: &H,
    ) -> Option<PointerExit>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        self.leave(Surface::Content, position, related, now, host)
    }

    /// The pointer entered the trigger.
    pub fn trigger_enter(&mut self) {
        self.enter(Surface::Trigger);
    }

    /// The pointer entered the content.
    pub fn content_enter(&mut self) {
        self.enter(Surface::Content);
    }

    fn enter(&mut self, surface: Surface) {
        if self.session.is_some() {
            tracing::trace!(?surface, "transit resolved by enter");
            self.clear();
        }
    }

    fn leave<H>(
        &mut self,
        from: Surface,
        position: Point,
        related: Option<K>,
        now: Millis,
        host: &H,
    ) -> Option<PointerExit>
    where
        H: NodeTree<K> + NodeBounds<K>,
    {
        if !self.enabled {
            return None;
        }
        let (trigger, content) = (self.trigger?, self.content?);
        let (source, dest) = match from {
            Surface::Trigger => (trigger, content),
            Surface::Content => (content, trigger),
        };

        if let Some(r) = related {
            if host.contains(&dest, &r) || self.ignored.iter().any(|n| host.contains(n, &r)) {
                tracing::trace!(?from, related = ?r, "direct hand-off");
                self.clear();
                return None;
            }
            let unrelated = !host.contains(&source, &r) && !host.contains(&r, &dest);
            if unrelated {
                self.clear();
                return Some(self.exit(from, ExitReason::Unrelated));
            }
        }

        let (Some(source_rect), Some(dest_rect)) = (host.bounds(&source), host.bounds(&dest))
        else {
            self.clear();
            return None;
        };
        let hull = match self.options.strategy {
            TransitStrategy::SafePolygon => Vec::new(),
            TransitStrategy::GraceArea => {
                grace_area(position, source_rect, dest_rect, GRACE_EXIT_PADDING)
            }
        };
        tracing::trace!(?from, ?position, "transit started");
        self.session = Some(Session {
            from,
            exit: position,
            hull,
        });
        self.fallback.schedule(now, self.options.fallback_delay_ms, ());
        None
    }

    /// Document-wide pointer move.
    pub fn pointer_move<H>(&mut self, position: Point, host: &H) -> Option<PointerExit>
    where
        H: NodeBounds<K>,
    {
        let session = self.session.as_ref()?;
        self.fallback.cancel();
        let (Some(trigger), Some(content)) = (self.trigger, self.content) else {
            self.clear();
            return None;
        };
        let (Some(trigger_rect), Some(content_rect)) = (host.bounds(&trigger), host.bounds(&content))
        else {
            self.clear();
            return None;
        };
        let (source, target) = match session.from {
            Surface::Trigger => (trigger_rect, content_rect),
            Surface::Content => (content_rect, trigger_rect),
        };

        if point_in_rect(position, target) {
            tracing::trace!(from = ?session.from, "transit reached destination");
            self.clear();
            return None;
        }
        if point_in_rect(position, source) || self.is_safe(session, position, source, target) {
            return None;
        }
        let from = session.from;
        self.clear();
        Some(self.exit(from, ExitReason::LeftSafeArea))
    }

    fn is_safe(&self, session: &Session, position: Point, source: Rect, target: Rect) -> bool {
        match self.options.strategy {
            TransitStrategy::SafePolygon => {
                let buffer = self.options.buffer;
                let side = side_between(source, target);
                point_in_rect(position, corridor(source, target, side, buffer))
                    || point_in_polygon(position, &fan(session.exit, target, side, buffer))
            }
            TransitStrategy::GraceArea => point_in_polygon(position, &session.hull),
        }
    }

    /// Confirm an exit if the session went quiet for too long.
    pub fn poll(&mut self, now: Millis) -> Option<PointerExit> {
        self.fallback.poll(now)?;
        let from = self.session.take()?.from;
        Some(self.exit(from, ExitReason::Fallback))
    }

    fn exit(&self, from: Surface, reason: ExitReason) -> PointerExit {
        tracing::debug!(?from, ?reason, "pointer exit");
        PointerExit { from, reason }
    }

    fn clear(&mut self) {
        self.session = None;
        self.fallback.cancel();
    }
}
