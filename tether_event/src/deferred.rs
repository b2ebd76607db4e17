// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancelable deferred action.

use crate::Millis;

/// A single pending action due at a host-supplied time.
///
/// Scheduling again supersedes whatever was pending, so a burst of events
/// yields one action, carrying the last payload, due `delay` after the last
/// event. Nothing runs on its own: the owner calls [`Deferred::poll`] with the
/// current time and acts on what comes back.
///
/// ```
/// use tether_event::Deferred;
///
/// let mut d = Deferred::new();
/// d.schedule(100, 10, "first");
/// d.schedule(105, 10, "second");
/// assert_eq!(d.due_at(), Some(115));
/// assert_eq!(d.poll(110), None);
/// assert_eq!(d.poll(115), Some("second"));
/// assert!(!d.is_pending());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deferred<T> {
    pending: Option<(Millis, T)>,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Deferred<T> {
    /// An idle slot.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `payload` to become due at `now + delay`, returning the
    /// payload it superseded, if any.
    pub fn schedule(&mut self, now: Millis, delay: Millis, payload: T) -> Option<T> {
        self.pending
            .replace((now.saturating_add(delay), payload))
            .map(|(_, p)| p)
    }

    /// Drop the pending action, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, p)| p)
    }

    /// Take the payload if it is due at `now`.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        match self.pending {
            Some((due, _)) if due <= now => self.cancel(),
            _ => None,
        }
    }

    /// When the pending action becomes due.
    pub fn due_at(&self) -> Option<Millis> {
        self.pending.as_ref().map(|(due, _)| *due)
    }

    /// The pending payload, without taking it.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, p)| p)
    }

    /// Whether an action is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
