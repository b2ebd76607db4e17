// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker configuration.

use tether_event::Millis;

/// One animation frame at 60 Hz, in milliseconds.
pub const FRAME_MS: Millis = 16;

/// Shape of the region in which the pointer may travel between surfaces.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitStrategy {
    /// A corridor over the gap between the surfaces plus a fan from the exit
    /// point to the far edge of the destination. Recomputed from live bounds
    /// on every move, so it copes with offset and skewed layouts.
    #[default]
    SafePolygon,
    /// The convex hull of the padded exit point and the destination's
    /// corners, fixed when the pointer leaves.
    GraceArea,
}

/// Options for [`TransitTracker`](crate::TransitTracker).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransitOptions {
    /// Slack in pixels added around the safe zones.
    pub buffer: f64,
    /// How long a session may go without pointer movement before it is
    /// treated as an exit.
    pub fallback_delay_ms: Millis,
    /// See [`TransitStrategy`].
    pub strategy: TransitStrategy,
}

impl Default for TransitOptions {
    fn default() -> Self {
        Self {
            buffer: 1.0,
            fallback_delay_ms: FRAME_MS,
            strategy: TransitStrategy::SafePolygon,
        }
    }
}

impl TransitOptions {
    /// Check the options.
    pub fn validate(&self) -> Result<(), TransitError> {
        if !self.buffer.is_finite() || self.buffer < 0.0 {
            return Err(TransitError::InvalidBuffer(self.buffer));
        }
        Ok(())
    }
}

/// Rejected transit configuration.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransitError {
    /// The buffer was negative or not finite.
    #[error("transit buffer must be a finite, non-negative length, got {0}")]
    InvalidBuffer(f64),
}
