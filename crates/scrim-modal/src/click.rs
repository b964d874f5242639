#![forbid(unsafe_code)]

//! Click-position tracking for origin-anchored open animations.
//!
//! The host registers a document-level click listener and feeds every click
//! into a [`ClickTracker`]. When a dialog opens within the anchor window of
//! the most recent click, the open animation scales out of that point
//! instead of the viewport center.
//!
//! Invariants:
//! - Single slot: a new click replaces the previous one and restarts the
//!   window (cancel-and-replace).
//! - A recorded click is visible for exactly `[T, T + 100ms)`; at
//!   `T + 100ms` it is already expired.
//! - Reads never clear the slot. Two dialogs opening within the same window
//!   both anchor to the same click.

use std::cell::Cell;

use web_time::{Duration, Instant};

/// How long a recorded click stays available as an animation anchor.
pub const CLICK_ANCHOR_WINDOW: Duration = Duration::from_millis(100);

/// A page-coordinate click point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickPoint {
    pub x: f64,
    pub y: f64,
}

impl ClickPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Single-slot recorder for the most recent document click.
///
/// Expiry is evaluated at read time against the recorded instant, so an
/// idle tracker costs nothing and no timer needs cancelling on replace.
#[derive(Debug, Default)]
pub struct ClickTracker {
    slot: Cell<Option<(ClickPoint, Instant)>>,
}

impl ClickTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a click, replacing any previous one and restarting the window.
    pub fn record(&self, point: ClickPoint) {
        self.record_at(point, Instant::now());
    }

    /// [`ClickTracker::record`] with an explicit clock reading.
    pub fn record_at(&self, point: ClickPoint, at: Instant) {
        self.slot.set(Some((point, at)));
    }

    /// The current anchor, if the window has not elapsed. Never clears.
    #[must_use]
    pub fn peek(&self) -> Option<ClickPoint> {
        self.peek_at(Instant::now())
    }

    /// [`ClickTracker::peek`] with an explicit clock reading.
    #[must_use]
    pub fn peek_at(&self, now: Instant) -> Option<ClickPoint> {
        let (point, at) = self.slot.get()?;
        if now.duration_since(at) < CLICK_ANCHOR_WINDOW {
            Some(point)
        } else {
            None
        }
    }
}
