// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Tracks a pending long-press on a single contact.
///
/// Armed on pointer down, the state remembers the press origin and a
/// firing deadline. The owner cancels it when the contact moves past the
/// touch slop, when a second contact lands, or when the contact lifts;
/// otherwise [`LongPressState::fire_due`] yields the origin exactly once
/// when the deadline passes.
#[derive(Clone, Copy, Debug, Default)]
pub struct LongPressState {
    pending: Option<Pending>,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    origin: Point,
    deadline_ms: u64,
}

impl LongPressState {
    /// Arms a press at `origin`, due `hold_ms` after `now_ms`.
    pub fn arm(&mut self, origin: Point, now_ms: u64, hold_ms: u64) {
        self.pending = Some(Pending {
            origin,
            deadline_ms: now_ms.saturating_add(hold_ms),
        });
    }

    /// Cancels any pending press.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a press is armed and unfired.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// The press origin, while armed.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.pending.map(|p| p.origin)
    }

    /// Fires the press if its deadline has passed, disarming it.
    ///
    /// Returns the press origin on the first call at or after the
    /// deadline; later calls return `None` until the next arm.
    pub fn fire_due(&mut self, now_ms: u64) -> Option<Point> {
        let pending = self.pending?;
        if now_ms < pending.deadline_ms {
            return None;
        }
        self.pending = None;
        Some(pending.origin)
    }
}
