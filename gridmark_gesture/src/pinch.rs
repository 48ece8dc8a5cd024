// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Tracks the contact distance of an active two-finger pinch.
///
/// The owner begins the pinch when a second contact lands and feeds in
/// both contact positions on every update. Each update yields the scale
/// factor relative to the previous sample and the current midpoint of
/// the contacts, which the caller uses as the zoom focal point.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchState {
    prev_distance: Option<f64>,
}

impl PinchState {
    /// Starts (or re-anchors) the pinch from the current contact pair.
    pub fn begin(&mut self, a: Point, b: Point) {
        self.prev_distance = Some((b - a).hypot());
    }

    /// Updates the pinch, returning `(factor, focal)` for this sample.
    ///
    /// Returns `None` while no pinch is active or when the previous
    /// sample had (near-)coincident contacts, in which case the distance
    /// is re-anchored instead of producing an unbounded factor.
    pub fn update(&mut self, a: Point, b: Point) -> Option<(f64, Point)> {
        let prev = self.prev_distance?;
        let distance = (b - a).hypot();
        self.prev_distance = Some(distance);
        if prev < f64::EPSILON {
            return None;
        }
        Some((distance / prev, a.midpoint(b)))
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.prev_distance = None;
    }

    /// Returns `true` while a pinch is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.prev_distance.is_some()
    }
}
