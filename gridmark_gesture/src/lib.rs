// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark Gesture: classify raw pointer events into pan, pinch-zoom,
//! and long-press gestures.
//!
//! The [`Recognizer`] is a small, host-agnostic state machine. Hosts
//! feed it every [`PointerEvent`] they receive (with positions in screen
//! coordinates and timestamps in milliseconds) and apply the returned
//! [`Gesture`] values to their viewport or selection logic. It holds no
//! timers of its own: in a single-threaded, event-driven host the
//! long-press deadline is checked on each incoming event and via
//! [`Recognizer::poll`], which hosts call from whatever periodic tick
//! they already have.
//!
//! Recognition follows common touch semantics:
//!
//! - A single contact that moves past the touch slop starts a **pan**;
//!   every further move reports the delta since the previous sample.
//! - A second contact starts a **pinch**; each update reports the scale
//!   factor relative to the previous sample and the current midpoint of
//!   the two contacts as the focal point.
//! - A single contact that stays within the slop for the long-press
//!   duration fires a **long-press** exactly once; movement, a second
//!   contact, or release cancels it. After a long-press fires, panning
//!   stays suppressed until all contacts lift.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use gridmark_gesture::{Gesture, PointerEvent, PointerId, Recognizer};
//!
//! let mut recognizer = Recognizer::default();
//! let finger = PointerId(1);
//!
//! recognizer.handle(PointerEvent::Down {
//!     pointer: finger,
//!     pos: Point::new(10.0, 10.0),
//!     time_ms: 0,
//! });
//! let gestures = recognizer.handle(PointerEvent::Move {
//!     pointer: finger,
//!     pos: Point::new(40.0, 10.0),
//!     time_ms: 16,
//! });
//! assert!(matches!(gestures.as_slice(), [Gesture::Pan { .. }]));
//! ```

mod pinch;
mod press;
mod recognizer;

pub use pinch::PinchState;
pub use press::LongPressState;
pub use recognizer::{Gesture, Gestures, PointerEvent, PointerId, Recognizer, RecognizerConfig};
