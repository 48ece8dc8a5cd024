// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::pinch::PinchState;
use crate::press::LongPressState;

/// Host-assigned pointer identifier, stable for one contact's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PointerId(pub u64);

/// Raw pointer event fed into the [`Recognizer`].
///
/// Positions are in screen coordinates; timestamps are milliseconds on
/// any monotonic host clock.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// A contact landed.
    Down {
        /// Contact identifier.
        pointer: PointerId,
        /// Screen position.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// A contact moved.
    Move {
        /// Contact identifier.
        pointer: PointerId,
        /// Screen position.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// A contact lifted.
    Up {
        /// Contact identifier.
        pointer: PointerId,
        /// Screen position.
        pos: Point,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// The host cancelled a contact (focus loss, palm rejection, ...).
    Cancel {
        /// Contact identifier.
        pointer: PointerId,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
}

/// Recognized gesture, ready to apply to a viewport or selection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Gesture {
    /// Single-contact drag. `delta` is finger motion since the previous
    /// sample (current minus previous), in screen units.
    Pan {
        /// Finger motion since the previous sample.
        delta: Vec2,
    },
    /// Two-contact pinch. `factor` is the contact-distance ratio against
    /// the previous sample; `focal` is the current contact midpoint.
    Pinch {
        /// Scale factor relative to the previous sample.
        factor: f64,
        /// Focal point (contact midpoint) in screen coordinates.
        focal: Point,
    },
    /// A contact stayed within the touch slop for the long-press
    /// duration. Fired at most once per contact.
    LongPress {
        /// Press origin in screen coordinates.
        pos: Point,
    },
}

/// Recognition thresholds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// How long a contact must stay put before a long-press fires.
    pub long_press_ms: u64,
    /// Motion from the press origin tolerated before a pan begins
    /// (and a pending long-press is cancelled), in screen units.
    pub touch_slop: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            long_press_ms: 500,
            touch_slop: 8.0,
        }
    }
}

#[derive(Copy, Clone, Debug)]
struct Contact {
    id: PointerId,
    pos: Point,
}

/// Gestures recognized from one event; two can co-occur in rare orders.
pub type Gestures = SmallVec<[Gesture; 2]>;

/// Pointer-event state machine classifying pan, pinch, and long-press.
///
/// Feed every pointer event through [`Recognizer::handle`] and call
/// [`Recognizer::poll`] from the host's tick so a perfectly stationary
/// contact can still fire its long-press without another event arriving.
#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    config: RecognizerConfig,
    contacts: SmallVec<[Contact; 2]>,
    press: LongPressState,
    pinch: PinchState,
    pan_active: bool,
    press_consumed: bool,
    last_sample: Point,
}

impl Recognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: RecognizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Number of live contacts.
    #[must_use]
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// Processes one pointer event, returning recognized gestures.
    pub fn handle(&mut self, event: PointerEvent) -> Gestures {
        match event {
            PointerEvent::Down {
                pointer,
                pos,
                time_ms,
            } => self.on_down(pointer, pos, time_ms),
            PointerEvent::Move {
                pointer,
                pos,
                time_ms,
            } => self.on_move(pointer, pos, time_ms),
            PointerEvent::Up { pointer, pos, .. } => self.on_up(pointer, Some(pos)),
            PointerEvent::Cancel { pointer, .. } => self.on_up(pointer, None),
        }
    }

    /// Checks the long-press deadline against `now_ms`.
    ///
    /// Hosts call this from their periodic tick; it emits the long-press
    /// for a contact that has been perfectly stationary since its down
    /// event.
    pub fn poll(&mut self, now_ms: u64) -> Option<Gesture> {
        if self.contacts.len() != 1 {
            return None;
        }
        let pos = self.press.fire_due(now_ms)?;
        self.press_consumed = true;
        Some(Gesture::LongPress { pos })
    }

    fn contact_index(&self, id: PointerId) -> Option<usize> {
        self.contacts.iter().position(|c| c.id == id)
    }

    fn on_down(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> Gestures {
        match self.contact_index(pointer) {
            // A down for a live id replaces its position; the host
            // skipped the matching up event.
            Some(index) => self.contacts[index].pos = pos,
            None => self.contacts.push(Contact { id: pointer, pos }),
        }

        match self.contacts.len() {
            1 => {
                self.press.arm(pos, time_ms, self.config.long_press_ms);
                self.pan_active = false;
                self.press_consumed = false;
                self.last_sample = pos;
            }
            2 => {
                self.press.cancel();
                self.pinch.begin(self.contacts[0].pos, self.contacts[1].pos);
            }
            // Additional contacts do not join the pinch; the first two
            // keep driving it.
            _ => {}
        }
        Gestures::new()
    }

    fn on_move(&mut self, pointer: PointerId, pos: Point, time_ms: u64) -> Gestures {
        let mut out = Gestures::new();
        let Some(index) = self.contact_index(pointer) else {
            return out;
        };
        self.contacts[index].pos = pos;

        if self.contacts.len() >= 2 {
            if index < 2
                && let Some((factor, focal)) =
                    self.pinch.update(self.contacts[0].pos, self.contacts[1].pos)
            {
                out.push(Gesture::Pinch { factor, focal });
            }
            return out;
        }

        if let Some(origin) = self.press.origin() {
            if (pos - origin).hypot() > self.config.touch_slop {
                // The contact left the slop: this is a pan, reported
                // from the press origin so no motion is lost.
                self.press.cancel();
                self.pan_active = true;
                out.push(Gesture::Pan {
                    delta: pos - origin,
                });
            } else if let Some(press_pos) = self.press.fire_due(time_ms) {
                self.press_consumed = true;
                out.push(Gesture::LongPress { pos: press_pos });
            }
        } else if self.pan_active && !self.press_consumed {
            out.push(Gesture::Pan {
                delta: pos - self.last_sample,
            });
        }
        self.last_sample = pos;
        out
    }

    fn on_up(&mut self, pointer: PointerId, _pos: Option<Point>) -> Gestures {
        let Some(index) = self.contact_index(pointer) else {
            return Gestures::new();
        };
        self.contacts.remove(index);

        match self.contacts.len() {
            0 => {
                self.press.cancel();
                self.pinch.end();
                self.pan_active = false;
                self.press_consumed = false;
            }
            1 => {
                // Pinch over; the surviving contact re-anchors panning.
                self.pinch.end();
                self.press.cancel();
                self.last_sample = self.contacts[0].pos;
                self.pan_active = !self.press_consumed;
            }
            _ => {
                self.pinch.begin(self.contacts[0].pos, self.contacts[1].pos);
            }
        }
        Gestures::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINGER: PointerId = PointerId(1);
    const THUMB: PointerId = PointerId(2);

    fn down(id: PointerId, x: f64, y: f64, t: u64) -> PointerEvent {
        PointerEvent::Down {
            pointer: id,
            pos: Point::new(x, y),
            time_ms: t,
        }
    }

    fn mv(id: PointerId, x: f64, y: f64, t: u64) -> PointerEvent {
        PointerEvent::Move {
            pointer: id,
            pos: Point::new(x, y),
            time_ms: t,
        }
    }

    fn up(id: PointerId, x: f64, y: f64, t: u64) -> PointerEvent {
        PointerEvent::Up {
            pointer: id,
            pos: Point::new(x, y),
            time_ms: t,
        }
    }

    #[test]
    fn pan_begins_past_the_slop_and_tracks_samples() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 100.0, 100.0, 0));

        // Sub-slop jitter produces nothing.
        assert!(rec.handle(mv(FINGER, 103.0, 100.0, 10)).is_empty());

        // The activating move reports the full delta from the origin.
        let out = rec.handle(mv(FINGER, 120.0, 100.0, 20));
        assert_eq!(
            out.as_slice(),
            [Gesture::Pan {
                delta: Vec2::new(20.0, 0.0)
            }]
        );

        // Subsequent moves report per-sample deltas.
        let out = rec.handle(mv(FINGER, 125.0, 110.0, 30));
        assert_eq!(
            out.as_slice(),
            [Gesture::Pan {
                delta: Vec2::new(5.0, 10.0)
            }]
        );
    }

    #[test]
    fn long_press_fires_once_for_a_stationary_contact() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 260.0, 10.0, 1000));

        assert_eq!(rec.poll(1400), None);
        assert_eq!(
            rec.poll(1500),
            Some(Gesture::LongPress {
                pos: Point::new(260.0, 10.0)
            })
        );
        assert_eq!(rec.poll(2000), None);
    }

    #[test]
    fn long_press_fires_from_a_late_jitter_move() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 50.0, 50.0, 0));

        // Within slop, past the deadline: the move itself fires it.
        let out = rec.handle(mv(FINGER, 52.0, 51.0, 600));
        assert_eq!(
            out.as_slice(),
            [Gesture::LongPress {
                pos: Point::new(50.0, 50.0)
            }]
        );
    }

    #[test]
    fn movement_cancels_a_pending_long_press() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 50.0, 50.0, 0));
        rec.handle(mv(FINGER, 80.0, 50.0, 100));

        assert_eq!(rec.poll(1000), None);
    }

    #[test]
    fn release_before_the_deadline_is_a_tap_and_ignored() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 50.0, 50.0, 0));
        assert!(rec.handle(up(FINGER, 50.0, 50.0, 100)).is_empty());
        assert_eq!(rec.poll(1000), None);
    }

    #[test]
    fn pan_is_suppressed_after_a_long_press() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 50.0, 50.0, 0));
        assert!(rec.poll(600).is_some());

        // Dragging the held finger afterwards pans nothing.
        assert!(rec.handle(mv(FINGER, 150.0, 150.0, 700)).is_empty());
        rec.handle(up(FINGER, 150.0, 150.0, 800));

        // A fresh press starts clean.
        rec.handle(down(FINGER, 0.0, 0.0, 1000));
        assert!(!rec.handle(mv(FINGER, 30.0, 0.0, 1020)).is_empty());
    }

    #[test]
    fn second_contact_starts_a_pinch_and_cancels_the_press() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 0.0, 0.0, 0));
        rec.handle(down(THUMB, 100.0, 0.0, 50));

        // No long-press can fire with two contacts down.
        assert_eq!(rec.poll(1000), None);

        let out = rec.handle(mv(THUMB, 200.0, 0.0, 100));
        assert_eq!(
            out.as_slice(),
            [Gesture::Pinch {
                factor: 2.0,
                focal: Point::new(100.0, 0.0)
            }]
        );
    }

    #[test]
    fn pinch_factor_is_relative_to_the_previous_sample() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 0.0, 0.0, 0));
        rec.handle(down(THUMB, 100.0, 0.0, 10));

        rec.handle(mv(THUMB, 150.0, 0.0, 20));
        let out = rec.handle(mv(THUMB, 300.0, 0.0, 30));
        assert_eq!(
            out.as_slice(),
            [Gesture::Pinch {
                factor: 2.0,
                focal: Point::new(150.0, 0.0)
            }]
        );
    }

    #[test]
    fn lifting_one_finger_ends_the_pinch_and_resumes_panning() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 0.0, 0.0, 0));
        rec.handle(down(THUMB, 100.0, 0.0, 10));
        rec.handle(mv(THUMB, 120.0, 0.0, 20));
        rec.handle(up(THUMB, 120.0, 0.0, 30));

        // The surviving finger pans from its own position.
        let out = rec.handle(mv(FINGER, 10.0, 5.0, 40));
        assert_eq!(
            out.as_slice(),
            [Gesture::Pan {
                delta: Vec2::new(10.0, 5.0)
            }]
        );
    }

    #[test]
    fn moves_for_unknown_pointers_are_ignored() {
        let mut rec = Recognizer::default();
        assert!(rec.handle(mv(FINGER, 10.0, 10.0, 0)).is_empty());
        assert!(rec.handle(up(FINGER, 10.0, 10.0, 5)).is_empty());
        assert_eq!(rec.contact_count(), 0);
    }

    #[test]
    fn cancel_clears_the_contact() {
        let mut rec = Recognizer::default();
        rec.handle(down(FINGER, 10.0, 10.0, 0));
        rec.handle(PointerEvent::Cancel {
            pointer: FINGER,
            time_ms: 100,
        });

        assert_eq!(rec.contact_count(), 0);
        assert_eq!(rec.poll(1000), None);
    }
}
