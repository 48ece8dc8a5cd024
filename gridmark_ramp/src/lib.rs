// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark Ramp: the time-decay fill color for marked cells.
//!
//! [`color_for`] is a pure function from whole elapsed days since a
//! cell's marked date to an RGBA fill color. It has no side effects and
//! no notion of wall-clock time; callers re-derive the elapsed-day count
//! from the current date on every evaluation.
//!
//! The ramp runs through three bands:
//!
//! - Days `0..=8`: opaque red to opaque yellow. The interpolation
//!   fraction is `sqrt(days / 9)`, so the color moves fast in the first
//!   days and slows as it approaches yellow — early marks read as
//!   urgent.
//! - Days `9..=25`: opaque yellow to a translucent green
//!   (alpha 64/255). Fraction is `sqrt((days - 9) / 16)`.
//! - Past day 25 the color stays at the settled translucent green.
//!
//! A negative count (a future-dated mark) yields full transparency:
//! nothing is filled until the marked day arrives.
//!
//! ```
//! use gridmark_ramp::color_for;
//!
//! let fresh = color_for(0).to_rgba8();
//! assert_eq!((fresh.r, fresh.g, fresh.b, fresh.a), (255, 0, 0, 255));
//! assert_eq!(color_for(26), color_for(25));
//! ```

use peniko::Color;

/// Elapsed days at which the ramp reaches opaque yellow.
pub const YELLOW_AT_DAYS: i64 = 9;

/// Elapsed days past which the color no longer changes.
///
/// This is also the band the renderer fills and labels; the expiry sweep
/// prunes anything older on the next activation.
pub const SETTLED_AFTER_DAYS: i64 = 25;

/// Opaque red, the color of a cell marked today.
const FRESH: [u8; 4] = [255, 0, 0, 255];

/// Opaque yellow, reached after [`YELLOW_AT_DAYS`] days.
const MIDWAY: [u8; 4] = [255, 255, 0, 255];

/// Translucent green, the terminal color of the ramp.
const SETTLED: [u8; 4] = [0, 255, 0, 64];

/// Component-wise linear interpolation between two RGBA colors.
///
/// `fraction` is clamped to `[0, 1]` before use to guard floating-point
/// rounding at band edges; each channel (alpha included) is rounded to
/// the nearest 8-bit value.
#[allow(
    clippy::cast_possible_truncation,
    reason = "channels are rounded within [0, 255] before casting"
)]
fn lerp_rgba8(start: [u8; 4], end: [u8; 4], fraction: f64) -> [u8; 4] {
    let f = fraction.clamp(0.0, 1.0);
    let mut out = [0_u8; 4];
    for (channel, (s, e)) in out.iter_mut().zip(start.into_iter().zip(end)) {
        let s = f64::from(s);
        let e = f64::from(e);
        *channel = (s + f * (e - s)).round() as u8;
    }
    out
}

/// Returns `true` if a mark this old is drawn at all.
///
/// The visible band is `0..=`[`SETTLED_AFTER_DAYS`]; future-dated marks
/// and marks past the settled threshold render as border-only cells.
#[must_use]
pub fn is_visible(elapsed_days: i64) -> bool {
    (0..=SETTLED_AFTER_DAYS).contains(&elapsed_days)
}

/// Fill color for a cell marked `elapsed_days` ago.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    reason = "band offsets are at most 25 and convert to f64 exactly"
)]
pub fn color_for(elapsed_days: i64) -> Color {
    let [r, g, b, a] = if elapsed_days < 0 {
        [0, 0, 0, 0]
    } else if elapsed_days < YELLOW_AT_DAYS {
        let fraction = (elapsed_days as f64 / YELLOW_AT_DAYS as f64).sqrt();
        lerp_rgba8(FRESH, MIDWAY, fraction)
    } else if elapsed_days <= SETTLED_AFTER_DAYS {
        let span = (SETTLED_AFTER_DAYS - YELLOW_AT_DAYS) as f64;
        let fraction = ((elapsed_days - YELLOW_AT_DAYS) as f64 / span).sqrt();
        lerp_rgba8(MIDWAY, SETTLED, fraction)
    } else {
        SETTLED
    };
    Color::from_rgba8(r, g, b, a)
}
