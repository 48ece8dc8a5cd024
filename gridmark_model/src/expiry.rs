// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expiry sweep: prune cells whose mark has aged out.
//!
//! The sweep is a maintenance pass, run once per activation of the
//! owning widget (for example, when it becomes visible again), never per
//! frame. Between sweeps the renderer already suppresses the fill of a
//! cell past the threshold, so a cell that crosses the boundary simply
//! stops showing its fill until the next activation prunes it. That lazy
//! window is intentional: pruning eagerly would mutate and persist state
//! on every draw.

use chrono::NaiveDate;

use crate::grid::{GridModel, elapsed_days};

/// Default age, in whole days, past which a marked cell is pruned.
///
/// Matches the settled band of the color ramp: anything the renderer no
/// longer fills is eventually also removed.
pub const DEFAULT_EXPIRY_DAYS: i64 = 25;

/// Removes every cell older than `threshold_days`, returning the count.
///
/// A cell is removed when `elapsed_days(marked, today) > threshold_days`;
/// cells exactly at the threshold and future-dated cells are kept.
/// Running the sweep twice in a row removes nothing the second time.
pub fn sweep(model: &mut GridModel, today: NaiveDate, threshold_days: i64) -> usize {
    model.retain(|_, marked| elapsed_days(marked, today) <= threshold_days)
}
