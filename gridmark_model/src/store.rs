// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! String-set persistence for the grid model.
//!
//! The store abstraction is deliberately small: a string-keyed collection
//! of string sets, the least a host platform's preference storage can
//! offer. Each marked cell is encoded as one `"<row>,<col>:<date>"` entry
//! with the date in ISO-8601 (`YYYY-MM-DD`) form, and the full entry set
//! is replaced on every save — there is no incremental diffing.
//!
//! Loading is tolerant by design: every entry is parsed independently,
//! and an entry that fails to parse (wrong field count, non-integer
//! coordinates, unparsable date) or names a cell outside the grid is
//! skipped. One bad entry never fails the load or disturbs its valid
//! neighbors.

use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::cell::{Cell, GridSpec};
use crate::grid::GridModel;

/// Store key under which the marked-cell entry set is kept.
pub const CELL_DATA_KEY: &str = "cell_data";

/// A string-keyed string-set store.
///
/// Writes are fire-and-forget: the in-memory [`GridModel`] remains the
/// source of truth for rendering, and a failed or slow write is not
/// surfaced here. Implementations that defer I/O must apply writes in
/// call order so a later save cannot be clobbered by an earlier one.
pub trait CellStore {
    /// Returns the entries stored under `key`, or an empty vec.
    fn read_set(&self, key: &str) -> Vec<String>;

    /// Replaces the entries stored under `key`.
    fn write_set(&mut self, key: &str, entries: &[String]);
}

/// In-memory [`CellStore`] for tests and simple hosts.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    sets: HashMap<String, Vec<String>>,
}

impl CellStore for MemoryStore {
    fn read_set(&self, key: &str) -> Vec<String> {
        self.sets.get(key).cloned().unwrap_or_default()
    }

    fn write_set(&mut self, key: &str, entries: &[String]) {
        self.sets.insert(key.to_owned(), entries.to_vec());
    }
}

/// Encodes one marked cell as a store entry.
#[must_use]
pub fn encode_entry(cell: Cell, date: NaiveDate) -> String {
    format!("{},{}:{}", cell.row, cell.col, date.format("%Y-%m-%d"))
}

/// Decodes a store entry back into a cell and date.
///
/// Returns `None` for any malformed entry.
#[must_use]
pub fn decode_entry(entry: &str) -> Option<(Cell, NaiveDate)> {
    let (coords, date_str) = entry.split_once(':')?;
    let (row_str, col_str) = coords.split_once(',')?;
    let row = row_str.parse::<u32>().ok()?;
    let col = col_str.parse::<u32>().ok()?;
    let date = date_str.parse::<NaiveDate>().ok()?;
    Some((Cell::new(row, col), date))
}

/// Loads a model from `store`, skipping malformed or out-of-range entries.
#[must_use]
pub fn load(spec: GridSpec, store: &impl CellStore) -> GridModel {
    let mut model = GridModel::new(spec);
    for entry in store.read_set(CELL_DATA_KEY) {
        if let Some((cell, date)) = decode_entry(&entry) {
            // Out-of-range coordinates fail the mark and are dropped,
            // like any other unusable entry.
            model.mark(cell, date);
        }
    }
    model
}

/// Saves the full marked-cell set of `model` into `store`.
///
/// The persisted set is replaced wholesale; entry order is arbitrary.
pub fn save(model: &GridModel, store: &mut impl CellStore) {
    let entries: Vec<String> = model
        .iter()
        .map(|(cell, date)| encode_entry(cell, date))
        .collect();
    store.write_set(CELL_DATA_KEY, &entries);
}
