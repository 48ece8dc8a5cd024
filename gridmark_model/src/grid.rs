// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chrono::NaiveDate;
use hashbrown::HashMap;

use crate::cell::{Cell, GridSpec};

/// Number of whole days from `marked` to `today`.
///
/// Negative when the marked date lies in the future. This is re-derived
/// from the wall-clock date wherever it is needed; nothing caches it at
/// mark time, so day boundaries take effect on the next evaluation.
#[must_use]
pub fn elapsed_days(marked: NaiveDate, today: NaiveDate) -> i64 {
    today.signed_duration_since(marked).num_days()
}

/// Sparse mapping from grid cells to marked calendar dates.
///
/// The grid dimensions are fixed at construction. Cells outside the grid
/// can never be marked; [`GridModel::mark`] rejects them instead of
/// growing the grid. Re-marking a cell replaces its date.
#[derive(Clone, Debug)]
pub struct GridModel {
    spec: GridSpec,
    cells: HashMap<Cell, NaiveDate>,
}

impl GridModel {
    /// Creates an empty model for the given grid dimensions.
    #[must_use]
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            cells: HashMap::new(),
        }
    }

    /// The grid dimensions this model was built with.
    #[must_use]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Marks `cell` with `date`, replacing any previous date.
    ///
    /// Returns `false` (and changes nothing) when the cell lies outside
    /// the grid.
    pub fn mark(&mut self, cell: Cell, date: NaiveDate) -> bool {
        if !self.spec.contains(cell) {
            return false;
        }
        self.cells.insert(cell, date);
        true
    }

    /// Removes the mark on `cell`, returning the date it held.
    pub fn clear(&mut self, cell: Cell) -> Option<NaiveDate> {
        self.cells.remove(&cell)
    }

    /// The marked date of `cell`, or `None` for an empty cell.
    #[must_use]
    pub fn date_at(&self, cell: Cell) -> Option<NaiveDate> {
        self.cells.get(&cell).copied()
    }

    /// Returns `true` if `cell` is marked.
    #[must_use]
    pub fn is_marked(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of marked cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cell is marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over all marked cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, NaiveDate)> + '_ {
        self.cells.iter().map(|(cell, date)| (*cell, *date))
    }

    /// Removes every marked cell for which `predicate` returns `false`.
    ///
    /// Returns the number of cells removed.
    pub fn retain(&mut self, mut predicate: impl FnMut(Cell, NaiveDate) -> bool) -> usize {
        let before = self.cells.len();
        self.cells.retain(|cell, date| predicate(*cell, *date));
        before - self.cells.len()
    }
}
