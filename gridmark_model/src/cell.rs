// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Fixed grid dimensions, set at construction and immutable thereafter.
///
/// A spec with zero rows or columns is degenerate: it contains no cells,
/// so every [`GridSpec::contains`] check fails and a model built from it
/// stays empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    rows: u32,
    cols: u32,
}

impl GridSpec {
    /// Creates a spec with the given row and column counts.
    #[must_use]
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns `true` if `cell` lies inside this grid.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }
}

/// Integer cell coordinates: `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols` for the owning [`GridSpec`].
///
/// `Cell` is a plain hash-map key; no ordering between cells is implied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index, counted from the top.
    pub row: u32,
    /// Column index, counted from the left.
    pub col: u32,
}

impl Cell {
    /// Creates a cell coordinate pair.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}
