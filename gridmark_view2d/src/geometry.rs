// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gridmark_model::{Cell, GridSpec};
use kurbo::{Point, Rect, Size};

/// Cell width used before the background's intrinsic size is known.
pub const DEFAULT_CELL_WIDTH: f64 = 250.0;

/// Cell height used before the background's intrinsic size is known.
pub const DEFAULT_CELL_HEIGHT: f64 = 150.0;

/// The content-space cell lattice.
///
/// Content-space units derive from the background image: once its
/// intrinsic size is known, `cell_width = background_width / cols` and
/// `cell_height = background_height / rows`, so the grid exactly covers
/// the background with no residual stretching. Until then a widget runs
/// on the [`DEFAULT_CELL_WIDTH`] x [`DEFAULT_CELL_HEIGHT`] placeholder
/// lattice.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridGeometry {
    spec: GridSpec,
    cell_width: f64,
    cell_height: f64,
}

impl GridGeometry {
    /// Geometry on the placeholder cell size, before any fit has run.
    #[must_use]
    pub fn with_default_cells(spec: GridSpec) -> Self {
        Self {
            spec,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }

    /// Derives the lattice from the background's intrinsic pixel size.
    ///
    /// Returns `None` when the background size is not yet available
    /// (zero or negative dimensions) or the spec has no cells, leaving
    /// the caller free to keep its previous geometry.
    #[must_use]
    pub fn from_background(spec: GridSpec, width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 || spec.rows() == 0 || spec.cols() == 0 {
            return None;
        }
        Some(Self {
            spec,
            cell_width: width / f64::from(spec.cols()),
            cell_height: height / f64::from(spec.rows()),
        })
    }

    /// The grid dimensions.
    #[must_use]
    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    /// Width of one cell in content units.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of one cell in content units.
    #[must_use]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Total content size: `cols * cell_width` by `rows * cell_height`.
    ///
    /// When the geometry was derived from a background image this equals
    /// the image's intrinsic size by construction.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(
            f64::from(self.spec.cols()) * self.cell_width,
            f64::from(self.spec.rows()) * self.cell_height,
        )
    }

    /// Content-space rectangle covered by `cell`.
    #[must_use]
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let x0 = f64::from(cell.col) * self.cell_width;
        let y0 = f64::from(cell.row) * self.cell_height;
        Rect::new(x0, y0, x0 + self.cell_width, y0 + self.cell_height)
    }

    /// Resolves a content-space point to the cell under it.
    ///
    /// Uses floor division, so a point on a shared edge belongs to the
    /// cell below/right of it. Points outside the grid resolve to
    /// `None`; callers drop those silently.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "floored values are bounds-checked against the spec before casting"
    )]
    pub fn cell_at(&self, point: Point) -> Option<Cell> {
        let col = (point.x / self.cell_width).floor();
        let row = (point.y / self.cell_height).floor();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        if col >= f64::from(self.spec.cols()) || row >= f64::from(self.spec.rows()) {
            return None;
        }
        Some(Cell::new(row as u32, col as u32))
    }
}
