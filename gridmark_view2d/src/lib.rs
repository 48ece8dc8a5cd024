// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark View 2D: viewport state and grid geometry.
//!
//! This crate provides the headless camera over the grid's content plane:
//!
//! - [`Viewport`]: uniform scale plus screen-space offset, with
//!   focal-point-preserving zoom, scale clamping, a one-shot
//!   fit-to-surface computation, and conversion between screen and
//!   content coordinates.
//! - [`GridGeometry`]: the content-space cell lattice derived from the
//!   background image's intrinsic size, with rectangle lookup and floor
//!   hit testing back to cell coordinates.
//!
//! It owns no input handling and no rendering. Callers wire gestures into
//! [`Viewport::pan`] / [`Viewport::zoom`] at a higher layer and hand
//! [`Viewport::transform`] to the renderer.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use gridmark_model::{Cell, GridSpec};
//! use gridmark_view2d::{GridGeometry, Viewport};
//!
//! // A 1000x500 background split into a 2x4 grid.
//! let geometry = GridGeometry::from_background(GridSpec::new(2, 4), 1000.0, 500.0).unwrap();
//! let mut viewport = Viewport::new();
//! viewport.fit(Size::new(800.0, 600.0), geometry.content_size());
//!
//! // Resolve a screen point back to a cell.
//! let content = viewport.screen_to_content(Point::new(300.0, 200.0));
//! assert_eq!(geometry.cell_at(content), Some(Cell::new(0, 1)));
//! ```

mod geometry;
mod viewport;

pub use geometry::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, GridGeometry};
pub use viewport::{MAX_SCALE, MIN_SCALE, Viewport};
