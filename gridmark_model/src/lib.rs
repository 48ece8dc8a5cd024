// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark Model: the sparse date-marked cell grid.
//!
//! This crate owns the data side of a Gridmark widget:
//!
//! - [`GridSpec`] and [`Cell`]: fixed grid dimensions and integer cell
//!   coordinates.
//! - [`GridModel`]: a sparse mapping from cells to calendar dates. A cell
//!   is either empty or holds exactly one [`chrono::NaiveDate`]; marking
//!   is an idempotent overwrite.
//! - [`store`]: a minimal string-set persistence layer. Each marked cell
//!   round-trips through one `"<row>,<col>:<ISO-8601 date>"` entry, and a
//!   malformed entry is skipped rather than failing the load.
//! - [`expiry`]: a maintenance sweep that removes cells whose marked date
//!   has aged past a threshold.
//!
//! Rendering and interaction live elsewhere; this crate has no opinion on
//! how cells are displayed or selected.
//!
//! ## Minimal example
//!
//! ```
//! use chrono::NaiveDate;
//! use gridmark_model::{Cell, GridModel, GridSpec};
//! use gridmark_model::store::{self, MemoryStore};
//!
//! let spec = GridSpec::new(4, 4);
//! let mut model = GridModel::new(spec);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! assert!(model.mark(Cell::new(1, 2), date));
//! assert_eq!(model.date_at(Cell::new(1, 2)), Some(date));
//!
//! // Persist and reload through a string-set store.
//! let mut prefs = MemoryStore::default();
//! store::save(&model, &mut prefs);
//! let reloaded = store::load(spec, &prefs);
//! assert_eq!(reloaded.date_at(Cell::new(1, 2)), Some(date));
//! ```

pub mod expiry;
pub mod store;

mod cell;
mod grid;

pub use cell::{Cell, GridSpec};
pub use grid::{GridModel, elapsed_days};
