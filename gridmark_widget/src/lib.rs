// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark Widget: the composed, headless date-grid widget.
//!
//! [`GridWidget`] wires the Gridmark crates into the original control
//! flow: pointer events drive the gesture recognizer, recognized pans
//! and pinches mutate the viewport, a long-press hit-tests back to a
//! cell and surfaces it to the host, the host marks the cell with an
//! externally chosen date, and every mutation is flushed to the store
//! and raises the paint request.
//!
//! The widget is platform-free. A host embeds it by:
//!
//! 1. Calling [`GridWidget::resize`] whenever the render surface size
//!    changes. The first call with usable surface and background sizes
//!    runs the one-shot fit-to-screen; later calls are ignored.
//! 2. Feeding pointer events through [`GridWidget::pointer`] and its
//!    clock through [`GridWidget::poll`]. A returned [`Cell`] is the
//!    cell-selected notification; the host shows its date picker and
//!    calls [`GridWidget::mark`] with the chosen date.
//! 3. Calling [`GridWidget::activate`] when the widget becomes visible,
//!    so expired cells are swept.
//! 4. Checking [`GridWidget::take_paint_request`] after the above and,
//!    when it reports `true`, replaying [`GridWidget::frame`] through
//!    its drawing backend.
//!
//! Everything is synchronous and single-threaded; the in-memory model
//! is the source of truth and store writes are fire-and-forget.

use chrono::NaiveDate;
use kurbo::Size;

use gridmark_gesture::{Gesture, PointerEvent, Recognizer};
use gridmark_imaging::{ImageId, Scene, render_frame};
use gridmark_model::expiry::{DEFAULT_EXPIRY_DAYS, sweep};
use gridmark_model::store::{self, CellStore};
use gridmark_model::{Cell, GridModel, GridSpec};
use gridmark_view2d::{GridGeometry, Viewport};

/// The background image as the host loaded it: an opaque resource
/// handle plus intrinsic pixel dimensions.
///
/// Zero or negative dimensions mean "not yet available"; the one-shot
/// fit stays pending until both the surface and this size are usable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BackgroundImage {
    /// Handle registered with the host's drawing backend.
    pub image: ImageId,
    /// Intrinsic width in pixels.
    pub width: i32,
    /// Intrinsic height in pixels.
    pub height: i32,
}

impl BackgroundImage {
    /// Creates a background descriptor.
    #[must_use]
    pub const fn new(image: ImageId, width: i32, height: i32) -> Self {
        Self {
            image,
            width,
            height,
        }
    }

    /// Returns `true` once the intrinsic size is known and positive.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// The composed date-grid widget.
///
/// Owns the model, viewport, geometry, gesture recognizer, and the
/// persistence store; exposes the small lifecycle surface a host embeds.
#[derive(Clone, Debug)]
pub struct GridWidget<S: CellStore> {
    model: GridModel,
    geometry: GridGeometry,
    viewport: Viewport,
    recognizer: Recognizer,
    background: BackgroundImage,
    store: S,
    fit_done: bool,
    paint_requested: bool,
}

impl<S: CellStore> GridWidget<S> {
    /// Creates the widget, loading any persisted marks from `store`.
    ///
    /// Until the first successful [`GridWidget::resize`], hit testing
    /// runs on the placeholder 250x150 cell lattice and the identity
    /// viewport.
    #[must_use]
    pub fn new(spec: GridSpec, background: BackgroundImage, store: S) -> Self {
        let model = store::load(spec, &store);
        Self {
            model,
            geometry: GridGeometry::with_default_cells(spec),
            viewport: Viewport::new(),
            recognizer: Recognizer::default(),
            background,
            store,
            fit_done: false,
            paint_requested: true,
        }
    }

    /// The current model state.
    #[must_use]
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The current cell lattice.
    #[must_use]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The persistence store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns `true` once the one-shot fit has run.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.fit_done
    }

    /// Reports the render-surface size.
    ///
    /// The first call where both the surface and the background have
    /// positive dimensions derives the cell lattice from the background
    /// and fits it to the surface, exactly once per widget instance.
    /// Unusable sizes leave the fit pending; later calls after a
    /// successful fit are ignored (gestures own the viewport from then
    /// on).
    pub fn resize(&mut self, width: i32, height: i32) {
        if self.fit_done || width <= 0 || height <= 0 || !self.background.is_available() {
            return;
        }
        let Some(geometry) = GridGeometry::from_background(
            self.model.spec(),
            f64::from(self.background.width),
            f64::from(self.background.height),
        ) else {
            return;
        };

        let surface = Size::new(f64::from(width), f64::from(height));
        if self.viewport.fit(surface, geometry.content_size()) {
            self.geometry = geometry;
            self.fit_done = true;
            self.request_paint();
        }
    }

    /// Feeds one pointer event through gesture recognition.
    ///
    /// Pans and pinches mutate the viewport; a long-press resolves to
    /// the cell under it, which is returned for the host to act on
    /// (presses outside the grid are dropped silently). Any recognized
    /// gesture raises the paint request.
    pub fn pointer(&mut self, event: PointerEvent) -> Option<Cell> {
        let gestures = self.recognizer.handle(event);
        if gestures.is_empty() {
            return None;
        }
        self.request_paint();

        let mut selected = None;
        for gesture in gestures {
            // Every gesture is applied; the first hit wins.
            let hit = self.apply(gesture);
            if selected.is_none() {
                selected = hit;
            }
        }
        selected
    }

    /// Advances the long-press clock to `now_ms`.
    ///
    /// Hosts call this from their tick so a perfectly stationary press
    /// can fire without another pointer event.
    pub fn poll(&mut self, now_ms: u64) -> Option<Cell> {
        let gesture = self.recognizer.poll(now_ms)?;
        self.request_paint();
        self.apply(gesture)
    }

    /// Marks `cell` with the host-selected `date` and flushes the store.
    ///
    /// Returns `false` for out-of-range cells, which change nothing.
    pub fn mark(&mut self, cell: Cell, date: NaiveDate) -> bool {
        if !self.model.mark(cell, date) {
            return false;
        }
        store::save(&self.model, &mut self.store);
        self.request_paint();
        true
    }

    /// Activation maintenance: sweeps cells older than the expiry
    /// threshold, returning how many were removed.
    ///
    /// Runs once per activation event (the widget becoming visible),
    /// not per frame. The store is flushed and a repaint requested only
    /// when something was actually removed.
    pub fn activate(&mut self, today: NaiveDate) -> usize {
        let removed = sweep(&mut self.model, today, DEFAULT_EXPIRY_DAYS);
        if removed > 0 {
            store::save(&self.model, &mut self.store);
            self.request_paint();
        }
        removed
    }

    /// Builds the display list for the current state.
    ///
    /// Read-only and safely re-invocable; elapsed days are derived from
    /// `today` at this call, so day boundaries show up on the next
    /// frame without any mutation.
    #[must_use]
    pub fn frame(&self, today: NaiveDate) -> Scene {
        render_frame(
            &self.viewport,
            &self.geometry,
            &self.model,
            self.background.image,
            today,
        )
    }

    /// Returns and clears the paint request.
    ///
    /// The invalidate flag of this design: every visible state change
    /// sets it, and the host redraws when it reads `true`.
    pub fn take_paint_request(&mut self) -> bool {
        std::mem::take(&mut self.paint_requested)
    }

    fn request_paint(&mut self) {
        self.paint_requested = true;
    }

    fn apply(&mut self, gesture: Gesture) -> Option<Cell> {
        match gesture {
            Gesture::Pan { delta } => {
                // The recognizer reports finger motion; the viewport
                // takes scroll distance, its negation.
                self.viewport.pan(-delta);
                None
            }
            Gesture::Pinch { factor, focal } => {
                self.viewport.zoom(factor, focal);
                None
            }
            Gesture::LongPress { pos } => {
                let content = self.viewport.screen_to_content(pos);
                self.geometry.cell_at(content)
            }
        }
    }
}
