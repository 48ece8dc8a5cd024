// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gridmark Imaging: the scene IR and the per-frame scene builder.
//!
//! Rendering is split in two:
//!
//! - [`Scene`] / [`SceneOp`]: a small, plain-old-data display list.
//!   Backends (a canvas, a GPU renderer, an SVG writer) replay the ops;
//!   tests assert on them directly instead of rasterizing.
//! - [`render_frame`]: a pure function from viewport, geometry, model,
//!   and today's date to a [`Scene`]. It reads every input fresh on each
//!   call — elapsed-day counts come from the wall-clock date at draw
//!   time, never from state cached at mark time — so re-invoking it is
//!   always safe and always reflects the latest committed state.
//!
//! A frame is composed in content space under one affine transform:
//! the background image stretched to the content size, then per cell in
//! row-major order an optional time-decay fill, the cell border, and an
//! elapsed-day label for visible marks.

use chrono::NaiveDate;
use kurbo::{Affine, Point, Rect};
use peniko::Color;

use gridmark_model::{Cell, GridModel, elapsed_days};
use gridmark_ramp::{color_for, is_visible};
use gridmark_view2d::{GridGeometry, Viewport};

/// Opaque handle to a host-managed image resource.
///
/// The frame builder never touches pixels; it only names the background
/// image the host registered with its drawing backend.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Stroke color of the cell borders.
pub const GRID_LINE_COLOR: Color = Color::from_rgba8(0x88, 0x88, 0x88, 0xff);

/// Stroke width of the cell borders, in content units.
pub const GRID_LINE_WIDTH: f64 = 2.0;

/// Fill color of the elapsed-day labels.
pub const LABEL_COLOR: Color = Color::from_rgba8(0x00, 0x00, 0x00, 0xff);

/// Label font size in content units.
pub const LABEL_SIZE: f32 = 96.0;

/// One display-list operation.
///
/// Geometry is expressed in content space; a [`SceneOp::SetTransform`]
/// at the head of the scene carries it onto the screen. Backends replay
/// ops strictly in order.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneOp {
    /// Set the transform applied to all subsequent geometry.
    SetTransform(Affine),
    /// Draw an image stretched onto `dst`.
    DrawImageRect {
        /// Image resource to draw.
        image: ImageId,
        /// Destination rectangle in content space.
        dst: Rect,
    },
    /// Fill an axis-aligned rectangle.
    FillRect {
        /// Rectangle in content space.
        rect: Rect,
        /// Solid fill color.
        color: Color,
    },
    /// Stroke an axis-aligned rectangle.
    StrokeRect {
        /// Rectangle in content space.
        rect: Rect,
        /// Stroke color.
        color: Color,
        /// Stroke width in content units.
        width: f64,
    },
    /// Draw a run of text centered on a point.
    Label {
        /// Text to draw.
        text: String,
        /// Center of the text, in content space. Backends center both
        /// axes, accounting for their font metrics vertically.
        center: Point,
        /// Text color.
        color: Color,
        /// Font size in content units.
        size: f32,
    },
}

/// An ordered display list for one frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// Operations in draw order.
    pub ops: Vec<SceneOp>,
}

impl Scene {
    /// The operations in draw order.
    #[must_use]
    pub fn ops(&self) -> &[SceneOp] {
        &self.ops
    }
}

/// Builds the display list for one frame.
///
/// Op order: the viewport transform, the background image over the full
/// content rect, then per cell in row-major order a fill (marked cells
/// within the visible band only), the border (every cell, on top of any
/// fill), and the elapsed-day label (visible marked cells only).
///
/// This is read-only with respect to all inputs and never caches: cells
/// past the visible band simply stop producing fill ops here, while
/// their removal is left to the expiry sweep on the next activation.
#[must_use]
pub fn render_frame(
    viewport: &Viewport,
    geometry: &GridGeometry,
    model: &GridModel,
    background: ImageId,
    today: NaiveDate,
) -> Scene {
    let mut ops = Vec::new();
    ops.push(SceneOp::SetTransform(viewport.transform()));
    ops.push(SceneOp::DrawImageRect {
        image: background,
        dst: geometry.content_size().to_rect(),
    });

    let spec = geometry.spec();
    for row in 0..spec.rows() {
        for col in 0..spec.cols() {
            let cell = Cell::new(row, col);
            let rect = geometry.cell_rect(cell);

            let visible_mark = model
                .date_at(cell)
                .map(|marked| elapsed_days(marked, today))
                .filter(|days| is_visible(*days));

            if let Some(days) = visible_mark {
                ops.push(SceneOp::FillRect {
                    rect,
                    color: color_for(days),
                });
            }
            ops.push(SceneOp::StrokeRect {
                rect,
                color: GRID_LINE_COLOR,
                width: GRID_LINE_WIDTH,
            });
            if let Some(days) = visible_mark {
                ops.push(SceneOp::Label {
                    text: days.to_string(),
                    center: rect.center(),
                    color: LABEL_COLOR,
                    size: LABEL_SIZE,
                });
            }
        }
    }
    Scene { ops }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmark_model::GridSpec;
    use kurbo::Size;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days_back(today: NaiveDate, days: i64) -> NaiveDate {
        today - chrono::Duration::days(days)
    }

    fn fills(scene: &Scene) -> Vec<&SceneOp> {
        scene
            .ops()
            .iter()
            .filter(|op| matches!(op, SceneOp::FillRect { .. }))
            .collect()
    }

    fn labels(scene: &Scene) -> Vec<&SceneOp> {
        scene
            .ops()
            .iter()
            .filter(|op| matches!(op, SceneOp::Label { .. }))
            .collect()
    }

    fn strokes(scene: &Scene) -> usize {
        scene
            .ops()
            .iter()
            .filter(|op| matches!(op, SceneOp::StrokeRect { .. }))
            .count()
    }

    /// 4x4 grid on a 1000x600 background: 250x150 cells.
    fn setup() -> (Viewport, GridGeometry, GridModel) {
        let spec = GridSpec::new(4, 4);
        let geometry = GridGeometry::from_background(spec, 1000.0, 600.0).unwrap();
        let mut viewport = Viewport::new();
        viewport.fit(Size::new(1000.0, 600.0), geometry.content_size());
        (viewport, geometry, GridModel::new(spec))
    }

    #[test]
    fn frame_opens_with_transform_then_background() {
        let (viewport, geometry, model) = setup();
        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), date(2024, 6, 1));

        assert_eq!(scene.ops()[0], SceneOp::SetTransform(viewport.transform()));
        assert_eq!(
            scene.ops()[1],
            SceneOp::DrawImageRect {
                image: ImageId(0),
                dst: Rect::new(0.0, 0.0, 1000.0, 600.0),
            }
        );
    }

    #[test]
    fn every_cell_gets_a_border_and_only_marked_cells_fill() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(1, 1), days_back(today, 10));

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);

        assert_eq!(strokes(&scene), 16);
        assert_eq!(fills(&scene).len(), 1);
        assert_eq!(labels(&scene).len(), 1);
    }

    #[test]
    fn marked_cell_renders_ramp_color_and_day_label() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(1, 1), days_back(today, 10));

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);
        let cell_rect = geometry.cell_rect(Cell::new(1, 1));

        assert_eq!(
            fills(&scene)[0],
            &SceneOp::FillRect {
                rect: cell_rect,
                color: color_for(10),
            }
        );
        assert_eq!(
            labels(&scene)[0],
            &SceneOp::Label {
                text: "10".to_owned(),
                center: cell_rect.center(),
                color: LABEL_COLOR,
                size: LABEL_SIZE,
            }
        );
    }

    #[test]
    fn border_draws_on_top_of_the_fill() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(0, 0), today);

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);
        let fill_at = scene
            .ops()
            .iter()
            .position(|op| matches!(op, SceneOp::FillRect { .. }))
            .unwrap();
        assert!(matches!(
            scene.ops()[fill_at + 1],
            SceneOp::StrokeRect { .. }
        ));
    }

    #[test]
    fn settled_past_cells_render_border_only() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(2, 2), days_back(today, 26));

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);
        assert!(fills(&scene).is_empty());
        assert!(labels(&scene).is_empty());
        assert_eq!(strokes(&scene), 16);
    }

    #[test]
    fn future_dated_cells_render_border_only() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(3, 0), days_back(today, -5));

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);
        assert!(fills(&scene).is_empty());
        assert!(labels(&scene).is_empty());
    }

    #[test]
    fn cells_walk_in_row_major_order() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(0, 2), today);
        model.mark(Cell::new(2, 0), today);

        let scene = render_frame(&viewport, &geometry, &model, ImageId(0), today);
        let fill_rects: Vec<Rect> = scene
            .ops()
            .iter()
            .filter_map(|op| match op {
                SceneOp::FillRect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();

        // (0, 2) precedes (2, 0) in row-major order.
        assert_eq!(fill_rects[0], geometry.cell_rect(Cell::new(0, 2)));
        assert_eq!(fill_rects[1], geometry.cell_rect(Cell::new(2, 0)));
    }

    #[test]
    fn day_boundaries_re_evaluate_per_frame() {
        let (viewport, geometry, mut model) = setup();
        let marked = date(2024, 5, 1);
        model.mark(Cell::new(1, 1), marked);

        let scene_a = render_frame(&viewport, &geometry, &model, ImageId(0), date(2024, 5, 6));
        let scene_b = render_frame(&viewport, &geometry, &model, ImageId(0), date(2024, 5, 7));

        let label_text = |scene: &Scene| match labels(scene)[0] {
            SceneOp::Label { text, .. } => text.clone(),
            _ => unreachable!(),
        };
        assert_eq!(label_text(&scene_a), "5");
        assert_eq!(label_text(&scene_b), "6");
    }

    #[test]
    fn rendering_is_pure_and_repeatable() {
        let (viewport, geometry, mut model) = setup();
        let today = date(2024, 6, 1);
        model.mark(Cell::new(1, 3), days_back(today, 3));

        let first = render_frame(&viewport, &geometry, &model, ImageId(7), today);
        let second = render_frame(&viewport, &geometry, &model, ImageId(7), today);
        assert_eq!(first, second);
    }
}
