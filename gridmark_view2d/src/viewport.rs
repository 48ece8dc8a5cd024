// Copyright 2025 the Gridmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};

/// Smallest permitted viewport scale.
pub const MIN_SCALE: f64 = 0.1;

/// Largest permitted viewport scale.
pub const MAX_SCALE: f64 = 5.0;

/// Pan/zoom camera over the content plane.
///
/// The viewport maps a content point `p` to the screen point
/// `offset + p * scale`, with a uniform scale clamped to
/// [`MIN_SCALE`]`..=`[`MAX_SCALE`]. Clamping applies on every zoom call,
/// so `scale > 0` holds after any sequence of operations.
///
/// State is mutated only by [`Viewport::fit`] (once, when the surface
/// size first becomes known) and by gestures via [`Viewport::pan`] and
/// [`Viewport::zoom`]; it is never re-derived afterwards.
#[derive(Clone, Debug)]
pub struct Viewport {
    scale: f64,
    offset: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates an identity viewport: scale `1.0`, zero offset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Current uniform scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current screen-space offset of the content origin.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Scales and centers `content` inside `surface`.
    ///
    /// The scale is chosen as `min(sw / cw, sh / ch)` so the whole
    /// content is visible without cropping, and the offset centers the
    /// scaled content in the surface. Returns `false` (leaving the
    /// viewport untouched) when either size has a non-positive
    /// dimension; callers treat that as "not yet available" and retry
    /// when real sizes arrive.
    pub fn fit(&mut self, surface: Size, content: Size) -> bool {
        if surface.width <= 0.0
            || surface.height <= 0.0
            || content.width <= 0.0
            || content.height <= 0.0
        {
            return false;
        }

        let scale_x = surface.width / content.width;
        let scale_y = surface.height / content.height;
        self.scale = scale_x.min(scale_y);

        let scaled = content * self.scale;
        self.offset = Vec2::new(
            (surface.width - scaled.width) / 2.0,
            (surface.height - scaled.height) / 2.0,
        );
        true
    }

    /// Pans by a screen-space scroll distance (previous sample minus
    /// current), subtracting it from the offset. The distance is not
    /// scaled.
    pub fn pan(&mut self, distance: Vec2) {
        self.offset -= distance;
    }

    /// Zooms by `factor` around the screen point `focal`.
    ///
    /// The new scale is `scale * factor` clamped into
    /// [`MIN_SCALE`]`..=`[`MAX_SCALE`], and the offset is recomputed so
    /// that the content point under `focal` stays under `focal`:
    /// whatever is under the fingers stays under the fingers.
    /// Non-positive or non-finite factors are ignored.
    pub fn zoom(&mut self, factor: f64, focal: Point) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(MIN_SCALE, MAX_SCALE);

        let focal = focal.to_vec2();
        self.offset = focal - (focal - self.offset) * (new_scale / old_scale);
        self.scale = new_scale;
    }

    /// Converts a screen point into content coordinates.
    #[must_use]
    pub fn screen_to_content(&self, point: Point) -> Point {
        ((point.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// Converts a content point into screen coordinates.
    ///
    /// This is the inverse of [`Viewport::screen_to_content`]; the
    /// renderer applies the same map to whole shapes via
    /// [`Viewport::transform`].
    #[must_use]
    pub fn content_to_screen(&self, point: Point) -> Point {
        (self.offset + point.to_vec2() * self.scale).to_point()
    }

    /// The content-to-screen map as an affine transform:
    /// translate by the offset, then scale.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }
}
