// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Holds the view transform of the displayed image: zoom factor, pan offset of
//! the image's top-left corner, and whether auto-fit must run before the next
//! frame is drawn.

use super::zoom::{auto_fit, ZoomFactor, ZoomStep};

/// Axis-aligned rectangle in window pixels. The origin may be off-screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Zoom and pan applied to the active image.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: ZoomFactor,
    zoom_step: ZoomStep,
    offset_x: i32,
    offset_y: i32,
    auto_fit_pending: bool,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(ZoomStep::default())
    }
}

impl ViewTransform {
    /// Creates a transform at 1.0 zoom with auto-fit pending.
    #[must_use]
    pub fn new(zoom_step: ZoomStep) -> Self {
        Self {
            zoom: ZoomFactor::default(),
            zoom_step,
            offset_x: 0,
            offset_y: 0,
            auto_fit_pending: true,
        }
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    #[must_use]
    pub fn is_auto_fit_pending(&self) -> bool {
        self.auto_fit_pending
    }

    /// Requests a recompute on the next frame.
    pub fn request_auto_fit(&mut self) {
        self.auto_fit_pending = true;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in(self.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out(self.zoom_step);
    }

    /// Moves the image by `(dx, dy)`. Unbounded: the image may leave the window.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset_x = self.offset_x.saturating_add(dx);
        self.offset_y = self.offset_y.saturating_add(dy);
    }

    /// Runs auto-fit if it is pending and clears the flag.
    ///
    /// Returns whether a recompute happened. Zero-sized inputs leave the
    /// transform untouched but still consume the request.
    pub fn apply_pending_auto_fit(
        &mut self,
        image_w: u32,
        image_h: u32,
        frame_w: u32,
        frame_h: u32,
    ) -> bool {
        if !self.auto_fit_pending {
            return false;
        }
        self.auto_fit_pending = false;

        match auto_fit(image_w, image_h, frame_w, frame_h) {
            Some(fit) => {
                self.zoom = fit.zoom;
                self.offset_x = fit.offset_x;
                self.offset_y = fit.offset_y;
                true
            }
            None => false,
        }
    }

    /// Destination rectangle for an image of natural width `image_w`.
    ///
    /// The height is always derived from the displayed width and the cached
    /// aspect ratio so the two never drift apart.
    #[must_use]
    pub fn destination(&self, image_w: u32, aspect_ratio: f32) -> Rect {
        let width = (image_w as f32 * self.zoom.value()).round();
        let height = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
            (width / aspect_ratio).round()
        } else {
            0.0
        };

        Rect {
            x: self.offset_x,
            y: self.offset_y,
            width: width as u32,
            height: height as u32,
        }
    }
}
