// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the zoom factor and the auto-fit computation:
//! - Additive zoom in/out with a floor equal to the step
//! - Fit-to-frame zoom and centering offset for a freshly shown image

pub use crate::config::DEFAULT_ZOOM_STEP;

/// Zoom multiplier, guaranteed to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a zoom factor, returning `None` for zero, negative or non-finite input.
    #[must_use]
    pub fn new(factor: f32) -> Option<Self> {
        (factor.is_finite() && factor > 0.0).then_some(Self(factor))
    }

    /// Returns the raw multiplier.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Increases zoom by the given step.
    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self(self.0 + step.value())
    }

    /// Decreases zoom by the given step, never going below the step itself.
    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self((self.0 - step.value()).max(step.value()))
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Zoom step, guaranteed to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a zoom step, falling back to the default for invalid input.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if step.is_finite() && step > 0.0 {
            Self(step)
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

/// Result of fitting an image into a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoFit {
    pub zoom: ZoomFactor,
    pub offset_x: i32,
    pub offset_y: i32,
}

/// Computes the zoom that fits `image` inside `frame` and the offset that centers it.
///
/// `zoom = min(frame_w / image_w, frame_h / image_h)`, the scaled size is rounded,
/// and the offsets are `(frame - scaled) / 2` with truncating integer division.
/// Returns `None` when any dimension is zero.
#[must_use]
pub fn auto_fit(image_w: u32, image_h: u32, frame_w: u32, frame_h: u32) -> Option<AutoFit> {
    if image_w == 0 || image_h == 0 || frame_w == 0 || frame_h == 0 {
        return None;
    }

    let width_ratio = frame_w as f32 / image_w as f32;
    let height_ratio = frame_h as f32 / image_h as f32;
    let zoom = ZoomFactor::new(width_ratio.min(height_ratio))?;

    let scaled_w = (image_w as f32 * zoom.value()).round() as i64;
    let scaled_h = (image_h as f32 * zoom.value()).round() as i64;

    Some(AutoFit {
        zoom,
        offset_x: ((i64::from(frame_w) - scaled_w) / 2) as i32,
        offset_y: ((i64::from(frame_h) - scaled_h) / 2) as i32,
    })
}
