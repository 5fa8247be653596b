// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! View transform state kept apart from the controller so it can be tested
//! without a window.

pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use viewport::{Rect, ViewTransform};
pub use zoom::{auto_fit, AutoFit, ZoomFactor, ZoomStep};
