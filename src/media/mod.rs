// SPDX-License-Identifier: MPL-2.0
//! Image file recognition and loading.

pub mod image;

use crate::application::port::ImageLoader;
use crate::error::Result;
use std::path::Path;

pub use image::{load_image, ImageData};

/// File-name fragments that mark a file as an image.
///
/// Matched as case-sensitive substrings, so `.tif` also covers `.tiff`.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".bmp", ".gif", ".tif", ".tiff", ".webp", ".ico",
];

/// Loads images from the local filesystem with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageLoader;

impl ImageLoader for FsImageLoader {
    fn load(&self, path: &Path) -> Result<ImageData> {
        load_image(path)
    }
}
