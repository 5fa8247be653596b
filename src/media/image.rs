// SPDX-License-Identifier: MPL-2.0
//! Image decoding into a GPU-uploadable handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// The decoded, displayable image owned by the viewer.
///
/// `aspect_ratio` is computed once from the decoded size and is the only source
/// for the displayed height.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f32,
    pub path: PathBuf,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`] for zero-sized images, which have no aspect ratio.
    pub fn from_rgba(path: &Path, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Decode {
                path: path.to_path_buf(),
                message: format!("invalid dimensions {width}x{height}"),
            });
        }
        Ok(Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
            aspect_ratio: width as f32 / height as f32,
            path: path.to_path_buf(),
        })
    }
}

/// Load an image from the given path and return its data.
///
/// The format is sniffed from the file contents, not the name.
///
/// # Errors
///
/// [`Error::Decode`] if the file cannot be read or decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let decode_error = |message: String| Error::Decode {
        path: path.to_path_buf(),
        message,
    };

    let bytes = fs::read(path).map_err(|e| decode_error(e.to_string()))?;
    let img = image_rs::load_from_memory(&bytes).map_err(|e| decode_error(e.to_string()))?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    ImageData::from_rgba(path, width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_abs_diff_eq!(data.aspect_ratio, 2.0);
        assert_eq!(data.path, image_path);
    }

    #[test]
    fn misnamed_file_is_decoded_by_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("actually_png.jpg");
        RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 255]))
            .save_with_format(&image_path, image_rs::ImageFormat::Png)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("content sniffing should succeed");
        assert_eq!((data.width, data.height), (3, 3));
    }

    #[test]
    fn load_missing_image_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Decode { path, .. }) => assert_eq!(path, missing_path),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode { message, .. }) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn zero_sized_pixels_are_rejected() {
        let result = ImageData::from_rgba(Path::new("empty.png"), 0, 10, Vec::new());
        assert!(matches!(result, Err(Error::Decode { .. })));
    }
}
