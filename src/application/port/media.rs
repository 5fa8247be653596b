// SPDX-License-Identifier: MPL-2.0
//! Image loading port definition.

use crate::error::Result;
use crate::media::ImageData;
use std::path::Path;

/// Decodes an image file into a displayable resource.
///
/// # Example
///
/// ```ignore
/// use tinyview::application::port::ImageLoader;
/// use tinyview::media::FsImageLoader;
/// use std::path::Path;
///
/// let image = FsImageLoader.load(Path::new("photo.png"))?;
/// println!("{}x{}", image.width, image.height);
/// ```
pub trait ImageLoader {
    /// Loads the image at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Decode`](crate::error::Error::Decode) when the file cannot be read
    /// or decoded. Callers keep their previous image in that case.
    fn load(&self, path: &Path) -> Result<ImageData>;
}

impl<T: ImageLoader + ?Sized> ImageLoader for Box<T> {
    fn load(&self, path: &Path) -> Result<ImageData> {
        (**self).load(path)
    }
}
