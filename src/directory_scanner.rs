// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module building the image catalog for a session.
//!
//! The catalog keeps directory enumeration order (no sorting) and is immutable
//! once built. A file passed explicitly is appended after the scan even when the
//! scan already found it, and becomes the starting entry.

use crate::error::{Error, Result};
use crate::media;
use std::path::{Path, PathBuf};

/// Ordered list of image paths with a starting position.
///
/// Never empty: [`Catalog::build`] refuses to construct an empty catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<PathBuf>,
    start_index: usize,
    directory: PathBuf,
}

impl Catalog {
    /// Builds a catalog from a directory or a file path.
    ///
    /// - directory: scan it, start at index 0
    /// - image file: scan its parent, append the file, start at the appended entry
    /// - other file: scan its parent, start at index 0
    ///
    /// # Errors
    ///
    /// [`Error::PathNotFound`] if `target` cannot be stat'ed, [`Error::Io`] if the
    /// directory cannot be read, and [`Error::NoImagesFound`] if nothing matched.
    pub fn build(target: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(target).map_err(|_| Error::PathNotFound {
            path: target.to_path_buf(),
        })?;

        if metadata.is_dir() {
            let entries = scan_directory(target)?;
            return Self::from_entries(entries, 0, target.to_path_buf());
        }

        let directory = containing_directory(target);
        let mut entries = scan_directory(&directory)?;

        let start_index = if is_image_file(target) {
            entries.push(target.to_path_buf());
            entries.len() - 1
        } else {
            tracing::warn!(path = %target.display(), "provided file is not a valid image");
            0
        };

        Self::from_entries(entries, start_index, directory)
    }

    /// Builds a catalog from an already known list of paths.
    ///
    /// # Errors
    ///
    /// [`Error::NoImagesFound`] for an empty list, [`Error::IndexOutOfRange`] when
    /// `start_index` does not address an entry.
    pub fn from_entries(
        entries: Vec<PathBuf>,
        start_index: usize,
        directory: PathBuf,
    ) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::NoImagesFound { directory });
        }
        if start_index >= entries.len() {
            return Err(Error::IndexOutOfRange {
                index: start_index,
                len: entries.len(),
            });
        }
        Ok(Self {
            entries,
            start_index,
            directory,
        })
    }

    /// Returns the path at `index`.
    pub fn get(&self, index: usize) -> Result<&Path> {
        self.entries
            .get(index)
            .map(PathBuf::as_path)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    /// Index following `index`, wrapping to the first entry.
    #[must_use]
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.entries.len()
    }

    /// Index preceding `index`, wrapping to the last entry.
    #[must_use]
    pub fn prev(&self, index: usize) -> usize {
        let len = self.entries.len();
        (index % len + len - 1) % len
    }

    /// Index the session starts on.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Directory that was scanned.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

/// Case-sensitive substring match of the file name against the extension list.
///
/// `photo.png`, `photo.png.bak` and `x.tiff` match; `photo.PNG` does not.
/// Names that are not valid UTF-8 are matched on their raw bytes.
#[must_use]
pub fn is_image_file(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    media::IMAGE_EXTENSIONS.iter().any(|extension| {
        name.windows(extension.len())
            .any(|window| window == extension.as_bytes())
    })
}

/// Lists matching entries of `directory` in enumeration order (no recursion).
fn scan_directory(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    tracing::info!(directory = %directory.display(), "scanning for images");
    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        if entry.file_type().map(|kind| kind.is_dir()).unwrap_or(false) {
            continue;
        }

        let path = directory.join(entry.file_name());
        if is_image_file(&path) {
            tracing::debug!(path = %path.display(), "found image");
            images.push(path);
        }
    }

    Ok(images)
}

/// Parent directory of a file argument; `.` for bare file names.
fn containing_directory(file: &Path) -> PathBuf {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_file(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test file");
        path
    }

    fn catalog_of(len: usize) -> Catalog {
        let entries = (0..len)
            .map(|i| PathBuf::from(format!("{i}.png")))
            .collect();
        Catalog::from_entries(entries, 0, PathBuf::from(".")).expect("non-empty catalog")
    }

    #[test]
    fn scan_includes_png_and_excludes_txt_and_uppercase_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png = create_test_file(temp_dir.path(), "a.png");
        create_test_file(temp_dir.path(), "b.txt");
        let upper = create_test_file(temp_dir.path(), "c.JPEG");

        let catalog = Catalog::build(temp_dir.path()).expect("failed to build catalog");

        let entries: Vec<&Path> = catalog.iter().collect();
        assert_eq!(entries, vec![png.as_path()]);
        assert!(!entries.contains(&upper.as_path()));
        assert_eq!(catalog.start_index(), 0);
    }

    #[test]
    fn extension_match_is_case_sensitive_substring() {
        assert!(is_image_file(Path::new("a.png")));
        assert!(is_image_file(Path::new("dir/scan.tiff")));
        assert!(is_image_file(Path::new("icon.ico")));
        assert!(is_image_file(Path::new("photo.jpg.bak")));
        assert!(!is_image_file(Path::new("c.JPEG")));
        assert!(!is_image_file(Path::new("a.PNG")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("pngfile")));
    }

    #[test]
    fn extension_check_ignores_parent_directories() {
        assert!(!is_image_file(Path::new("/tmp/album.png/readme")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_matched_on_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/caf\xe9.png"));
        assert!(is_image_file(path));
        assert!(!is_image_file(Path::new(OsStr::from_bytes(b"/tmp/caf\xe9.txt"))));
    }

    // Other unix filesystems may refuse names that are not valid UTF-8.
    #[cfg(target_os = "linux")]
    #[test]
    fn non_utf8_files_are_scanned_and_selectable() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempdir().expect("failed to create temp dir");
        let img = temp_dir.path().join(OsStr::from_bytes(b"caf\xe9.png"));
        fs::write(&img, b"fake image data").expect("failed to write test file");

        let scanned = Catalog::build(temp_dir.path()).expect("failed to build catalog");
        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned.get(0).expect("entry"), img.as_path());

        let explicit = Catalog::build(&img).expect("failed to build catalog");
        assert_eq!(explicit.len(), 2);
        assert_eq!(explicit.start_index(), 1);
        assert_eq!(explicit.get(1).expect("entry"), img.as_path());
    }

    #[test]
    fn explicit_image_file_is_appended_even_when_scanned() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img = create_test_file(temp_dir.path(), "only.png");

        let catalog = Catalog::build(&img).expect("failed to build catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).expect("entry"), img.as_path());
        assert_eq!(catalog.get(1).expect("entry"), img.as_path());
        assert_eq!(catalog.start_index(), 1);
    }

    #[test]
    fn non_image_file_falls_back_to_first_scanned_entry() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let img = create_test_file(temp_dir.path(), "a.gif");
        let txt = create_test_file(temp_dir.path(), "notes.txt");

        let catalog = Catalog::build(&txt).expect("failed to build catalog");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.start_index(), 0);
        assert_eq!(catalog.get(0).expect("entry"), img.as_path());
    }

    #[test]
    fn non_image_file_in_empty_directory_is_no_images_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let txt = create_test_file(temp_dir.path(), "notes.txt");

        let err = Catalog::build(&txt).expect_err("should fail");
        assert!(matches!(err, Error::NoImagesFound { .. }));
    }

    #[test]
    fn empty_directory_is_no_images_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        create_test_file(temp_dir.path(), "readme.txt");

        let err = Catalog::build(temp_dir.path()).expect_err("should fail");
        assert!(matches!(err, Error::NoImagesFound { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn missing_path_is_path_not_found() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("ghost.png");

        let err = Catalog::build(&missing).expect_err("should fail");
        assert!(matches!(err, Error::PathNotFound { .. }));
    }

    #[test]
    fn directories_with_image_like_names_are_skipped() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("album.png")).expect("failed to create dir");
        let img = create_test_file(temp_dir.path(), "cover.webp");

        let catalog = Catalog::build(temp_dir.path()).expect("failed to build catalog");

        assert_eq!(catalog.iter().collect::<Vec<_>>(), vec![img.as_path()]);
    }

    #[test]
    fn get_out_of_range_is_an_error() {
        let catalog = catalog_of(3);
        let err = catalog.get(3).expect_err("should fail");
        assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn next_and_prev_wrap_around() {
        let catalog = catalog_of(3);
        assert_eq!(catalog.next(2), 0);
        assert_eq!(catalog.prev(0), 2);
        assert_eq!(catalog.next(0), 1);
        assert_eq!(catalog.prev(2), 1);
    }

    #[test]
    fn n_steps_cycle_back_to_start() {
        for len in 1..=7 {
            let catalog = catalog_of(len);
            for start in 0..len {
                let forward = (0..len).fold(start, |index, _| catalog.next(index));
                let backward = (0..len).fold(start, |index, _| catalog.prev(index));
                assert_eq!(forward, start, "next cycle for len {len}");
                assert_eq!(backward, start, "prev cycle for len {len}");
            }
        }
    }

    #[test]
    fn single_entry_navigation_stays_put() {
        let catalog = catalog_of(1);
        assert_eq!(catalog.next(0), 0);
        assert_eq!(catalog.prev(0), 0);
    }

    #[test]
    fn from_entries_validates_start_index() {
        let err = Catalog::from_entries(vec![PathBuf::from("a.png")], 1, PathBuf::from("."))
            .expect_err("should fail");
        assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    }

    #[test]
    fn bare_file_name_scans_current_directory() {
        assert_eq!(containing_directory(Path::new("a.png")), PathBuf::from("."));
        assert_eq!(
            containing_directory(Path::new("/tmp/pics/a.png")),
            PathBuf::from("/tmp/pics")
        );
    }
}
