// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides in-memory stand-ins for the image loading and command
//! launching ports.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::{CommandLauncher, ImageLoader};
use crate::error::{Error, Result};
use crate::media::ImageData;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Loader that fabricates solid images instead of decoding files.
///
/// Every path decodes to `default_size` unless overridden with
/// [`with_size`](Self::with_size); paths registered with
/// [`failing`](Self::failing) return a decode error.
#[derive(Debug, Clone)]
pub struct FakeImageLoader {
    default_size: (u32, u32),
    sizes: HashMap<PathBuf, (u32, u32)>,
    failing: HashSet<PathBuf>,
    loads: Rc<RefCell<Vec<PathBuf>>>,
}

impl FakeImageLoader {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            default_size: (width, height),
            sizes: HashMap::new(),
            failing: HashSet::new(),
            loads: Rc::default(),
        }
    }

    pub fn with_size(mut self, path: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        self.sizes.insert(path.into(), (width, height));
        self
    }

    pub fn failing(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing.insert(path.into());
        self
    }

    /// Shared log of every path passed to `load`, successful or not.
    pub fn loads(&self) -> Rc<RefCell<Vec<PathBuf>>> {
        Rc::clone(&self.loads)
    }
}

impl ImageLoader for FakeImageLoader {
    fn load(&self, path: &Path) -> Result<ImageData> {
        self.loads.borrow_mut().push(path.to_path_buf());

        if self.failing.contains(path) {
            return Err(Error::Decode {
                path: path.to_path_buf(),
                message: "corrupt test image".into(),
            });
        }

        let (width, height) = self.sizes.get(path).copied().unwrap_or(self.default_size);
        let pixels = vec![0x80; width as usize * height as usize * 4];
        ImageData::from_rgba(path, width, height, pixels)
    }
}

/// Launcher that records command lines instead of spawning them.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    commands: Rc<RefCell<Vec<OsString>>>,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A launcher whose spawns always fail (the attempt is still recorded).
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Rc<RefCell<Vec<OsString>>> {
        Rc::clone(&self.commands)
    }
}

impl CommandLauncher for RecordingLauncher {
    fn spawn_detached(&self, command_line: &OsStr) -> Result<()> {
        self.commands.borrow_mut().push(command_line.to_os_string());
        if self.fail {
            Err(Error::Spawn("test launcher refuses to spawn".into()))
        } else {
            Ok(())
        }
    }
}
