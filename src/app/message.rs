// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::InputEvent;
use std::ffi::OsString;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Viewer(InputEvent),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Font file for the command bar, overriding `[font] path`.
    pub font_path: Option<PathBuf>,
    /// Directory to scan or image to open. Defaults to the working directory.
    pub target: PathBuf,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TINYVIEW_CONFIG_DIR` environment variable.
    pub config_dir: Option<PathBuf>,
}

impl Flags {
    /// Interprets the positional arguments: `[]`, `[PATH]` or `[FONT, PATH]`.
    ///
    /// Returns `None` when more than two were given.
    #[must_use]
    pub fn from_free_args(free: Vec<OsString>, config_dir: Option<PathBuf>) -> Option<Self> {
        let mut free = free.into_iter().map(PathBuf::from);
        let (font_path, target) = match (free.next(), free.next(), free.next()) {
            (None, _, _) => (None, PathBuf::from(".")),
            (Some(path), None, _) => (None, path),
            (Some(font), Some(path), None) => (Some(font), path),
            (Some(_), Some(_), Some(_)) => return None,
        };

        Some(Self {
            font_path,
            target,
            config_dir,
        })
    }
}
