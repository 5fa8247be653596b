// SPDX-License-Identifier: MPL-2.0
//! This module handles the viewer configuration, loaded from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[display]` - zoom/pan steps, initial window size, refit behaviour
//! - `[command]` - shell, quit command and capacity of the command bar
//! - `[font]` - command bar font file, family and size
//! - `[logging]` - default log level when `RUST_LOG` is unset
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. `--config-dir` on the command line (passed to [`load_with_override`])
//! 3. `TINYVIEW_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use tinyview::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! assert!(config.display.zoom_step() > 0.0);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "TinyView";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TINYVIEW_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// View transform and window settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Additive zoom step (also the zoom floor).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_step: Option<f32>,

    /// Pan distance in pixels per key press.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_step: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_height: Option<u32>,

    /// Recompute auto-fit whenever the window is resized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refit_on_resize: Option<bool>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_step: Some(DEFAULT_ZOOM_STEP),
            pan_step: Some(DEFAULT_PAN_STEP),
            window_width: Some(DEFAULT_WINDOW_WIDTH),
            window_height: Some(DEFAULT_WINDOW_HEIGHT),
            refit_on_resize: Some(false),
        }
    }
}

impl DisplayConfig {
    /// Zoom step, falling back to the default for missing or non-positive values.
    #[must_use]
    pub fn zoom_step(&self) -> f32 {
        self.zoom_step
            .filter(|step| step.is_finite() && *step > 0.0)
            .unwrap_or(DEFAULT_ZOOM_STEP)
    }

    #[must_use]
    pub fn pan_step(&self) -> i32 {
        self.pan_step
            .filter(|step| *step > 0)
            .unwrap_or(DEFAULT_PAN_STEP)
    }

    /// Initial window size, never smaller than one pixel per side.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.window_width.unwrap_or(DEFAULT_WINDOW_WIDTH).max(1),
            self.window_height.unwrap_or(DEFAULT_WINDOW_HEIGHT).max(1),
        )
    }

    #[must_use]
    pub fn refit_on_resize(&self) -> bool {
        self.refit_on_resize.unwrap_or(false)
    }
}

/// Command bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandConfig {
    /// Shell executable that receives `-c <command line>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,

    /// Input that quits the viewer instead of running a command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quit_command: Option<String>,

    /// Maximum number of characters accepted by the bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            shell: Some(DEFAULT_SHELL.to_string()),
            quit_command: Some(DEFAULT_QUIT_COMMAND.to_string()),
            max_length: Some(DEFAULT_COMMAND_MAX_LENGTH),
        }
    }
}

impl CommandConfig {
    #[must_use]
    pub fn shell(&self) -> &str {
        self.shell
            .as_deref()
            .filter(|shell| !shell.trim().is_empty())
            .unwrap_or(DEFAULT_SHELL)
    }

    #[must_use]
    pub fn quit_command(&self) -> &str {
        self.quit_command
            .as_deref()
            .filter(|quit| !quit.is_empty())
            .unwrap_or(DEFAULT_QUIT_COMMAND)
    }

    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
            .filter(|len| *len > 0)
            .unwrap_or(DEFAULT_COMMAND_MAX_LENGTH)
    }
}

/// Command bar font settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FontConfig {
    /// Font file to register. `None` uses the toolkit's built-in font.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Family name inside the font file. Defaults to the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u16>,
}

impl FontConfig {
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size.filter(|size| *size > 0).unwrap_or(DEFAULT_FONT_SIZE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl LoggingConfig {
    #[must_use]
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub command: CommandConfig,

    #[serde(default)]
    pub font: FontConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Path resolution
// =============================================================================

/// Returns the config directory.
///
/// `override_dir` wins, then `TINYVIEW_CONFIG_DIR`, then the platform default.
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    if let Ok(env_dir) = std::env::var(ENV_CONFIG_DIR) {
        if !env_dir.is_empty() {
            return Some(PathBuf::from(env_dir));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(override_dir).map(|dir| dir.join(CONFIG_FILE))
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the configuration and an optional warning describing why the file on
/// disk was ignored.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(err) => (
                    Config::default(),
                    Some(format!(
                        "ignoring config file {}: {err}",
                        path.display()
                    )),
                ),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
