// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **View**: zoom and pan steps, initial window size
//! - **Command bar**: shell, quit command, buffer capacity, bar geometry
//! - **Font**: command bar text size

// ==========================================================================
// View Defaults
// ==========================================================================

/// Additive zoom step applied by zoom in/out. Also the zoom floor.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Pixel delta applied by a single pan key press.
pub const DEFAULT_PAN_STEP: i32 = 10;

/// Initial window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Initial window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

// ==========================================================================
// Command Bar Defaults
// ==========================================================================

/// Shell used to run command bar input.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Command bar input that quits the viewer instead of running a shell command.
pub const DEFAULT_QUIT_COMMAND: &str = "q";

/// Maximum number of characters the command bar accepts.
pub const DEFAULT_COMMAND_MAX_LENGTH: usize = 255;

/// Height of the command bar strip at the bottom of the window.
pub const COMMAND_BAR_HEIGHT: u32 = 30;

/// Inner padding between the bar edge and its text.
pub const COMMAND_BAR_PADDING: u32 = 5;

/// Prompt drawn in front of the command bar buffer.
pub const COMMAND_BAR_PROMPT: char = ':';

// ==========================================================================
// Font Defaults
// ==========================================================================

/// Command bar text size in pixels.
pub const DEFAULT_FONT_SIZE: u16 = 18;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Log level used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ZOOM_STEP > 0.0);
    assert!(DEFAULT_PAN_STEP > 0);
    assert!(DEFAULT_WINDOW_WIDTH > 0);
    assert!(DEFAULT_WINDOW_HEIGHT > COMMAND_BAR_HEIGHT);
    assert!(DEFAULT_COMMAND_MAX_LENGTH > 0);
    assert!(COMMAND_BAR_PADDING * 2 < COMMAND_BAR_HEIGHT);
    assert!(DEFAULT_FONT_SIZE > 0);
};
