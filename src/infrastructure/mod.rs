// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`
//! that touch the operating system.
//!
//! # Available Adapters
//!
//! - [`process`]: detached shell commands (implements [`CommandLauncher`])
//!
//! Image decoding lives in [`crate::media`] next to the image types.
//!
//! [`CommandLauncher`]: crate::application::port::CommandLauncher

pub mod process;

pub use process::ShellLauncher;
