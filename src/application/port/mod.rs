// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`media`]: decoding an image file into the active image resource
//! - [`process`]: launching a detached shell command
//!
//! # Design Notes
//!
//! - Methods return the crate [`Result`](crate::error::Result)
//! - Implementations are called synchronously from the event loop

pub mod media;
pub mod process;

pub use media::ImageLoader;
pub use process::CommandLauncher;
