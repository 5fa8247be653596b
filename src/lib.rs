// SPDX-License-Identifier: MPL-2.0
//! `tinyview` is a minimal directory-based image viewer built with the Iced GUI
//! framework.
//!
//! It shows one image at a time with auto-fit zoom, keyboard zoom/pan and
//! wraparound navigation, and runs shell commands against the current file
//! from a `:` command bar.

#![doc(html_root_url = "https://docs.rs/tinyview/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
