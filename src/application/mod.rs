// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: trait definitions the viewer controller depends on
//!
//! # Dependency Rule
//!
//! - The viewer controller only talks to collaborators through ports
//! - Infrastructure (`media`, `infrastructure`) implements the ports
//! - Tests substitute in-memory implementations

pub mod port;
