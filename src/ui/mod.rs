// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The viewer follows the Elm-style "state down, messages up" pattern: the
//! application shell translates toolkit events into viewer input and paints
//! whatever scene the viewer produces.
//!
//! - [`viewer`] - Browsing state machine, navigation and frame composition
//! - [`command_bar`] - One-line command editor opened with `:`
//! - [`state`] - View transform (zoom, pan, auto-fit)

pub mod command_bar;
pub mod state;
pub mod viewer;
