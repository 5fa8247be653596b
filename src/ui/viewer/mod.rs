// SPDX-License-Identifier: MPL-2.0
//! Image viewer module responsible for the browsing state machine and frame
//! composition.

pub mod canvas;
pub mod component;

pub use canvas::{BarLayer, ImageLayer, Scene, SceneCanvas};
pub use component::{Effect, InputEvent, Key, KeyPress, Mode, Redraw, State, ViewerSettings};
