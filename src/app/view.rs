// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::viewer::{Scene, SceneCanvas};
use iced::widget::Canvas;
use iced::{Element, Font, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub scene: &'a Scene,
    pub font: Font,
    pub text_size: f32,
}

/// Renders the last composed scene across the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(SceneCanvas::new(ctx.scene, ctx.font, ctx.text_size))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
