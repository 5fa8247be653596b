// SPDX-License-Identifier: MPL-2.0
//! Frame composition for the viewer.
//!
//! The controller produces a [`Scene`] after every event; this canvas program
//! paints it: black background, the active image at its destination rectangle,
//! then the command bar strip when editing.
#![allow(clippy::cast_precision_loss)]

use crate::config::{COMMAND_BAR_HEIGHT, COMMAND_BAR_PADDING};
use crate::ui::state::Rect;
use iced::widget::canvas::{self, Text};
use iced::widget::image::Handle;
use iced::{mouse, Color, Font, Pixels, Point, Rectangle, Size, Theme};

const BACKGROUND: Color = Color::BLACK;
const BAR_BACKGROUND: Color = Color::BLACK;
const BAR_TEXT: Color = Color::WHITE;

/// Image placement for one frame.
#[derive(Debug, Clone)]
pub struct ImageLayer {
    pub handle: Handle,
    pub destination: Rect,
}

/// Command bar strip for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayer {
    pub area: Rect,
    pub text: String,
}

impl BarLayer {
    /// Strip along the bottom edge of a `frame_w` x `frame_h` window.
    #[must_use]
    pub fn at_bottom(frame_w: u32, frame_h: u32, text: String) -> Self {
        let height = COMMAND_BAR_HEIGHT.min(frame_h);
        Self {
            area: Rect {
                x: 0,
                y: i32::try_from(frame_h - height).unwrap_or(i32::MAX),
                width: frame_w,
                height,
            },
            text,
        }
    }

    /// Top-left corner of the prompt text.
    #[must_use]
    pub fn text_origin(&self) -> Point {
        let padding = COMMAND_BAR_PADDING as f32;
        Point::new(
            self.area.x as f32 + padding,
            self.area.y as f32 + padding,
        )
    }
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub image: Option<ImageLayer>,
    pub command_bar: Option<BarLayer>,
}

/// Canvas program painting a [`Scene`].
#[derive(Debug, Clone, Copy)]
pub struct SceneCanvas<'a> {
    scene: &'a Scene,
    font: Font,
    text_size: f32,
}

impl<'a> SceneCanvas<'a> {
    #[must_use]
    pub fn new(scene: &'a Scene, font: Font, text_size: f32) -> Self {
        Self {
            scene,
            font,
            text_size,
        }
    }
}

fn to_rectangle(rect: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.x as f32, rect.y as f32),
        Size::new(rect.width as f32, rect.height as f32),
    )
}

impl<Message> canvas::Program<Message> for SceneCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), BACKGROUND);

        if let Some(image) = &self.scene.image {
            frame.draw_image(
                to_rectangle(image.destination),
                canvas::Image::new(image.handle.clone()),
            );
        }

        if let Some(bar) = &self.scene.command_bar {
            let area = to_rectangle(bar.area);
            frame.fill_rectangle(area.position(), area.size(), BAR_BACKGROUND);
            frame.fill_text(Text {
                content: bar.text.clone(),
                position: bar.text_origin(),
                color: BAR_TEXT,
                size: Pixels(self.text_size),
                font: self.font,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

const _: () = {
    assert!(COMMAND_BAR_PADDING * 2 < COMMAND_BAR_HEIGHT);
};
