// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating catalog navigation, view transform and the
//! command bar.
//!
//! The component is a plain state machine (`Browsing`, `CommandEntry`, `Quit`)
//! fed with toolkit-independent [`InputEvent`]s. Every handled event returns an
//! [`Effect`] telling the application shell what to repaint or whether to exit;
//! [`State::render`] then produces the [`Scene`] for the next frame.

use crate::application::port::{CommandLauncher, ImageLoader};
use crate::config::{
    Config, DEFAULT_COMMAND_MAX_LENGTH, DEFAULT_PAN_STEP, DEFAULT_QUIT_COMMAND,
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH,
};
use crate::directory_scanner::Catalog;
use crate::infrastructure::ShellLauncher;
use crate::media::{FsImageLoader, ImageData};
use crate::ui::command_bar::{BarInput, BarOutcome, CommandBar};
use crate::ui::state::{ViewTransform, ZoomStep};
use crate::ui::viewer::canvas::{BarLayer, ImageLayer, Scene};
use std::path::Path;

/// Logical key, already resolved for the active keyboard layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    #[must_use]
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
        }
    }

    fn is_interrupt(self) -> bool {
        self.ctrl && matches!(self.key, Key::Char('q' | 'c'))
    }
}

/// Input events consumed by the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Window close request.
    Quit,
    KeyPress(KeyPress),
    /// Committed text that did not arrive as a single key press.
    TextInput(String),
    Resize { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    CommandEntry,
    Quit,
}

/// Portion of the window that must be repainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Frame,
    CommandBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw(Redraw),
    Exit,
}

/// Tunables taken from the configuration file.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerSettings {
    pub zoom_step: ZoomStep,
    pub pan_step: i32,
    pub refit_on_resize: bool,
    pub command_max_length: usize,
    pub quit_command: String,
    pub initial_frame: (u32, u32),
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            zoom_step: ZoomStep::default(),
            pan_step: DEFAULT_PAN_STEP,
            refit_on_resize: false,
            command_max_length: DEFAULT_COMMAND_MAX_LENGTH,
            quit_command: DEFAULT_QUIT_COMMAND.to_string(),
            initial_frame: (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl From<&Config> for ViewerSettings {
    fn from(config: &Config) -> Self {
        Self {
            zoom_step: ZoomStep::new(config.display.zoom_step()),
            pan_step: config.display.pan_step(),
            refit_on_resize: config.display.refit_on_resize(),
            command_max_length: config.command.max_length(),
            quit_command: config.command.quit_command().to_string(),
            initial_frame: config.display.window_size(),
        }
    }
}

/// Complete viewer state.
pub struct State<L = FsImageLoader, C = ShellLauncher> {
    catalog: Catalog,
    current_index: usize,
    transform: ViewTransform,
    image: Option<ImageData>,
    frame_size: (u32, u32),
    mode: Mode,
    command_bar: CommandBar,
    pan_step: i32,
    refit_on_resize: bool,
    loader: L,
    launcher: C,
}

impl<L: ImageLoader, C: CommandLauncher> State<L, C> {
    /// Creates the viewer positioned at the catalog's start entry.
    ///
    /// A start image that fails to load is logged and leaves the viewer with
    /// nothing displayed; navigation still works.
    pub fn new(catalog: Catalog, settings: ViewerSettings, loader: L, launcher: C) -> Self {
        let current_index = catalog.start_index();
        let mut state = Self {
            catalog,
            current_index,
            transform: ViewTransform::new(settings.zoom_step),
            image: None,
            frame_size: settings.initial_frame,
            mode: Mode::Browsing,
            command_bar: CommandBar::new(settings.command_max_length, settings.quit_command),
            pan_step: settings.pan_step,
            refit_on_resize: settings.refit_on_resize,
            loader,
            launcher,
        };
        state.load_current();
        state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn command_bar(&self) -> &CommandBar {
        &self.command_bar
    }

    #[must_use]
    pub fn frame_size(&self) -> (u32, u32) {
        self.frame_size
    }

    /// Path commands are run against: the displayed image, or the current
    /// catalog entry when nothing could be displayed yet.
    #[must_use]
    pub fn active_path(&self) -> Option<&Path> {
        match &self.image {
            Some(image) => Some(image.path.as_path()),
            None => self.catalog.get(self.current_index).ok(),
        }
    }

    pub fn handle(&mut self, event: InputEvent) -> Effect {
        if self.mode == Mode::Quit {
            return Effect::Exit;
        }

        match event {
            InputEvent::Quit => self.quit(),
            InputEvent::Resize { width, height } => {
                self.frame_size = (width, height);
                if self.refit_on_resize {
                    self.transform.request_auto_fit();
                }
                Effect::Redraw(Redraw::Frame)
            }
            InputEvent::KeyPress(key) => match self.mode {
                Mode::Browsing => self.handle_browsing_key(key),
                Mode::CommandEntry => self.handle_command_key(key),
                Mode::Quit => Effect::Exit,
            },
            InputEvent::TextInput(text) => match self.mode {
                Mode::Browsing if text == ":" => self.enter_command_mode(),
                Mode::Browsing => Effect::Redraw(Redraw::Frame),
                Mode::CommandEntry => self.delegate_to_bar(BarInput::Text(&text)),
                Mode::Quit => Effect::Exit,
            },
        }
    }

    fn handle_browsing_key(&mut self, press: KeyPress) -> Effect {
        if press.is_interrupt() {
            return self.quit();
        }
        if press.ctrl {
            return Effect::Redraw(Redraw::Frame);
        }

        let step = self.pan_step;
        match press.key {
            Key::Char(':') => return self.enter_command_mode(),
            Key::Up | Key::Char('k') => self.transform.zoom_in(),
            Key::Down | Key::Char('j') => self.transform.zoom_out(),
            Key::Char('d') => self.transform.pan(-step, 0),
            Key::Char('a') => self.transform.pan(step, 0),
            Key::Char('s') => self.transform.pan(0, -step),
            Key::Char('w') => self.transform.pan(0, step),
            Key::Right | Key::Char('l') => self.navigate_to(self.catalog.next(self.current_index)),
            Key::Left | Key::Char('h') => self.navigate_to(self.catalog.prev(self.current_index)),
            _ => {}
        }
        Effect::Redraw(Redraw::Frame)
    }

    fn handle_command_key(&mut self, press: KeyPress) -> Effect {
        let input = if press.is_interrupt() {
            BarInput::Cancel
        } else {
            match press.key {
                Key::Enter => BarInput::Submit,
                Key::Escape => BarInput::Cancel,
                Key::Backspace => BarInput::Erase,
                Key::Char(c) if !press.ctrl => BarInput::Char(c),
                _ => return Effect::Redraw(Redraw::CommandBar),
            }
        };
        self.delegate_to_bar(input)
    }

    fn enter_command_mode(&mut self) -> Effect {
        self.command_bar.open();
        self.mode = Mode::CommandEntry;
        Effect::Redraw(Redraw::CommandBar)
    }

    fn delegate_to_bar(&mut self, input: BarInput<'_>) -> Effect {
        let Some(active_path) = self.active_path().map(Path::to_path_buf) else {
            return Effect::Redraw(Redraw::CommandBar);
        };

        match self.command_bar.handle(input, &active_path) {
            BarOutcome::Ignored | BarOutcome::Edited => Effect::Redraw(Redraw::CommandBar),
            BarOutcome::Closed => {
                self.mode = Mode::Browsing;
                Effect::Redraw(Redraw::Frame)
            }
            BarOutcome::Dispatch(command_line) => {
                if let Err(err) = self.launcher.spawn_detached(&command_line) {
                    tracing::error!(
                        %err,
                        command = %command_line.to_string_lossy(),
                        "failed to launch command"
                    );
                }
                self.mode = Mode::Browsing;
                Effect::Redraw(Redraw::Frame)
            }
            BarOutcome::Quit => self.quit(),
        }
    }

    fn quit(&mut self) -> Effect {
        tracing::debug!("quit requested");
        self.mode = Mode::Quit;
        self.image = None;
        Effect::Exit
    }

    /// Moves to `index` and swaps in its image.
    ///
    /// The position always advances; the displayed image and transform only
    /// change once the new image decoded.
    fn navigate_to(&mut self, index: usize) {
        self.current_index = index;
        self.load_current();
    }

    fn load_current(&mut self) {
        let path = match self.catalog.get(self.current_index) {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(%err, "catalog lookup failed");
                return;
            }
        };
        tracing::info!(index = self.current_index, path = %path.display(), "showing image");

        match self.loader.load(path) {
            Ok(image) => {
                self.image = Some(image);
                self.transform.request_auto_fit();
            }
            Err(err) => {
                tracing::warn!(%err, "keeping previous image");
            }
        }
    }

    /// Composes the next frame, running a pending auto-fit first.
    pub fn render(&mut self) -> Scene {
        let (frame_w, frame_h) = self.frame_size;

        let image = self.image.as_ref().map(|image| {
            self.transform
                .apply_pending_auto_fit(image.width, image.height, frame_w, frame_h);
            ImageLayer {
                handle: image.handle.clone(),
                destination: self.transform.destination(image.width, image.aspect_ratio),
            }
        });

        Scene {
            image,
            command_bar: self.command_bar_layer(),
        }
    }

    /// Just the command bar, for repaints that leave the image untouched.
    #[must_use]
    pub fn command_bar_layer(&self) -> Option<BarLayer> {
        let (frame_w, frame_h) = self.frame_size;
        self.command_bar
            .display_text()
            .map(|text| BarLayer::at_bottom(frame_w, frame_h, text))
    }
}
