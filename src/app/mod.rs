// SPDX-License-Identifier: MPL-2.0
//! Application root state and the bridge between iced and the viewer.
//!
//! Startup work that can fail fatally (catalog scan, font file) happens in
//! [`prepare`], before the event loop exists, so `main` can turn it into an
//! exit code. The running `App` only forwards events and repaints.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::directory_scanner::Catalog;
use crate::error::{Error, Result};
use crate::infrastructure::ShellLauncher;
use crate::media::FsImageLoader;
use crate::ui::viewer::{component, Effect, Redraw, Scene, ViewerSettings};
use iced::{window, Element, Font, Subscription, Task, Theme};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const WINDOW_TITLE: &str = "TinyView";

/// Font registered with the renderer for the command bar.
#[derive(Debug, Clone)]
pub struct FontSource {
    pub family: &'static str,
    pub bytes: Vec<u8>,
}

impl FontSource {
    /// Reads a font file. The family name is leaked once so iced can keep it.
    ///
    /// # Errors
    ///
    /// [`Error::Font`] if the file cannot be read.
    pub fn read(path: &Path, family: Option<&str>) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| Error::Font {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let family = family
            .map(str::to_string)
            .or_else(|| {
                path.file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .unwrap_or_default();

        Ok(Self {
            family: Box::leak(family.into_boxed_str()),
            bytes,
        })
    }

    #[must_use]
    pub fn font(&self) -> Font {
        Font::with_name(self.family)
    }
}

/// Everything the event loop needs, resolved ahead of time.
#[derive(Debug, Clone)]
pub struct Launch {
    pub catalog: Catalog,
    pub settings: ViewerSettings,
    pub shell: String,
    pub font: Option<FontSource>,
    pub text_size: f32,
}

/// Builds the catalog and reads the font.
///
/// # Errors
///
/// Fatal startup errors: [`Error::PathNotFound`], [`Error::NoImagesFound`] and
/// [`Error::Font`].
pub fn prepare(flags: &Flags, config: &Config) -> Result<Launch> {
    let catalog = Catalog::build(&flags.target)?;

    let font_path: Option<PathBuf> = flags
        .font_path
        .clone()
        .or_else(|| config.font.path.clone());
    let font = font_path
        .map(|path| FontSource::read(&path, config.font.family.as_deref()))
        .transpose()?;

    Ok(Launch {
        catalog,
        settings: ViewerSettings::from(config),
        shell: config.command.shell().to_string(),
        font,
        text_size: f32::from(config.font.size()),
    })
}

/// Builds the window settings
pub fn window_settings(settings: &ViewerSettings) -> window::Settings {
    let (width, height) = settings.initial_frame;
    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(launch: Launch) -> iced::Result {
    let window = window_settings(&launch.settings);
    let font_bytes = launch.font.as_ref().map(|font| font.bytes.clone());

    // iced 0.14 requires a `Fn` boot; `Launch` is cheap enough to clone once.
    let boot = move || App::new(launch.clone());

    let mut application = iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription);

    if let Some(bytes) = font_bytes {
        application = application.font(bytes);
    }

    application.run()
}

/// Root Iced application state.
pub struct App {
    viewer: component::State,
    scene: Scene,
    font: Font,
    text_size: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("mode", &self.viewer.mode())
            .field("index", &self.viewer.current_index())
            .finish()
    }
}

impl App {
    fn new(launch: Launch) -> (Self, Task<Message>) {
        let launcher = ShellLauncher::new(launch.shell);
        let viewer = component::State::new(
            launch.catalog,
            launch.settings,
            FsImageLoader,
            launcher,
        );

        // The first frame is composed once the window reports its real size.
        let app = Self {
            viewer,
            scene: Scene::default(),
            font: launch.font.as_ref().map_or(Font::DEFAULT, FontSource::font),
            text_size: launch.text_size,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(event) => match self.viewer.handle(event) {
                Effect::None => Task::none(),
                Effect::Redraw(Redraw::Frame) => {
                    self.scene = self.viewer.render();
                    Task::none()
                }
                Effect::Redraw(Redraw::CommandBar) => {
                    self.scene.command_bar = self.viewer.command_bar_layer();
                    Task::none()
                }
                Effect::Exit => iced::exit(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            scene: &self.scene,
            font: self.font,
            text_size: self.text_size,
        })
    }
}

/// Resolves the settings file, honoring `--config-dir`.
#[must_use]
pub fn load_config(flags: &Flags) -> (Config, Option<String>) {
    config::load_with_override(flags.config_dir.clone())
}
