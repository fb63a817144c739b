// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery, localization and
//! persisted preferences.
//!
//! The manifest is read exactly once, in [`App::new`]. After that the only
//! inputs are cell taps and window frames.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::gallery::manifest;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
    theme_mode: ThemeMode,
    theme: Theme,
    colors: ColorScheme,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.gallery.len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 700;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 400;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences and the bundled manifest, and builds the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let app = Self::from_config(flags.lang, &config);

        if let Some(key) = config_warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Builds the application state from an already loaded configuration.
    #[must_use]
    pub fn from_config(lang: Option<String>, config: &Config) -> Self {
        let i18n = I18n::new(lang, config);
        let manifest = manifest::load_bundled(config.gallery.sparse_record_policy());
        tracing::info!(photos = manifest.len(), "manifest loaded");

        let gallery = gallery::State::new(manifest.into_photos(), config.gallery.transition());
        let theme_mode = config.general.theme_mode;
        let (theme, colors) = theme_mode.resolve();

        Self {
            i18n,
            gallery,
            theme_mode,
            theme,
            colors,
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &gallery::State {
        &self.gallery
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => self.gallery.update(msg),
            Message::Frame(at) => self.gallery.update(gallery::Message::Frame(at)),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            colors: &self.colors,
        })
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_frame_subscription(self.gallery.is_animating())
    }
}
