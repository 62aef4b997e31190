// SPDX-License-Identifier: MPL-2.0
//! Application root state and the Iced application loop.
//!
//! The `App` struct wires together localization, the theme mode and the
//! shopping list screen, and routes messages to them. Preferences are read
//! once at startup; the list itself is only ever held in memory.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::ui::shopping_list;
use crate::ui::theming::ThemeMode;
use fluent_bundle::FluentValue;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    shopping_list: shopping_list::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("item_count", &self.shopping_list.items().len())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are only consumed once.
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

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            shopping_list: shopping_list::State::new(),
        }
    }
}

impl App {
    /// Loads preferences and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(warning = %key, "settings could not be loaded, using defaults");
        }

        (Self::with_config(flags.lang, &config), Task::none())
    }

    /// Builds the application state from already loaded preferences.
    pub fn with_config(lang: Option<String>, config: &Config) -> Self {
        let i18n = I18n::new(lang, config);
        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.general.theme_mode,
            "starting shopping list"
        );

        App {
            i18n,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        }
    }

    pub fn title(&self) -> String {
        let count = self.shopping_list.items().len();
        if count == 0 {
            self.i18n.tr("window-title")
        } else {
            self.i18n
                .tr_with_args("window-title-with-count", &[("count", FluentValue::from(count))])
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn shopping_list(&self) -> &shopping_list::State {
        &self.shopping_list
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShoppingList(list_message) => {
                update::handle_shopping_list_message(&mut self.shopping_list, list_message)
            }
            Message::EscapePressed => update::handle_escape(&mut self.shopping_list),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            shopping_list: &self.shopping_list,
        })
    }
}
