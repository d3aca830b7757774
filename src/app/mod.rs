// SPDX-License-Identifier: MPL-2.0
//! Application root state and composition of the navigation shell.
//!
//! `App::new` builds every collaborator once (config, catalogue loader,
//! translator, navigation controller) and `App::update` routes navbar
//! messages and finished menu requests between them.

mod message;

pub use message::{Flags, Message};

use crate::config::{self, Config, APP_NAME, DEFAULT_LOCALE};
use crate::error::TranslationError;
use crate::i18n::{
    resolve_locale, DirectoryLoader, EmbeddedLoader, FluentTranslator, I18n, TranslationLoader,
};
use crate::navigation::{MenuResponse, NavigationController, Outcome};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::{self, Event as NavbarEvent};
use iced::widget::{Column, Container, Text};
use iced::{window, Element, Length, Task};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;

/// Root Iced application state.
pub struct App {
    translator: Arc<FluentTranslator>,
    navigation: NavigationController,
    available_locales: Vec<LanguageIdentifier>,
    config: Config,
    config_dir: Option<PathBuf>,
    /// Link of the menu entry the user last opened.
    active_link: Option<String>,
    /// Last failed language switch.
    error: Option<TranslationError>,
    /// i18n key of a startup warning (unreadable config).
    warning: Option<&'static str>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("navigation", &self.navigation)
            .field("active_link", &self.active_link)
            .field("error", &self.error)
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .run()
}

/// Picks the catalogue source: a directory backed by the embedded
/// catalogues when one is configured, the embedded catalogues otherwise.
fn build_loader(i18n_dir: Option<String>, config: &Config) -> Arc<dyn TranslationLoader> {
    let dir = i18n_dir
        .map(PathBuf::from)
        .or_else(|| config.i18n.directory.clone());
    match dir {
        Some(dir) => {
            log::info!("Reading translations from {}", dir.display());
            Arc::new(DirectoryLoader::new(dir).with_embedded_fallback())
        }
        None => Arc::new(EmbeddedLoader),
    }
}

impl App {
    /// Wires the collaborators together and starts loading the menu for
    /// the startup locale (CLI, then config, then OS, then the default).
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, warning) = config::load(config_dir.as_deref());

        let loader = build_loader(flags.i18n_dir, &config);
        let translator = Arc::new(FluentTranslator::new(I18n::from_config(&config), loader));
        let available_locales = translator.available_locales();

        let startup_locale = resolve_locale(flags.lang, &config, &available_locales)
            .map(|locale| locale.to_string())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        log::info!("Starting with locale {startup_locale}");

        let navigation = NavigationController::new(translator.clone());

        let mut app = App {
            translator,
            navigation,
            available_locales,
            config,
            config_dir,
            active_link: None,
            error: None,
            warning,
        };
        let task = app.request_language(&startup_locale);
        (app, task)
    }

    pub fn title(&self) -> String {
        // Catalogues load asynchronously; avoid a MISSING marker at startup
        if self.navigation.state().current_language().is_some() {
            self.translator.tr("window-title")
        } else {
            APP_NAME.to_string()
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(navbar_message) => {
                match navbar::update(navbar_message, self.navigation.state()) {
                    NavbarEvent::None => Task::none(),
                    NavbarEvent::LanguageRequested(code) => self.request_language(&code),
                    NavbarEvent::Navigate(link) => {
                        self.active_link = Some(link);
                        Task::none()
                    }
                }
            }
            Message::MenuLoaded(response) => {
                log::debug!(
                    "Menu response for {} (ok: {})",
                    response.language(),
                    response.is_ok()
                );
                self.apply_menu(response)
            }
        }
    }

    fn apply_menu(&mut self, response: MenuResponse) -> Task<Message> {
        match self.navigation.apply(response) {
            Ok(Outcome::Updated) => {
                self.error = None;
                self.active_link.get_or_insert_with(|| "/".to_string());
                self.persist_language();
                Task::none()
            }
            Ok(Outcome::Stale) => Task::none(),
            Err(err) => {
                self.error = Some(err);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let status = self
            .error
            .as_ref()
            .map(|err| self.translator.tr(err.i18n_key()))
            .or_else(|| self.warning.map(|key| self.translator.tr(key)));

        let navbar_view = navbar::view(navbar::ViewContext {
            state: self.navigation.state(),
            available_locales: &self.available_locales,
            active_link: self.active_link.as_deref(),
            language_label: self.translator.tr("navbar-language-label"),
            loading_label: self.translator.tr("navbar-loading"),
            error: status,
        })
        .map(Message::Navbar);

        let heading = self
            .navigation
            .state()
            .menu_items()
            .and_then(|items| {
                items
                    .iter()
                    .find(|item| Some(item.link()) == self.active_link.as_deref())
            })
            .map(|item| item.name().to_string())
            .unwrap_or_default();

        let body = Container::new(Text::new(heading).size(typography::TITLE_MD))
            .padding(spacing::MD)
            .width(Length::Fill)
            .height(Length::Fill);

        Column::new().push(navbar_view).push(body).into()
    }

    fn request_language(&mut self, code: &str) -> Task<Message> {
        match self.navigation.change_language(code) {
            Ok(request) => Task::perform(request.run(), Message::MenuLoaded),
            Err(err) => {
                log::warn!("Ignoring language request {code:?}: {err}");
                self.error = Some(err);
                Task::none()
            }
        }
    }

    /// Remembers the applied language in `settings.toml`.
    fn persist_language(&mut self) {
        let Some(locale) = self.navigation.state().current_language() else {
            return;
        };
        let language = locale.to_string();
        if self.config.general.language.as_deref() == Some(language.as_str()) {
            return;
        }
        self.config.general.language = Some(language);

        if cfg!(test) {
            return;
        }
        if let Err(error) = config::save(&self.config, self.config_dir.as_deref()) {
            log::error!("Failed to save config: {}", error);
        }
    }
}
