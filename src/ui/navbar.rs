// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! Renders the localized menu entries, one button per available language
//! and a progress bar while a language switch is in flight. The bar owns no
//! state: it reads [`NavigationState`] and reports user intent as [`Event`]s.

use crate::navigation::{MenuItem, NavigationState, ProgressMode};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, progress_bar, Column, Container, Row, Space, Text},
    Element, Length,
};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub state: &'a NavigationState,
    pub available_locales: &'a [LanguageIdentifier],
    /// Link of the entry the user last activated.
    pub active_link: Option<&'a str>,
    pub language_label: String,
    pub loading_label: String,
    /// Localized description of the last failed switch, if any.
    pub error: Option<String>,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    SelectLanguage(String),
    OpenLink(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    LanguageRequested(String),
    Navigate(String),
}

/// Process a navbar message and return the corresponding event.
///
/// Selecting the language that is already shown and idle is a no-op.
pub fn update(message: Message, state: &NavigationState) -> Event {
    match message {
        Message::SelectLanguage(code) => {
            let unchanged = !state.is_loading()
                && state
                    .current_language()
                    .is_some_and(|current| current.to_string() == code);
            if unchanged {
                Event::None
            } else {
                Event::LanguageRequested(code)
            }
        }
        Message::OpenLink(link) => Event::Navigate(link),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    let top_bar = build_top_bar(&ctx);
    content = content.push(top_bar);

    if ctx.state.progress_mode() == ProgressMode::Indeterminate {
        content = content.push(build_progress(&ctx));
    }

    if let Some(error) = ctx.error {
        content = content.push(
            Container::new(
                Text::new(error)
                    .size(typography::CAPTION)
                    .color(palette::ERROR_500),
            )
            .padding([spacing::XXS, spacing::SM]),
        );
    }

    content.into()
}

/// Build the top bar: menu entries on the left, languages on the right.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center);

    // Nothing to show until the first rebuild lands
    for item in ctx.state.menu_items().unwrap_or_default() {
        row = row.push(build_menu_item(item, ctx.active_link));
    }

    row = row
        .push(Space::new().width(Length::Fill))
        .push(Text::new(ctx.language_label.clone()).size(typography::BODY));

    let current = ctx.state.current_language();
    for locale in ctx.available_locales {
        let code = locale.to_string();
        let mut language_button = button(Text::new(code.clone()).size(typography::BODY))
            .padding([spacing::XXS, spacing::XS]);
        if current == Some(locale) {
            language_button = language_button.style(styles::selected);
        }
        if !ctx.state.is_loading() {
            language_button = language_button.on_press(Message::SelectLanguage(code));
        }
        row = row.push(language_button);
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Left)
        .into()
}

/// Build a single menu entry.
fn build_menu_item<'a>(item: &MenuItem, active_link: Option<&str>) -> Element<'a, Message> {
    let label = Text::new(item.name().to_string()).size(typography::TITLE_MD);
    let entry = button(label)
        .on_press(Message::OpenLink(item.link().to_string()))
        .padding([spacing::XS, spacing::SM]);

    if active_link == Some(item.link()) {
        entry.style(styles::selected).into()
    } else {
        entry.style(styles::menu_item).into()
    }
}

fn build_progress<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    // Indeterminate: no real progress is known, show a half bar with a label
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(progress_bar(0.0..=1.0, 0.5))
        .push(Text::new(ctx.loading_label.clone()).size(typography::CAPTION));

    Container::new(row)
        .padding([spacing::XXS, spacing::SM])
        .width(Length::Fill)
        .into()
}
