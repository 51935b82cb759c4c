// SPDX-License-Identifier: MPL-2.0
//! Settings screen for language, appearance, and server preferences.
//!
//! Language and theme changes apply immediately. The server URL is edited
//! as free text and committed on submit or when leaving the screen; an
//! invalid URL keeps the guest on the screen with an inline error.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, text_input, Column, Row, Text},
    Element, Length, Theme,
};
use unic_langid::LanguageIdentifier;

/// Key for the inline error shown when the server URL does not parse.
pub const SERVER_URL_INVALID_KEY: &str = "settings-server-url-error-invalid";

/// Editing state for the settings screen.
#[derive(Debug, Clone)]
pub struct State {
    server_url_input: String,
    /// Last value accepted; used to detect whether a commit is needed.
    committed_url: String,
    server_url_error: Option<&'static str>,
}

/// Contextual data needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ServerUrlChanged(String),
    ServerUrlSubmitted,
    BackToRooms,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    /// The server URL changed and validated; the app should adopt it.
    ServerUrlCommitted(String),
    BackToRooms,
    /// Leave the screen and adopt the freshly committed URL in one step.
    BackToRoomsWithServerUrl(String),
}

impl State {
    /// Creates the editing state seeded with the currently active URL.
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url_input: server_url.to_string(),
            committed_url: server_url.to_string(),
            server_url_error: None,
        }
    }

    #[must_use]
    pub fn server_url_error(&self) -> Option<&'static str> {
        self.server_url_error
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
            Message::ThemeModeSelected(mode) => Event::ThemeModeSelected(mode),
            Message::ServerUrlChanged(value) => {
                self.server_url_input = value;
                self.server_url_error = None;
                Event::None
            }
            Message::ServerUrlSubmitted => match self.ensure_server_url_committed() {
                Ok(Some(url)) => Event::ServerUrlCommitted(url),
                Ok(None) => Event::None,
                Err(()) => Event::None,
            },
            Message::BackToRooms => match self.ensure_server_url_committed() {
                Ok(Some(url)) => Event::BackToRoomsWithServerUrl(url),
                Ok(None) => Event::BackToRooms,
                Err(()) => Event::None,
            },
        }
    }

    /// Validates the URL field and returns the value to adopt, if any.
    ///
    /// `Ok(Some(url))` means a new valid URL was committed, `Ok(None)` that
    /// nothing changed (an emptied field reverts to the committed value),
    /// and `Err(())` that the input is invalid and the screen should not be
    /// left. Also used by the app when a navbar jump leaves the screen.
    pub fn ensure_server_url_committed(&mut self) -> Result<Option<String>, ()> {
        let trimmed = self.server_url_input.trim();

        if trimmed.is_empty() {
            self.server_url_input = self.committed_url.clone();
            self.server_url_error = None;
            return Ok(None);
        }

        match normalize_server_url(trimmed) {
            Ok(url) => {
                self.server_url_error = None;
                if url == self.committed_url {
                    self.server_url_input = url;
                    Ok(None)
                } else {
                    self.committed_url = url.clone();
                    self.server_url_input = url.clone();
                    Ok(Some(url))
                }
            }
            Err(key) => {
                self.server_url_error = Some(key);
                Err(())
            }
        }
    }
}

/// Checks scheme and host, and strips any trailing slash.
fn normalize_server_url(input: &str) -> Result<String, &'static str> {
    let rest = input
        .strip_prefix("http://")
        .or_else(|| input.strip_prefix("https://"))
        .ok_or(SERVER_URL_INVALID_KEY)?;

    let host = rest.split('/').next().unwrap_or("");
    if host.is_empty() {
        return Err(SERVER_URL_INVALID_KEY);
    }

    Ok(input.trim_end_matches('/').to_string())
}

/// Render the settings screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("settings-back-button"))).size(typography::BODY),
    )
    .on_press(Message::BackToRooms);

    let title = Text::new(ctx.i18n.tr("settings-title")).size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_language_section(&ctx))
        .push(build_appearance_section(&ctx))
        .push(build_server_section(&ctx));

    scrollable(content).into()
}

/// Build the language selection section.
fn build_language_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = build_section_header(
        icons::globe(),
        ctx.i18n.tr("settings-section-language"),
    );

    let mut buttons = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("select-language-label")).size(typography::BODY));

    for locale in &ctx.i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name_key = format!("language-name-{locale}");
        let translated_name = ctx.i18n.tr(&translated_name_key);
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{translated_name} ({display_name})")
        };

        let is_current = ctx.i18n.current_locale() == locale;
        let style = if is_current {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        buttons = buttons.push(
            button(Text::new(button_text).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(buttons)
        .into()
}

/// Build the theme mode section.
fn build_appearance_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = build_section_header(
        icons::cog(),
        ctx.i18n.tr("settings-section-appearance"),
    );

    let modes = [
        (ThemeMode::Light, "theme-mode-light"),
        (ThemeMode::Dark, "theme-mode-dark"),
        (ThemeMode::System, "theme-mode-system"),
    ];

    let mut row = Row::new().spacing(spacing::XS);
    for (mode, label_key) in modes {
        let style = if ctx.theme_mode == mode {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        row = row.push(
            button(text(ctx.i18n.tr(label_key)).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::ThemeModeSelected(mode)),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(row)
        .into()
}

/// Build the booking server section.
fn build_server_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = build_section_header(
        icons::globe(),
        ctx.i18n.tr("settings-section-server"),
    );

    let label = Text::new(ctx.i18n.tr("settings-server-url-label")).size(typography::BODY);

    let url_field = text_input("http://localhost:8080", &ctx.state.server_url_input)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::ROOM_CARD_WIDTH))
        .on_input(Message::ServerUrlChanged)
        .on_submit(Message::ServerUrlSubmitted);

    let mut section = Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(label)
        .push(url_field);

    if let Some(key) = ctx.state.server_url_error {
        section = section.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                }),
        );
    }

    section.into()
}

/// Build a section header with icon and title.
fn build_section_header<'a>(
    icon: iced::widget::svg::Handle,
    title: String,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(icons::themed(icon, sizing::ICON_MD))
        .push(Text::new(title).size(typography::TITLE_SM))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_view_renders() {
        let i18n = I18n::default();
        let state = State::new("http://localhost:8080");
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            theme_mode: ThemeMode::System,
        };
        let _element = view(ctx);
    }

    #[test]
    fn language_selection_passes_through() {
        let mut state = State::new("http://localhost:8080");
        let locale: LanguageIdentifier = "fr".parse().unwrap();
        let event = state.update(Message::LanguageSelected(locale.clone()));
        assert!(matches!(event, Event::LanguageSelected(l) if l == locale));
    }

    #[test]
    fn theme_mode_selection_passes_through() {
        let mut state = State::new("http://localhost:8080");
        let event = state.update(Message::ThemeModeSelected(ThemeMode::Dark));
        assert!(matches!(event, Event::ThemeModeSelected(ThemeMode::Dark)));
    }

    #[test]
    fn unchanged_url_leaves_without_commit() {
        let mut state = State::new("http://localhost:8080");
        let event = state.update(Message::BackToRooms);
        assert!(matches!(event, Event::BackToRooms));
    }

    #[test]
    fn changed_url_is_committed_when_leaving() {
        let mut state = State::new("http://localhost:8080");
        state.update(Message::ServerUrlChanged("https://fortsmythe.example".into()));

        let event = state.update(Message::BackToRooms);
        assert!(matches!(
            event,
            Event::BackToRoomsWithServerUrl(url) if url == "https://fortsmythe.example"
        ));
    }

    #[test]
    fn invalid_url_blocks_leaving_and_sets_error() {
        let mut state = State::new("http://localhost:8080");
        state.update(Message::ServerUrlChanged("fortsmythe.example".into()));

        let event = state.update(Message::BackToRooms);
        assert!(matches!(event, Event::None));
        assert_eq!(state.server_url_error(), Some(SERVER_URL_INVALID_KEY));
    }

    #[test]
    fn emptied_url_reverts_to_committed_value() {
        let mut state = State::new("http://localhost:8080");
        state.update(Message::ServerUrlChanged(String::new()));

        let event = state.update(Message::BackToRooms);
        assert!(matches!(event, Event::BackToRooms));
        assert_eq!(state.server_url_input, "http://localhost:8080");
    }

    #[test]
    fn submit_commits_and_updates_the_baseline() {
        let mut state = State::new("http://localhost:8080");
        state.update(Message::ServerUrlChanged("http://inn.example:9090/".into()));

        let event = state.update(Message::ServerUrlSubmitted);
        assert!(matches!(
            event,
            Event::ServerUrlCommitted(url) if url == "http://inn.example:9090"
        ));

        // A second submit with the same value is a no-op
        let event = state.update(Message::ServerUrlSubmitted);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn editing_clears_the_error() {
        let mut state = State::new("http://localhost:8080");
        state.update(Message::ServerUrlChanged("nope".into()));
        let _ = state.update(Message::ServerUrlSubmitted);
        assert!(state.server_url_error().is_some());

        state.update(Message::ServerUrlChanged("http://nope.example".into()));
        assert!(state.server_url_error().is_none());
    }

    #[test]
    fn normalize_accepts_both_schemes() {
        assert_eq!(
            normalize_server_url("http://host.example"),
            Ok("http://host.example".to_string())
        );
        assert_eq!(
            normalize_server_url("https://host.example/"),
            Ok("https://host.example".to_string())
        );
    }

    #[test]
    fn normalize_rejects_missing_scheme_or_host() {
        assert_eq!(
            normalize_server_url("host.example"),
            Err(SERVER_URL_INVALID_KEY)
        );
        assert_eq!(normalize_server_url("http://"), Err(SERVER_URL_INVALID_KEY));
        assert_eq!(
            normalize_server_url("http:///path"),
            Err(SERVER_URL_INVALID_KEY)
        );
    }

    #[test]
    fn normalize_keeps_a_path_but_strips_the_trailing_slash() {
        assert_eq!(
            normalize_server_url("http://host.example/booking/"),
            Ok("http://host.example/booking".to_string())
        );
    }
}
