// SPDX-License-Identifier: MPL-2.0
//! Modal dialog building blocks.
//!
//! A [`Dialog`] is a card with an optional status icon, a title, a body
//! text, arbitrary inner content, and up to two footer buttons. The
//! [`modal`] helper stacks a dialog above any base view behind a dimmed
//! backdrop.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::dialog::{self, Dialog, Kind};
//!
//! let card = Dialog::new(Kind::Success)
//!     .title(i18n.tr("availability-available-title"))
//!     .body(booking_url)
//!     .confirm(i18n.tr("availability-book-button"), Message::BookNow)
//!     .cancel(i18n.tr("availability-close-button"), Message::Close)
//!     .view();
//!
//! dialog::modal(base_view, card, Some(Message::Close))
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles::{button as button_styles, overlay};
use iced::widget::{
    button, center, mouse_area, opaque, svg, text, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Color, Element, Length, Theme};

/// Dialog flavor determines the header icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Confirmation of a completed action (green checkmark).
    Success,
    /// Something went wrong (red cross).
    Error,
    /// Neutral dialog without a status icon.
    #[default]
    Plain,
}

impl Kind {
    /// Returns the header icon and accent color, if this flavor has one.
    fn accent(self) -> Option<(svg::Handle, Color)> {
        match self {
            Kind::Success => Some((icons::checkmark(), palette::SUCCESS_500)),
            Kind::Error => Some((icons::cross(), palette::ERROR_500)),
            Kind::Plain => None,
        }
    }
}

/// Configuration for a modal dialog card.
pub struct Dialog<'a, M> {
    kind: Kind,
    title: Option<String>,
    body: Option<String>,
    content: Option<Element<'a, M>>,
    confirm: Option<(String, M)>,
    cancel: Option<(String, M)>,
}

impl<'a, M> Dialog<'a, M> {
    /// Creates an empty dialog of the given flavor.
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            title: None,
            body: None,
            content: None,
            confirm: None,
            cancel: None,
        }
    }

    /// Sets the title (main heading).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the body (user-friendly explanation below the title).
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets arbitrary inner content rendered between body and footer.
    #[must_use]
    pub fn content(mut self, content: impl Into<Element<'a, M>>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Sets the confirm button label and message.
    #[must_use]
    pub fn confirm(mut self, label: impl Into<String>, message: M) -> Self {
        self.confirm = Some((label.into(), message));
        self
    }

    /// Sets the cancel button label and message.
    #[must_use]
    pub fn cancel(mut self, label: impl Into<String>, message: M) -> Self {
        self.cancel = Some((label.into(), message));
        self
    }
}

impl<'a, M: Clone + 'a> Dialog<'a, M> {
    /// Renders the dialog card.
    pub fn view(self) -> Element<'a, M> {
        let accent = self.kind.accent();

        let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

        // Header: optional status icon next to the title
        if let Some(title_text) = self.title {
            let accent_color = accent.as_ref().map(|(_, color)| *color);
            let title =
                Text::new(title_text)
                    .size(typography::TITLE_MD)
                    .style(move |theme: &Theme| text::Style {
                        color: accent_color.or(Some(theme.palette().text)),
                    });

            let mut header = Row::new()
                .spacing(spacing::SM)
                .align_y(alignment::Vertical::Center);
            if let Some((icon, color)) = accent {
                header = header.push(icons::tinted(icon, sizing::ICON_LG, color));
            }
            header = header.push(title);

            column = column.push(header);
        }

        // Body
        if let Some(body_text) = self.body {
            let body = Text::new(body_text)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.base.text),
                });
            column = column.push(body);
        }

        // Inner content
        if let Some(content) = self.content {
            column = column.push(content);
        }

        // Footer: [cancel] [confirm] aligned to the right
        if self.confirm.is_some() || self.cancel.is_some() {
            let mut footer = Row::new().spacing(spacing::SM);

            if let Some((label, message)) = self.cancel {
                footer = footer.push(
                    button(Text::new(label).size(typography::BODY))
                        .on_press(message)
                        .padding([spacing::XS, spacing::MD])
                        .style(button_styles::unselected),
                );
            }

            if let Some((label, message)) = self.confirm {
                let confirm_style = match self.kind {
                    Kind::Error => button_styles::danger,
                    _ => button_styles::primary,
                };
                footer = footer.push(
                    button(Text::new(label).size(typography::BODY))
                        .on_press(message)
                        .padding([spacing::XS, spacing::MD])
                        .style(confirm_style),
                );
            }

            column = column.push(
                Container::new(footer)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );
        }

        Container::new(column)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(overlay::dialog_card)
            .into()
    }
}

/// Stacks `dialog` above `base` behind a dimmed backdrop.
///
/// When `on_backdrop` is set, clicking outside the dialog emits that
/// message. With `None` the backdrop swallows clicks, which keeps the
/// dialog strictly modal (e.g. while a request is in flight).
pub fn modal<'a, M: Clone + 'a>(
    base: impl Into<Element<'a, M>>,
    dialog: impl Into<Element<'a, M>>,
    on_backdrop: Option<M>,
) -> Element<'a, M> {
    let backdrop = center(opaque(dialog.into())).style(overlay::backdrop);

    let mut area = mouse_area(backdrop);
    if let Some(message) = on_backdrop {
        area = area.on_press(message);
    }

    Stack::new().push(base.into()).push(opaque(area)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestMessage {
        Confirm,
        Cancel,
    }

    #[test]
    fn dialog_builder_records_buttons() {
        let dialog: Dialog<'_, TestMessage> = Dialog::new(Kind::Success)
            .title("Room is available")
            .body("General's Quarters")
            .confirm("Book now!", TestMessage::Confirm)
            .cancel("Close", TestMessage::Cancel);

        assert_eq!(dialog.kind, Kind::Success);
        assert_eq!(dialog.title.as_deref(), Some("Room is available"));
        assert_eq!(
            dialog.confirm,
            Some(("Book now!".to_string(), TestMessage::Confirm))
        );
        assert_eq!(
            dialog.cancel,
            Some(("Close".to_string(), TestMessage::Cancel))
        );
    }

    #[test]
    fn plain_kind_has_no_accent() {
        assert!(Kind::Plain.accent().is_none());
        assert!(Kind::Success.accent().is_some());
        assert!(Kind::Error.accent().is_some());
    }

    #[test]
    fn accent_colors_follow_severity() {
        let (_, success) = Kind::Success.accent().unwrap();
        let (_, error) = Kind::Error.accent().unwrap();
        assert_eq!(success, palette::SUCCESS_500);
        assert_eq!(error, palette::ERROR_500);
    }

    #[test]
    fn modal_smoke_test() {
        let base: Element<'_, TestMessage> = Text::new("base").into();
        let card = Dialog::new(Kind::Plain).title("Dates").view();
        let _ = modal(base, card, Some(TestMessage::Cancel));
    }
}
