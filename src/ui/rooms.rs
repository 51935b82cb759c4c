// SPDX-License-Identifier: MPL-2.0
//! Rooms screen listing the bookable rooms.
//!
//! The landing screen of the app. Each room gets a card with its name,
//! a short description, and a button that opens the availability dialog.

use crate::booking::room::{self, Room};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the rooms screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the rooms screen.
#[derive(Debug, Clone)]
pub enum Message {
    CheckAvailability(Room),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    CheckAvailability(Room),
}

/// Process a rooms screen message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::CheckAvailability(room) => Event::CheckAvailability(room),
    }
}

/// Render the rooms screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("rooms-title")).size(typography::TITLE_LG);

    let subtitle = Text::new(ctx.i18n.tr("rooms-subtitle"))
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        });

    let mut cards = Column::new().spacing(spacing::MD);
    for room in room::catalog() {
        cards = cards.push(build_room_card(&ctx, *room));
    }

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(title)
        .push(subtitle)
        .push(cards);

    scrollable(content).into()
}

/// Build a single room card with icon, description, and action button.
fn build_room_card<'a>(ctx: &ViewContext<'a>, room: Room) -> Element<'a, Message> {
    let icon = icons::tinted(icons::bed(), sizing::ICON_LG, palette::PRIMARY_500);

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(room.name()).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr(room.description_key()))
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.strong.text),
                }),
        );

    let check_button = button(
        text(ctx.i18n.tr("room-check-availability-button")).size(typography::BODY),
    )
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::primary)
    .on_press(Message::CheckAvailability(room));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(icon)
        .push(details)
        .push(check_button);

    Container::new(row)
        .width(Length::Fixed(sizing::ROOM_CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rooms_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }

    #[test]
    fn check_availability_passes_the_room_through() {
        let event = update(Message::CheckAvailability(room::MAJORS_SUITE));
        let Event::CheckAvailability(picked) = event;
        assert_eq!(picked.id(), room::MAJORS_SUITE.id());
    }
}
