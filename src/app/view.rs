// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the current screen
//! based on application state, layering the availability dialog and toast
//! notifications on top when present.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::availability;
use crate::ui::dialog;
use crate::ui::navbar::{self, Section, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::rooms::{self, ViewContext as RoomsViewContext};
use crate::ui::settings::{self, State as SettingsState, ViewContext as SettingsViewContext};
use crate::ui::theming::ThemeMode;
use iced::widget::{Column, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub settings: &'a SettingsState,
    pub availability: Option<&'a availability::State>,
    pub notifications: &'a Manager,
    pub theme_mode: ThemeMode,
    pub menu_open: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Rooms => view_rooms(ctx.i18n),
        Screen::Settings => view_settings(ctx.settings, ctx.i18n, ctx.theme_mode),
        Screen::About => view_about(ctx.i18n),
    };

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        menu_open: ctx.menu_open,
        active: active_section(ctx.screen),
    })
    .map(Message::Navbar);

    let base: Element<'_, Message> = Column::new()
        .push(navbar_view)
        .push(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

    // Dialog above the screen, toasts above everything.
    let content = match ctx.availability {
        Some(dialog_state) => dialog::modal(
            base,
            dialog_state
                .view(availability::ViewContext { i18n: ctx.i18n })
                .map(Message::Availability),
            dialog_state.backdrop_message().map(Message::Availability),
        ),
        None => base,
    };

    if ctx.notifications.has_notifications() {
        Stack::new()
            .push(content)
            .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        content
    }
}

fn active_section(screen: Screen) -> Section {
    match screen {
        Screen::Rooms => Section::Rooms,
        Screen::Settings => Section::Settings,
        Screen::About => Section::About,
    }
}

fn view_rooms(i18n: &I18n) -> Element<'_, Message> {
    rooms::view(RoomsViewContext { i18n }).map(Message::Rooms)
}

fn view_settings<'a>(
    settings: &'a SettingsState,
    i18n: &'a I18n,
    theme_mode: ThemeMode,
) -> Element<'a, Message> {
    settings::view(SettingsViewContext {
        i18n,
        state: settings,
        theme_mode,
    })
    .map(Message::Settings)
}

fn view_about(i18n: &I18n) -> Element<'_, Message> {
    about::view(AboutViewContext { i18n }).map(Message::About)
}
