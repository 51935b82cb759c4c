// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers that `App::update`
//! dispatches to, one per screen or overlay component.

use super::{notifications, persistence, Message, Screen};
use crate::api;
use crate::api::types::AvailabilityRequest;
use crate::booking::room::Room;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, Event as AboutEvent};
use crate::ui::availability::{self, Event as AvailabilityEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::rooms::{self, Event as RoomsEvent};
use crate::ui::settings::{Event as SettingsEvent, State as SettingsState};
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub settings: &'a mut SettingsState,
    pub availability: &'a mut Option<availability::State>,
    pub theme_mode: &'a mut ThemeMode,
    pub menu_open: &'a mut bool,
    pub server_url: &'a mut String,
    pub csrf_token: &'a str,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles rooms screen messages.
pub fn handle_rooms_message(
    ctx: &mut UpdateContext<'_>,
    message: rooms::Message,
) -> Task<Message> {
    match rooms::update(message) {
        RoomsEvent::CheckAvailability(room) => open_availability_dialog(ctx, room),
    }
}

/// Opens the date-range dialog for the given room.
///
/// Only one dialog can be on screen at a time; requests arriving while one
/// is already open are ignored.
fn open_availability_dialog(ctx: &mut UpdateContext<'_>, room: Room) -> Task<Message> {
    if ctx.availability.is_some() {
        return Task::none();
    }

    *ctx.menu_open = false;
    let today = chrono::Local::now().date_naive();
    *ctx.availability = Some(availability::State::new(room, today, ctx.server_url.clone()));

    // Inputs stay locked until DialogShown makes it back through update, so
    // nothing can submit before the dialog is actually on screen.
    Task::done(Message::Availability(availability::Message::DialogShown))
}

/// Handles availability dialog messages.
pub fn handle_availability_message(
    ctx: &mut UpdateContext<'_>,
    message: availability::Message,
) -> Task<Message> {
    let Some(dialog) = ctx.availability.as_mut() else {
        return Task::none();
    };

    match dialog.update(message) {
        AvailabilityEvent::None => Task::none(),
        AvailabilityEvent::CheckRequested { room_id, stay } => {
            let request = AvailabilityRequest::new(room_id, &stay, ctx.csrf_token);
            Task::perform(
                api::client::check_availability(ctx.server_url.clone(), request),
                |result| Message::Availability(availability::Message::ResultReceived(result)),
            )
        }
        AvailabilityEvent::Cancelled | AvailabilityEvent::Closed => {
            *ctx.availability = None;
            Task::none()
        }
        AvailabilityEvent::CopyBookingLink { url } => {
            ctx.notifications.push(notifications::Notification::success(
                "notification-booking-link-copied",
            ));
            iced::clipboard::write(url)
        }
    }
}

/// Handles screen transitions.
///
/// Leaving Settings first commits the server URL field; an invalid value
/// keeps the user on Settings so the error stays visible.
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    if matches!(ctx.screen, Screen::Settings) && !matches!(target, Screen::Settings) {
        return match ctx.settings.ensure_server_url_committed() {
            Ok(Some(url)) => {
                *ctx.server_url = url;
                *ctx.screen = target;
                persistence::persist_preferences(*ctx.theme_mode, ctx.server_url, ctx.notifications)
            }
            Ok(None) => {
                *ctx.screen = target;
                Task::none()
            }
            Err(()) => {
                *ctx.screen = Screen::Settings;
                Task::none()
            }
        };
    }

    *ctx.screen = target;
    Task::none()
}

/// Handles settings component messages.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: crate::ui::settings::Message,
) -> Task<Message> {
    match ctx.settings.update(message) {
        SettingsEvent::None => Task::none(),
        SettingsEvent::BackToRooms => {
            *ctx.screen = Screen::Rooms;
            Task::none()
        }
        SettingsEvent::BackToRoomsWithServerUrl(url) => {
            *ctx.server_url = url;
            *ctx.screen = Screen::Rooms;
            persistence::persist_preferences(*ctx.theme_mode, ctx.server_url, ctx.notifications)
        }
        SettingsEvent::LanguageSelected(locale) => {
            persistence::apply_language_change(ctx.i18n, locale, ctx.notifications)
        }
        SettingsEvent::ThemeModeSelected(mode) => {
            *ctx.theme_mode = mode;
            persistence::persist_preferences(mode, ctx.server_url, ctx.notifications)
        }
        SettingsEvent::ServerUrlCommitted(url) => {
            *ctx.server_url = url;
            persistence::persist_preferences(*ctx.theme_mode, ctx.server_url, ctx.notifications)
        }
    }
}

/// Handles navbar component messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::OpenRooms => handle_screen_switch(ctx, Screen::Rooms),
        NavbarEvent::OpenSettings => handle_screen_switch(ctx, Screen::Settings),
        NavbarEvent::OpenAbout => handle_screen_switch(ctx, Screen::About),
    }
}

/// Handles about screen messages.
pub fn handle_about_message(ctx: &mut UpdateContext<'_>, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        AboutEvent::None => Task::none(),
        AboutEvent::BackToRooms => {
            *ctx.screen = Screen::Rooms;
            Task::none()
        }
    }
}
