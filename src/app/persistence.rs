// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk: theme mode, the
//! reservation server URL, and language selection.

use super::Message;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, Notification};
use crate::ui::theming::ThemeMode;
use iced::Task;
use unic_langid::LanguageIdentifier;

/// Persists the current preferences to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling the function directly rather than through tasks.
pub fn persist_preferences(
    theme_mode: ThemeMode,
    server_url: &str,
    notifications: &mut Manager,
) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.theme_mode = theme_mode;
    cfg.server_url = Some(server_url.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
        notifications.push(Notification::warning("notification-config-save-error"));
    }

    Task::none()
}

/// Applies the newly selected locale and persists it to config.
pub fn apply_language_change(
    i18n: &mut I18n,
    locale: LanguageIdentifier,
    notifications: &mut Manager,
) -> Task<Message> {
    i18n.set_locale(locale.clone());

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(locale.to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
        notifications.push(Notification::warning("notification-config-save-error"));
    }

    Task::none()
}
