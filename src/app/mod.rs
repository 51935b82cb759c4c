// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens, the
//! availability dialog, and persisted preferences.
//!
//! The `App` struct wires together the domains (rooms, availability checks,
//! localization, settings) and translates messages into side effects like
//! config persistence or HTTP requests. This file intentionally keeps policy
//! decisions (window sizing, server resolution order, localization switching)
//! close to the main update loop so it is easy to audit user-facing behavior.

mod message;
mod persistence;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::availability;
use crate::ui::notifications;
use crate::ui::settings::State as SettingsState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    settings: SettingsState,
    /// Availability dialog, present while one is on screen.
    availability: Option<availability::State>,
    theme_mode: ThemeMode,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    /// Base URL of the reservation server, flags > config > default.
    server_url: String,
    /// CSRF token forwarded with every availability request.
    csrf_token: String,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("dialog_open", &self.availability.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
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

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
            screen: Screen::Rooms,
            settings: SettingsState::new(config::DEFAULT_SERVER_URL),
            availability: None,
            theme_mode: ThemeMode::System,
            menu_open: false,
            server_url: config::DEFAULT_SERVER_URL.to_string(),
            csrf_token: String::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state from `Flags` received from the launcher
    /// and the persisted config.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_load_failed) = match config::load() {
            Ok(config) => (config, false),
            Err(error) => {
                eprintln!("Failed to load config: {:?}", error);
                (config::Config::default(), true)
            }
        };
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);

        let server_url = flags
            .server_url
            .or(config.server_url)
            .unwrap_or_else(|| config::DEFAULT_SERVER_URL.to_string());
        let csrf_token = flags.csrf_token.or(config.csrf_token).unwrap_or_default();

        let mut app = App {
            i18n,
            theme_mode: config.theme_mode,
            settings: SettingsState::new(&server_url),
            server_url,
            csrf_token,
            ..Self::default()
        };

        if config_load_failed {
            app.notifications.push(notifications::Notification::warning(
                "notification-config-load-error",
            ));
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Rooms => app_name,
            Screen::Settings => format!("{} - {app_name}", self.i18n.tr("settings-title")),
            Screen::About => format!("{} - {app_name}", self.i18n.tr("about-title")),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.availability.is_some());
        let checking = self
            .availability
            .as_ref()
            .is_some_and(availability::State::is_checking);
        let tick_sub = subscription::create_tick_subscription(
            checking,
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            settings: &mut self.settings,
            availability: &mut self.availability,
            theme_mode: &mut self.theme_mode,
            menu_open: &mut self.menu_open,
            server_url: &mut self.server_url,
            csrf_token: &self.csrf_token,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Rooms(rooms_message) => update::handle_rooms_message(&mut ctx, rooms_message),
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, settings_message)
            }
            Message::About(about_message) => update::handle_about_message(&mut ctx, &about_message),
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Availability(availability_message) => {
                update::handle_availability_message(&mut ctx, availability_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Advance the dialog spinner and the toast auto-dismiss clocks.
                if let Some(dialog) = self.availability.as_mut() {
                    let _ = dialog.update(availability::Message::Tick);
                }
                self.notifications.tick();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            settings: &self.settings,
            availability: self.availability.as_ref(),
            notifications: &self.notifications,
            theme_mode: self.theme_mode,
            menu_open: self.menu_open,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::AvailabilityResponse;
    use crate::booking::room;
    use crate::error::{Error, HttpError};
    use crate::ui::availability::Stage;
    use crate::ui::navbar;
    use crate::ui::notifications::Notification;
    use crate::ui::rooms;
    use crate::ui::settings;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    /// Drives a dialog from open to the in-flight stage.
    fn checking_app() -> App {
        let mut app = App::default();
        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::GENERALS_QUARTERS,
        )));
        let _ = app.update(Message::Availability(availability::Message::DialogShown));
        let _ = app.update(Message::Availability(
            availability::Message::StartInputChanged("2030-05-10".into()),
        ));
        let _ = app.update(Message::Availability(
            availability::Message::EndInputChanged("2030-05-14".into()),
        ));
        let _ = app.update(Message::Availability(availability::Message::Confirm));
        app
    }

    fn ok_response() -> AvailabilityResponse {
        AvailabilityResponse {
            ok: true,
            message: "Room available!".into(),
            room_id: "1".into(),
            start_date: "2030-05-10".into(),
            end_date: "2030-05-14".into(),
        }
    }

    #[test]
    fn new_starts_on_rooms_screen() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Rooms);
            assert!(app.availability.is_none());
            assert_eq!(app.server_url, config::DEFAULT_SERVER_URL);
        });
    }

    #[test]
    fn flags_override_config_defaults() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                server_url: Some("http://inn.example:9090".into()),
                csrf_token: Some("tok-cli".into()),
                ..Flags::default()
            };
            let (app, _task) = App::new(flags);
            assert_eq!(app.server_url, "http://inn.example:9090");
            assert_eq!(app.csrf_token, "tok-cli");
        });
    }

    #[test]
    fn config_server_url_used_when_no_flag() {
        with_temp_config_dir(|config_root| {
            let config = config::Config {
                server_url: Some("http://saved.example".to_string()),
                ..config::Config::default()
            };
            let path = config_root.join("IcedConcierge").join("settings.toml");
            config::save_to_path(&config, &path).expect("failed to save config");

            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.server_url, "http://saved.example");
        });
    }

    #[test]
    fn check_availability_opens_dialog_with_locked_inputs() {
        let mut app = App::default();

        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::GENERALS_QUARTERS,
        )));

        let dialog = app.availability.as_ref().expect("dialog should be open");
        assert_eq!(dialog.room().id(), room::GENERALS_QUARTERS.id());
        assert!(!dialog.inputs_enabled());

        // The DialogShown task goes through the runtime in production; feed
        // it manually here.
        let _ = app.update(Message::Availability(availability::Message::DialogShown));
        assert!(app
            .availability
            .as_ref()
            .is_some_and(availability::State::inputs_enabled));
    }

    #[test]
    fn second_check_request_is_ignored_while_dialog_open() {
        let mut app = App::default();
        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::GENERALS_QUARTERS,
        )));

        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::MAJORS_SUITE,
        )));

        let dialog = app.availability.as_ref().expect("dialog should be open");
        assert_eq!(dialog.room().id(), room::GENERALS_QUARTERS.id());
    }

    #[test]
    fn confirming_empty_dates_cancels_the_dialog() {
        let mut app = App::default();
        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::MAJORS_SUITE,
        )));
        let _ = app.update(Message::Availability(availability::Message::DialogShown));

        let _ = app.update(Message::Availability(availability::Message::Confirm));

        assert!(app.availability.is_none());
    }

    #[test]
    fn close_requested_dismisses_the_form() {
        let mut app = App::default();
        let _ = app.update(Message::Rooms(rooms::Message::CheckAvailability(
            room::GENERALS_QUARTERS,
        )));
        let _ = app.update(Message::Availability(availability::Message::DialogShown));

        let _ = app.update(Message::Availability(availability::Message::CloseRequested));

        assert!(app.availability.is_none());
    }

    #[test]
    fn close_requested_is_ignored_mid_check() {
        let mut app = checking_app();

        let _ = app.update(Message::Availability(availability::Message::CloseRequested));

        assert!(app
            .availability
            .as_ref()
            .is_some_and(availability::State::is_checking));
    }

    #[test]
    fn available_response_moves_dialog_to_available() {
        let mut app = checking_app();

        let _ = app.update(Message::Availability(
            availability::Message::ResultReceived(Ok(ok_response())),
        ));

        let dialog = app.availability.as_ref().expect("dialog stays open");
        assert!(matches!(dialog.stage(), Stage::Available { .. }));
    }

    #[test]
    fn transport_error_moves_dialog_to_failed() {
        let mut app = checking_app();

        let _ = app.update(Message::Availability(
            availability::Message::ResultReceived(Err(Error::Http(HttpError::Timeout))),
        ));

        let dialog = app.availability.as_ref().expect("dialog stays open");
        assert!(matches!(dialog.stage(), Stage::Failed { .. }));
    }

    #[test]
    fn close_after_result_tears_down_the_dialog() {
        let mut app = checking_app();
        let _ = app.update(Message::Availability(
            availability::Message::ResultReceived(Ok(ok_response())),
        ));

        let _ = app.update(Message::Availability(availability::Message::CloseRequested));

        assert!(app.availability.is_none());
    }

    #[test]
    fn copy_booking_link_pushes_a_toast() {
        let mut app = checking_app();
        let _ = app.update(Message::Availability(
            availability::Message::ResultReceived(Ok(ok_response())),
        ));

        let _ = app.update(Message::Availability(
            availability::Message::CopyBookingLink,
        ));

        assert!(app.notifications.has_notifications());
    }

    #[test]
    fn language_selected_updates_config_file() {
        with_temp_config_dir(|config_root| {
            let mut app = App::default();
            let target_locale: unic_langid::LanguageIdentifier = app
                .i18n
                .available_locales
                .iter()
                .find(|locale| locale.to_string() == "fr")
                .cloned()
                .unwrap_or_else(|| app.i18n.current_locale().clone());

            let _ = app.update(Message::Settings(settings::Message::LanguageSelected(
                target_locale.clone(),
            )));

            let config_path = config_root.join("IcedConcierge").join("settings.toml");
            assert!(config_path.exists());
            let contents = fs::read_to_string(config_path).expect("config should be readable");
            assert!(contents.contains(&target_locale.to_string()));
        });
    }

    #[test]
    fn theme_mode_selection_is_applied() {
        with_temp_config_dir(|_| {
            let mut app = App::default();

            let _ = app.update(Message::Settings(settings::Message::ThemeModeSelected(
                ThemeMode::Dark,
            )));

            assert_eq!(app.theme_mode, ThemeMode::Dark);
            assert!(matches!(app.theme(), Theme::Dark));
        });
    }

    #[test]
    fn server_url_commits_when_leaving_settings() {
        with_temp_config_dir(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::ServerUrlChanged(
                "http://inn.example:8080".into(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Rooms));

            assert_eq!(app.screen, Screen::Rooms);
            assert_eq!(app.server_url, "http://inn.example:8080");
        });
    }

    #[test]
    fn invalid_server_url_prevents_leaving_settings() {
        with_temp_config_dir(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::ServerUrlChanged(
                "ftp://inn.example".into(),
            )));

            let _ = app.update(Message::SwitchScreen(Screen::Rooms));

            assert_eq!(app.screen, Screen::Settings);
            assert_eq!(
                app.settings.server_url_error(),
                Some(settings::SERVER_URL_INVALID_KEY)
            );
        });
    }

    #[test]
    fn back_button_adopts_the_edited_url() {
        with_temp_config_dir(|_| {
            let mut app = App {
                screen: Screen::Settings,
                ..App::default()
            };
            let _ = app.update(Message::Settings(settings::Message::ServerUrlChanged(
                "https://fort-smythe.example".into(),
            )));

            let _ = app.update(Message::Settings(settings::Message::BackToRooms));

            assert_eq!(app.screen, Screen::Rooms);
            assert_eq!(app.server_url, "https://fort-smythe.example");
        });
    }

    #[test]
    fn navbar_opens_screens_and_closes_menu() {
        let mut app = App::default();

        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Navbar(navbar::Message::OpenSettings));
        assert_eq!(app.screen, Screen::Settings);
        assert!(!app.menu_open);
    }

    #[test]
    fn title_reflects_screen() {
        let mut app = App::default();
        assert_eq!(app.title(), "Iced Concierge");

        app.screen = Screen::Settings;
        let settings_title = app.title();
        assert!(settings_title.ends_with("Iced Concierge"));
        assert_ne!(settings_title, "Iced Concierge");
    }

    #[test]
    fn tick_dismisses_expired_toasts() {
        let mut app = App::default();
        app.notifications.push(
            Notification::success("notification-booking-link-copied")
                .auto_dismiss(Duration::ZERO),
        );
        assert!(app.notifications.has_notifications());

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn view_renders_on_every_screen() {
        let mut app = App::default();
        let _ = app.view();

        app.screen = Screen::Settings;
        let _ = app.view();

        app.screen = Screen::About;
        let _ = app.view();
    }

    #[test]
    fn view_renders_with_dialog_and_toasts() {
        let mut app = checking_app();
        app.notifications
            .push(Notification::info("notification-booking-link-copied"));

        let _ = app.view();
    }
}
