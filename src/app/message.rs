// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::about;
use crate::ui::availability;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::rooms;
use crate::ui::settings;
use std::time::Instant;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Rooms(rooms::Message),
    SwitchScreen(Screen),
    Settings(settings::Message),
    About(about::Message),
    Navbar(navbar::Message),
    Availability(availability::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for toasts and the dialog spinner
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional reservation server base URL override.
    pub server_url: Option<String>,
    /// Optional CSRF token forwarded with every availability request.
    pub csrf_token: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
}
