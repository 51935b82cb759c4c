// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` for optimal performance. A single neutral set
//! serves both light and dark themes: vector icons are tinted at draw time
//! through [`svg::Style`], so no per-theme variants are needed.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let menu_button = button(icons::sized(icons::hamburger(), sizing::ICON_MD));
//! let success_mark = icons::tinted(icons::checkmark(), sizing::ICON_MD, palette::SUCCESS_500);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `clipboard` not `copy_booking_link`).

use iced::widget::svg::{self, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> svg::Handle {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE
                .get_or_init(|| svg::Handle::from_memory(DATA))
                .clone()
        }
    };
}

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(
    hamburger,
    "hamburger.svg",
    "Hamburger menu icon: three horizontal lines."
);
define_icon!(
    chevron_left,
    "chevron_left.svg",
    "Single chevron left icon: chevron pointing left (<), used for previous month."
);
define_icon!(
    chevron_right,
    "chevron_right.svg",
    "Single chevron right icon: chevron pointing right (>), used for next month."
);

// =============================================================================
// Menu & Section Icons
// =============================================================================

define_icon!(bed, "bed.svg", "Bed icon: guest room shape.");
define_icon!(cog, "cog.svg", "Cog icon: gear/settings.");
define_icon!(info, "info.svg", "Info icon: letter 'i' in circle.");
define_icon!(
    globe,
    "globe.svg",
    "Globe icon: world/international (for language settings)."
);

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(
    checkmark,
    "checkmark.svg",
    "Checkmark icon: check/tick mark for success."
);
define_icon!(cross, "cross.svg", "Cross icon: X mark shape.");
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: triangle with exclamation mark."
);

// =============================================================================
// Booking Icons
// =============================================================================

define_icon!(
    calendar,
    "calendar.svg",
    "Calendar icon: month grid with binding rings."
);
define_icon!(
    clipboard,
    "clipboard.svg",
    "Clipboard icon: board with clip (used for copy link)."
);

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon widget with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized<'a>(handle: svg::Handle, size: f32) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
}

/// Creates an icon widget tinted with a fixed color, overriding the theme.
pub fn tinted<'a>(handle: svg::Handle, size: f32, color: Color) -> Svg<'a> {
    sized(handle, size).style(move |_theme, _status| svg::Style { color: Some(color) })
}

/// Creates an icon widget tinted with the theme's text color.
pub fn themed<'a>(handle: svg::Handle, size: f32) -> Svg<'a> {
    sized(handle, size).style(|theme: &iced::Theme, _status| svg::Style {
        color: Some(theme.palette().text),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load_successfully() {
        // These calls verify that all include_bytes! paths are valid
        let _ = hamburger();
        let _ = chevron_left();
        let _ = chevron_right();
        let _ = bed();
        let _ = cog();
        let _ = info();
        let _ = globe();
        let _ = checkmark();
        let _ = cross();
        let _ = warning();
        let _ = calendar();
        let _ = clipboard();
    }

    #[test]
    fn handles_are_cached() {
        // Repeated calls must hand out the same underlying handle
        assert_eq!(bed().id(), bed().id());
        assert_eq!(checkmark().id(), checkmark().id());
    }

    #[test]
    fn sized_helper_works() {
        let icon = sized(calendar(), 32.0);
        // Just verify it compiles and returns an Svg
        let _ = icon;
    }

    #[test]
    fn tinted_helper_works() {
        let icon = tinted(cross(), 16.0, Color::WHITE);
        let _ = icon;
    }
}
