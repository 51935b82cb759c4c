// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop and dialog surfaces.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn backdrop_background() -> Color {
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..BLACK
    }
}

fn card_border(theme: &Theme) -> Color {
    let base = theme.extended_palette().background.strong.color;
    Color {
        a: opacity::OVERLAY_MEDIUM,
        ..base
    }
}

/// Dimmed backdrop behind a modal dialog, covering the whole window.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(backdrop_background())),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Raised dialog surface floating above the backdrop.
#[must_use]
pub fn dialog_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: card_border(theme),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
