// SPDX-License-Identifier: MPL-2.0
//! Month-grid date range picker for the availability dialog.
//!
//! The picker shows one month at a time. The first click selects the
//! check-in date, the second click the check-out date. Clicking a day
//! before the current start restarts the selection from that day.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use chrono::{Datelike, Days, Months, NaiveDate};
use iced::widget::{button, Button, Column, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Weekday header keys, Monday first.
const WEEKDAY_KEYS: [&str; 7] = [
    "weekday-mon",
    "weekday-tue",
    "weekday-wed",
    "weekday-thu",
    "weekday-fri",
    "weekday-sat",
    "weekday-sun",
];

/// Rows in the day grid. Six rows cover every month layout.
const GRID_ROWS: u64 = 6;

/// Calendar picker state.
#[derive(Debug, Clone)]
pub struct State {
    /// Earliest selectable day (usually today).
    min_date: NaiveDate,
    /// First day of the month currently shown.
    visible: NaiveDate,
    /// Selected check-in date.
    start: Option<NaiveDate>,
    /// Selected check-out date.
    end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    PreviousMonth,
    NextMonth,
    DayPicked(NaiveDate),
}

/// Events the picker reports back to the availability dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The selection changed; `end` is `None` while the range is half-open.
    RangeChanged {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
}

/// Context needed to render the picker.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Creates a picker starting at the month of `min_date`.
    #[must_use]
    pub fn new(min_date: NaiveDate) -> Self {
        Self {
            min_date,
            visible: first_of_month(min_date),
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    #[must_use]
    pub fn visible_month(&self) -> NaiveDate {
        self.visible
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::PreviousMonth => {
                let floor = first_of_month(self.min_date);
                if let Some(previous) = self.visible.checked_sub_months(Months::new(1)) {
                    self.visible = previous.max(floor);
                }
                Event::None
            }
            Message::NextMonth => {
                if let Some(next) = self.visible.checked_add_months(Months::new(1)) {
                    self.visible = next;
                }
                Event::None
            }
            Message::DayPicked(date) => self.pick(date),
        }
    }

    fn pick(&mut self, date: NaiveDate) -> Event {
        if date < self.min_date {
            return Event::None;
        }

        match (self.start, self.end) {
            // No selection yet, or a complete range: start over
            (None, _) | (Some(_), Some(_)) => {
                self.start = Some(date);
                self.end = None;
            }
            (Some(start), None) => {
                if date < start {
                    // Picking backwards restarts the range from the new day
                    self.start = Some(date);
                } else {
                    self.end = Some(date);
                }
            }
        }

        match self.start {
            Some(start) => Event::RangeChanged {
                start,
                end: self.end,
            },
            None => Event::None,
        }
    }

    /// Renders the month header, weekday labels, and day grid.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let month_label = format!(
            "{} {}",
            ctx.i18n.tr(&format!("month-{}", self.visible.month())),
            self.visible.year()
        );

        let at_floor = self.visible <= first_of_month(self.min_date);
        let previous = button(icons::themed(icons::chevron_left(), sizing::ICON_SM))
            .on_press_maybe((!at_floor).then_some(Message::PreviousMonth))
            .padding(spacing::XXS)
            .style(nav_button_style);
        let next = button(icons::themed(icons::chevron_right(), sizing::ICON_SM))
            .on_press(Message::NextMonth)
            .padding(spacing::XXS)
            .style(nav_button_style);

        let header = Row::new()
            .align_y(alignment::Vertical::Center)
            .push(previous)
            .push(
                Text::new(month_label)
                    .size(typography::BODY_LG)
                    .width(Length::Fill)
                    .center(),
            )
            .push(next);

        let mut weekdays = Row::new().spacing(spacing::XXS);
        for key in WEEKDAY_KEYS {
            weekdays = weekdays.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .width(Length::Fixed(sizing::CALENDAR_CELL))
                    .center()
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().background.strong.color),
                    }),
            );
        }

        let mut grid = Column::new().spacing(spacing::XXS);
        let grid_start = self.grid_start();
        for row in 0..GRID_ROWS {
            let mut week = Row::new().spacing(spacing::XXS);
            for col in 0..7u64 {
                let day = grid_start
                    .checked_add_days(Days::new(row * 7 + col))
                    .unwrap_or(grid_start);
                week = week.push(self.day_cell(day));
            }
            grid = grid.push(week);
        }

        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(weekdays)
            .push(grid)
            .into()
    }

    /// First cell of the grid: the Monday on or before the 1st.
    fn grid_start(&self) -> NaiveDate {
        let offset = u64::from(self.visible.weekday().num_days_from_monday());
        self.visible
            .checked_sub_days(Days::new(offset))
            .unwrap_or(self.visible)
    }

    fn day_cell(&self, day: NaiveDate) -> Button<'_, Message> {
        let in_month = day.month() == self.visible.month() && day.year() == self.visible.year();
        let selectable = in_month && day >= self.min_date;
        let is_endpoint = Some(day) == self.start || Some(day) == self.end;
        let in_range = match (self.start, self.end) {
            (Some(start), Some(end)) => start < day && day < end,
            _ => false,
        };

        let label = Text::new(day.day().to_string())
            .size(typography::BODY)
            .width(Length::Fill)
            .height(Length::Fill)
            .center();

        let style = move |theme: &Theme, status: button::Status| {
            if is_endpoint {
                endpoint_style(theme, status)
            } else if in_range {
                in_range_style(theme, status)
            } else {
                plain_day_style(theme, status, selectable)
            }
        };

        button(label)
            .width(Length::Fixed(sizing::CALENDAR_CELL))
            .height(Length::Fixed(sizing::CALENDAR_CELL))
            .padding(0)
            .on_press_maybe(selectable.then_some(Message::DayPicked(day)))
            .style(style)
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Style for the selected check-in and check-out days.
fn endpoint_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for days strictly between the two endpoints.
fn in_range_style(theme: &Theme, _status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let background = if is_light {
        palette::PRIMARY_100
    } else {
        palette::PRIMARY_800
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for ordinary day cells; muted when the day cannot be picked.
fn plain_day_style(theme: &Theme, status: button::Status, selectable: bool) -> button::Style {
    let text_color = if selectable {
        theme.palette().text
    } else {
        Color {
            a: opacity::OVERLAY_SUBTLE + 0.1,
            ..theme.palette().text
        }
    };

    let background = match status {
        button::Status::Hovered if selectable => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the month navigation chevrons.
fn nav_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
