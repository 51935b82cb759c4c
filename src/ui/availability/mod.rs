// SPDX-License-Identifier: MPL-2.0
//! Room availability dialog.
//!
//! Clicking a room's check button opens this modal. The guest picks a stay
//! range (calendar or typed dates), submits, and the dialog walks through
//! the stages: form, in-flight spinner, then either a success card with the
//! booking link or an error card.
//!
//! Submitting with either date left empty closes the dialog without a
//! request; an unparseable or reversed range keeps the form open with an
//! inline error instead.

pub mod picker;

use crate::api::types::AvailabilityResponse;
use crate::booking::dates::{StayRange, DATE_FORMAT};
use crate::booking::room::{Room, RoomId};
use crate::error::{Error, HttpError};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::dialog::{Dialog, Kind};
use crate::ui::icons;
use crate::ui::widgets::AnimatedSpinner;
use chrono::NaiveDate;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};
use std::f32::consts::TAU;

/// Spinner rotation advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.1;

/// Where the dialog currently is in the check flow.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    /// The date form is open.
    PickingDates,
    /// A request is in flight; the dialog cannot be dismissed.
    Checking,
    /// The server confirmed availability.
    Available {
        response: AvailabilityResponse,
        booking_url: String,
    },
    /// The server answered, but the room is taken.
    Unavailable { server_message: Option<String> },
    /// The request itself failed.
    Failed { error: HttpError },
}

/// Availability dialog state for one room.
#[derive(Debug, Clone)]
pub struct State {
    room: Room,
    stage: Stage,
    picker: picker::State,
    start_input: String,
    end_input: String,
    /// False until the dialog reports it is on screen.
    inputs_enabled: bool,
    date_error_key: Option<&'static str>,
    /// Base URL snapshot taken when the dialog opened.
    server_url: String,
    spinner_rotation: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The dialog finished opening; inputs become editable.
    DialogShown,
    StartInputChanged(String),
    EndInputChanged(String),
    Picker(picker::Message),
    Confirm,
    /// Backdrop click, Escape, or a close button.
    CloseRequested,
    Tick,
    ResultReceived(Result<AvailabilityResponse, Error>),
    CopyBookingLink,
}

/// Events the dialog reports back to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Submit a request for this room and stay.
    CheckRequested { room_id: RoomId, stay: StayRange },
    /// The guest backed out before any request was sent.
    Cancelled,
    /// The dialog is done showing a result.
    Closed,
    /// Put the booking link on the clipboard.
    CopyBookingLink { url: String },
}

/// Context needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Opens a fresh dialog for `room`.
    ///
    /// `today` floors the calendar; `server_url` is captured now so the
    /// booking link stays consistent even if settings change mid-flight.
    #[must_use]
    pub fn new(room: Room, today: NaiveDate, server_url: String) -> Self {
        Self {
            room,
            stage: Stage::PickingDates,
            picker: picker::State::new(today),
            start_input: String::new(),
            end_input: String::new(),
            inputs_enabled: false,
            date_error_key: None,
            server_url,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn room(&self) -> Room {
        self.room
    }

    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    #[must_use]
    pub fn is_checking(&self) -> bool {
        matches!(self.stage, Stage::Checking)
    }

    #[must_use]
    pub fn inputs_enabled(&self) -> bool {
        self.inputs_enabled
    }

    /// Message emitted when the backdrop is clicked, if dismissal is
    /// allowed in the current stage.
    #[must_use]
    pub fn backdrop_message(&self) -> Option<Message> {
        match self.stage {
            Stage::Checking => None,
            _ => Some(Message::CloseRequested),
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DialogShown => {
                self.inputs_enabled = true;
                Event::None
            }
            Message::StartInputChanged(value) => {
                self.start_input = value;
                self.date_error_key = None;
                Event::None
            }
            Message::EndInputChanged(value) => {
                self.end_input = value;
                self.date_error_key = None;
                Event::None
            }
            Message::Picker(picker_message) => {
                if let picker::Event::RangeChanged { start, end } =
                    self.picker.update(picker_message)
                {
                    self.start_input = start.format(DATE_FORMAT).to_string();
                    self.end_input = end
                        .map(|date| date.format(DATE_FORMAT).to_string())
                        .unwrap_or_default();
                    self.date_error_key = None;
                }
                Event::None
            }
            Message::Confirm => self.confirm(),
            Message::CloseRequested => match self.stage {
                Stage::PickingDates => Event::Cancelled,
                // An in-flight request cannot be abandoned
                Stage::Checking => Event::None,
                _ => Event::Closed,
            },
            Message::Tick => {
                if self.is_checking() {
                    self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
                }
                Event::None
            }
            Message::ResultReceived(result) => {
                self.apply_result(result);
                Event::None
            }
            Message::CopyBookingLink => match &self.stage {
                Stage::Available { booking_url, .. } => Event::CopyBookingLink {
                    url: booking_url.clone(),
                },
                _ => Event::None,
            },
        }
    }

    fn confirm(&mut self) -> Event {
        if !self.inputs_enabled || !matches!(self.stage, Stage::PickingDates) {
            return Event::None;
        }

        // Leaving either date empty means the guest changed their mind
        if self.start_input.trim().is_empty() || self.end_input.trim().is_empty() {
            return Event::Cancelled;
        }

        match StayRange::parse(&self.start_input, &self.end_input) {
            Ok(stay) => {
                self.date_error_key = None;
                self.spinner_rotation = 0.0;
                self.stage = Stage::Checking;
                Event::CheckRequested {
                    room_id: self.room.id(),
                    stay,
                }
            }
            Err(key) => {
                self.date_error_key = Some(key);
                Event::None
            }
        }
    }

    fn apply_result(&mut self, result: Result<AvailabilityResponse, Error>) {
        // Ignore replies that arrive after the stage moved on
        if !self.is_checking() {
            return;
        }

        self.stage = match result {
            Ok(response) if response.ok => {
                let booking_url = response.booking_url(&self.server_url);
                Stage::Available {
                    response,
                    booking_url,
                }
            }
            Ok(response) => {
                let message = response.message.trim().to_string();
                Stage::Unavailable {
                    server_message: (!message.is_empty()).then_some(message),
                }
            }
            Err(Error::Http(error)) => Stage::Failed { error },
            Err(other) => Stage::Failed {
                error: HttpError::Other(other.to_string()),
            },
        };
    }

    /// Renders the dialog card for the current stage.
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        match &self.stage {
            Stage::PickingDates => self.view_form(ctx),
            Stage::Checking => self.view_checking(ctx),
            Stage::Available { booking_url, .. } => self.view_available(ctx, booking_url),
            Stage::Unavailable { server_message } => {
                self.view_unavailable(ctx, server_message.as_deref())
            }
            Stage::Failed { error } => self.view_failed(ctx, error),
        }
    }

    fn view_form<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let calendar = self
            .picker
            .view(picker::ViewContext { i18n: ctx.i18n })
            .map(Message::Picker);

        let start_placeholder = ctx.i18n.tr("availability-start-placeholder");
        let end_placeholder = ctx.i18n.tr("availability-end-placeholder");

        let mut start_field = text_input(&start_placeholder, &self.start_input)
            .size(typography::BODY)
            .padding(spacing::XS);
        let mut end_field = text_input(&end_placeholder, &self.end_input)
            .size(typography::BODY)
            .padding(spacing::XS);

        if self.inputs_enabled {
            start_field = start_field
                .on_input(Message::StartInputChanged)
                .on_submit(Message::Confirm);
            end_field = end_field
                .on_input(Message::EndInputChanged)
                .on_submit(Message::Confirm);
        }

        let fields = Row::new()
            .spacing(spacing::SM)
            .push(start_field)
            .push(end_field);

        let mut form = Column::new()
            .spacing(spacing::MD)
            .push(Container::new(calendar).center_x(Length::Fill))
            .push(fields);

        if let Some(key) = self.date_error_key {
            form = form.push(
                text(ctx.i18n.tr(key))
                    .size(typography::BODY_SM)
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(palette::ERROR_500),
                    }),
            );
        }

        Dialog::new(Kind::Plain)
            .title(ctx.i18n.tr("availability-dialog-title"))
            .body(
                ctx.i18n
                    .tr_with_args("dialog-availability-text", &[("room", self.room.name())]),
            )
            .content(form)
            .confirm(ctx.i18n.tr("availability-confirm-button"), Message::Confirm)
            .cancel(
                ctx.i18n.tr("availability-cancel-button"),
                Message::CloseRequested,
            )
            .view()
    }

    fn view_checking<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let spinner = AnimatedSpinner::new(palette::PRIMARY_500, self.spinner_rotation)
            .with_size(sizing::ICON_XL)
            .into_element::<Message>();

        let status = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(spinner)
            .push(text(ctx.i18n.tr("availability-checking")).size(typography::BODY));

        Dialog::new(Kind::Plain)
            .title(ctx.i18n.tr("availability-dialog-title"))
            .content(Container::new(status).padding(spacing::MD))
            .view()
    }

    fn view_available<'a>(&'a self, ctx: ViewContext<'a>, booking_url: &'a str) -> Element<'a, Message> {
        let link_row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(booking_url)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().primary.strong.color),
                    })
                    .width(Length::Fill),
            )
            .push(
                button(icons::themed(icons::clipboard(), sizing::ICON_SM))
                    .on_press(Message::CopyBookingLink)
                    .padding(spacing::XXS)
                    .style(iced::widget::button::text),
            );

        Dialog::new(Kind::Success)
            .title(ctx.i18n.tr("availability-available-title"))
            .body(ctx.i18n.tr_with_args(
                "availability-stay-summary",
                &[
                    ("room", self.room.name()),
                    ("start", &self.start_input),
                    ("end", &self.end_input),
                ],
            ))
            .content(link_row)
            .confirm(
                ctx.i18n.tr("availability-book-button"),
                Message::CopyBookingLink,
            )
            .cancel(
                ctx.i18n.tr("availability-close-button"),
                Message::CloseRequested,
            )
            .view()
    }

    fn view_unavailable<'a>(
        &'a self,
        ctx: ViewContext<'a>,
        server_message: Option<&str>,
    ) -> Element<'a, Message> {
        let body = match server_message {
            Some(message) => message.to_string(),
            None => ctx.i18n.tr("availability-unavailable-message"),
        };

        Dialog::new(Kind::Error)
            .title(ctx.i18n.tr("availability-unavailable-title"))
            .body(body)
            .confirm(
                ctx.i18n.tr("availability-close-button"),
                Message::CloseRequested,
            )
            .view()
    }

    fn view_failed<'a>(&'a self, ctx: ViewContext<'a>, error: &'a HttpError) -> Element<'a, Message> {
        let body = match error {
            HttpError::Status(code) => ctx
                .i18n
                .tr_with_args(error.i18n_key(), &[("status", code.to_string().as_str())]),
            _ => ctx.i18n.tr(error.i18n_key()),
        };

        let mut dialog = Dialog::new(Kind::Error)
            .title(ctx.i18n.tr("error-availability-title"))
            .body(body);

        // The raw error text survives as footer detail when it adds anything
        // beyond the localized category.
        if let HttpError::InvalidBody(detail) | HttpError::Other(detail) = error {
            if !detail.is_empty() {
                dialog = dialog.content(
                    text(detail.as_str())
                        .size(typography::CAPTION)
                        .style(|theme: &Theme| iced::widget::text::Style {
                            color: Some(theme.extended_palette().background.strong.text),
                        }),
                );
            }
        }

        dialog
            .confirm(
                ctx.i18n.tr("availability-close-button"),
                Message::CloseRequested,
            )
            .view()
    }
}
