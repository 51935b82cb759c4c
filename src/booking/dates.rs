// SPDX-License-Identifier: MPL-2.0
//! Guest stay dates.
//!
//! The reservation server exchanges dates as `YYYY-MM-DD` strings; this module
//! owns that format and the start/end ordering invariant.

use chrono::NaiveDate;

/// Wire format shared by request form fields and response payloads.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub const DATE_INVALID_KEY: &str = "availability-date-error-invalid";
pub const DATE_ORDER_KEY: &str = "availability-date-error-order";

/// An inclusive arrival/departure date pair, guaranteed ordered.
///
/// Single-night stays where both dates coincide are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayRange {
    /// Creates a stay range, rejecting a departure before the arrival.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if end < start {
            return None;
        }
        Some(Self { start, end })
    }

    /// Parses user input in wire format into a validated range.
    ///
    /// Returns the i18n key describing the first problem found, so forms can
    /// surface it next to the offending input.
    pub fn parse(start: &str, end: &str) -> Result<Self, &'static str> {
        let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)
            .map_err(|_| DATE_INVALID_KEY)?;
        let end =
            NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).map_err(|_| DATE_INVALID_KEY)?;
        Self::new(start, end).ok_or(DATE_ORDER_KEY)
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Arrival date in wire format.
    #[must_use]
    pub fn start_string(&self) -> String {
        self.start.format(DATE_FORMAT).to_string()
    }

    /// Departure date in wire format.
    #[must_use]
    pub fn end_string(&self) -> String {
        self.end.format(DATE_FORMAT).to_string()
    }

    /// Number of nights between arrival and departure.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
