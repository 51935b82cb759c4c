// SPDX-License-Identifier: MPL-2.0
//! Wire types for the availability endpoint.

use crate::booking::{RoomId, StayRange};
use serde::{Deserialize, Serialize};

/// Path of the availability endpoint, relative to the server base URL.
pub const AVAILABILITY_ENDPOINT: &str = "/search-availability-json";

/// Form payload for an availability check.
///
/// Serializes to `application/x-www-form-urlencoded`. Every value is a string
/// on the wire, including the room id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityRequest {
    pub start_date: String,
    pub end_date: String,
    pub csrf_token: String,
    pub room_id: String,
}

impl AvailabilityRequest {
    /// Assembles the payload from domain types plus the session's CSRF token.
    #[must_use]
    pub fn new(room_id: RoomId, stay: &StayRange, csrf_token: impl Into<String>) -> Self {
        Self {
            start_date: stay.start_string(),
            end_date: stay.end_string(),
            csrf_token: csrf_token.into(),
            room_id: room_id.to_string(),
        }
    }
}

/// JSON body returned by the availability endpoint.
///
/// Error replies carry only `ok` and `message`; the remaining fields default
/// to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AvailabilityResponse {
    pub ok: bool,
    #[serde(default)]
    pub message: String,
    /// Room id echoed back as a decimal string.
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
}

impl AvailabilityResponse {
    /// Builds the reservation URL for a confirmed availability.
    ///
    /// Dates and room id come from the server's echo rather than local state,
    /// so the link always reflects what the server actually checked.
    #[must_use]
    pub fn booking_url(&self, server_url: &str) -> String {
        format!(
            "{}/book-room?id={}&start_date={}&end_date={}",
            server_url.trim_end_matches('/'),
            self.room_id,
            self.start_date,
            self.end_date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::room;

    fn sample_stay() -> StayRange {
        StayRange::parse("2026-09-01", "2026-09-04").expect("valid range")
    }

    #[test]
    fn request_carries_wire_strings() {
        let request =
            AvailabilityRequest::new(room::MAJORS_SUITE.id(), &sample_stay(), "tok-abc");

        assert_eq!(request.start_date, "2026-09-01");
        assert_eq!(request.end_date, "2026-09-04");
        assert_eq!(request.room_id, "2");
        assert_eq!(request.csrf_token, "tok-abc");
    }

    #[test]
    fn response_deserializes_full_body() {
        let body = r#"{
            "ok": true,
            "message": "",
            "room_id": "1",
            "start_date": "2026-09-01",
            "end_date": "2026-09-04"
        }"#;

        let response: AvailabilityResponse = serde_json::from_str(body).expect("valid body");
        assert!(response.ok);
        assert_eq!(response.room_id, "1");
        assert_eq!(response.start_date, "2026-09-01");
    }

    #[test]
    fn response_tolerates_error_body_without_echo_fields() {
        let body = r#"{"ok": false, "message": "Error connecting to database"}"#;

        let response: AvailabilityResponse = serde_json::from_str(body).expect("valid body");
        assert!(!response.ok);
        assert_eq!(response.message, "Error connecting to database");
        assert!(response.room_id.is_empty());
        assert!(response.start_date.is_empty());
        assert!(response.end_date.is_empty());
    }

    #[test]
    fn booking_url_uses_server_echo() {
        let response = AvailabilityResponse {
            ok: true,
            message: String::new(),
            room_id: "1".to_string(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-09-04".to_string(),
        };

        assert_eq!(
            response.booking_url("http://localhost:8080"),
            "http://localhost:8080/book-room?id=1&start_date=2026-09-01&end_date=2026-09-04"
        );
    }

    #[test]
    fn booking_url_tolerates_trailing_slash_in_base() {
        let response = AvailabilityResponse {
            ok: true,
            message: String::new(),
            room_id: "2".to_string(),
            start_date: "2026-09-01".to_string(),
            end_date: "2026-09-02".to_string(),
        };

        assert_eq!(
            response.booking_url("http://localhost:8080/"),
            "http://localhost:8080/book-room?id=2&start_date=2026-09-01&end_date=2026-09-02"
        );
    }
}
