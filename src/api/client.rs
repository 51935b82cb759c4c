// SPDX-License-Identifier: MPL-2.0
//! Asynchronous client for the availability endpoint.

use super::types::{AvailabilityRequest, AvailabilityResponse, AVAILABILITY_ENDPOINT};
use crate::error::{Error, HttpError, Result};
use std::time::Duration;

const USER_AGENT: &str = concat!("IcedConcierge/", env!("CARGO_PKG_VERSION"));

/// Client-side cap so a stalled server cannot leave the flow hanging forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Joins the server base URL with the availability endpoint path.
#[must_use]
pub fn endpoint_url(server_url: &str) -> String {
    format!(
        "{}{}",
        server_url.trim_end_matches('/'),
        AVAILABILITY_ENDPOINT
    )
}

/// Posts an availability check and parses the JSON reply.
///
/// Takes owned arguments so the returned future can be handed to
/// `Task::perform` without borrowing application state.
///
/// # Errors
///
/// Returns `Error::Http` with a categorized [`HttpError`] when the server is
/// unreachable, answers with a non-success status, or returns a body that is
/// not the promised JSON shape.
pub async fn check_availability(
    server_url: String,
    request: AvailabilityRequest,
) -> Result<AvailabilityResponse> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| Error::Http(HttpError::Other(e.to_string())))?;

    let response = client
        .post(endpoint_url(&server_url))
        .form(&request)
        .send()
        .await
        .map_err(|e| Error::Http(classify(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Http(HttpError::Status(status.as_u16())));
    }

    response
        .json::<AvailabilityResponse>()
        .await
        .map_err(|e| Error::Http(HttpError::InvalidBody(e.to_string())))
}

/// Maps a transport error onto the domain categories used for localized
/// error dialogs.
fn classify(error: &reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_connect() {
        HttpError::ConnectionFailed
    } else if let Some(status) = error.status() {
        HttpError::Status(status.as_u16())
    } else {
        HttpError::from_message(&error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_base_and_path() {
        assert_eq!(
            endpoint_url("http://localhost:8080"),
            "http://localhost:8080/search-availability-json"
        );
    }

    #[test]
    fn endpoint_url_tolerates_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8080/"),
            "http://localhost:8080/search-availability-json"
        );
    }

    #[test]
    fn user_agent_carries_crate_version() {
        assert!(USER_AGENT.starts_with("IcedConcierge/"));
        assert!(USER_AGENT.len() > "IcedConcierge/".len());
    }
}
