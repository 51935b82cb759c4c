// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(HttpError),
}

/// Specific error types for availability-request failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpError {
    /// Server could not be reached (refused, DNS failure, network down)
    ConnectionFailed,

    /// Request did not complete within the client timeout
    Timeout,

    /// Server answered with a non-success HTTP status
    Status(u16),

    /// Response body was not the JSON shape the server contract promises
    InvalidBody(String),

    /// Generic error with raw message
    Other(String),
}

impl HttpError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            HttpError::ConnectionFailed => "error-availability-connection",
            HttpError::Timeout => "error-availability-timeout",
            HttpError::Status(_) => "error-availability-status",
            HttpError::InvalidBody(_) => "error-availability-body",
            HttpError::Other(_) => "error-availability-general",
        }
    }

    /// Attempts to parse a raw error message into a specific `HttpError` type.
    /// Fallback categorization for errors that carry no typed cause.
    pub fn from_message(msg: &str) -> Self {
        let msg_lower = msg.to_lowercase();

        if msg_lower.contains("timed out") || msg_lower.contains("timeout") {
            return HttpError::Timeout;
        }

        if msg_lower.contains("connection refused")
            || msg_lower.contains("connect")
            || msg_lower.contains("dns")
            || msg_lower.contains("unreachable")
        {
            return HttpError::ConnectionFailed;
        }

        if msg_lower.contains("decod")
            || msg_lower.contains("json")
            || msg_lower.contains("expected value")
        {
            return HttpError::InvalidBody(msg.to_string());
        }

        HttpError::Other(msg.to_string())
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpError::ConnectionFailed => write!(f, "Could not reach the server"),
            HttpError::Timeout => write!(f, "Request timed out"),
            HttpError::Status(code) => write!(f, "Server responded with status {}", code),
            HttpError::InvalidBody(msg) => write!(f, "Invalid response body: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
        }
    }
}

impl From<HttpError> for Error {
    fn from(err: HttpError) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
