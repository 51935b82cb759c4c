// SPDX-License-Identifier: MPL-2.0
//! HTTP client and wire types for the reservation server.
//!
//! The server speaks form-encoded requests and JSON responses; this module
//! keeps both shapes and the request plumbing together so the rest of the app
//! only deals in domain types.

pub mod client;
pub mod types;

pub use client::check_availability;
pub use types::{AvailabilityRequest, AvailabilityResponse};
