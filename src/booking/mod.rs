// SPDX-License-Identifier: MPL-2.0
//! Booking domain types.
//!
//! This module provides the room catalog and type-safe wrappers for guest
//! stay dates, keeping wire formatting rules in one place.

pub mod dates;
pub mod room;

pub use dates::{StayRange, DATE_FORMAT};
pub use room::{Room, RoomId};
