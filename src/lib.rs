// SPDX-License-Identifier: MPL-2.0
//! `iced_concierge` is a desktop booking companion for the Fort Smythe
//! Bed & Breakfast, built with the Iced GUI framework.
//!
//! It lets guests check room availability against the reservation server and
//! demonstrates internationalization with Fluent, user preference management,
//! and modular UI design.

pub mod api;
pub mod app;
pub mod booking;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
