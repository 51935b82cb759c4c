// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`rooms`] - Room catalog with one availability button per room
//! - [`settings`] - Language, appearance, and server preferences
//! - [`about`] - Application version, license, and credits
//!
//! # Shared Infrastructure
//!
//! - [`availability`] - Availability check dialog with its date range picker
//! - [`dialog`] - Modal dialog cards and the backdrop recipe
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering
//! - [`navbar`] - Navigation bar with hamburger menu
//! - [`notifications`] - Toast notification system for user feedback

pub mod about;
pub mod availability;
pub mod design_tokens;
pub mod dialog;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod rooms;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod widgets;
