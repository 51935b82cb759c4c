// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Localization is backed by the Fluent system. Translation files are embedded
//! at compile time and can be supplemented from a directory at runtime for
//! custom builds.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings (in that order)
//! - Runtime language switching
//! - Message interpolation via Fluent arguments
//! - `MISSING: <key>` fallback when a translation is absent

pub mod fluent;
