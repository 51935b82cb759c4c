// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
///
/// The availability dialog is not a screen: it overlays whichever screen is
/// active and leaves it untouched underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Room catalog, the landing screen.
    #[default]
    Rooms,
    Settings,
    About,
}
