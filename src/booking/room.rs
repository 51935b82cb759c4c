// SPDX-License-Identifier: MPL-2.0
//! Room catalog.
//!
//! Rooms are fixed at compile time: the reservation server identifies them by
//! numeric id, and those ids are part of the wire contract.

use std::fmt;

/// Server-side room identifier.
///
/// The reservation server renders this as a decimal string in both request
/// form fields and JSON responses, so `Display` is the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomId(u32);

impl RoomId {
    /// Creates a room identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bookable room.
///
/// Names are proper nouns and stay untranslated. Descriptions go through the
/// i18n layer via `description_key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    name: &'static str,
    description_key: &'static str,
}

impl Room {
    #[must_use]
    pub fn id(&self) -> RoomId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the i18n key for the room description.
    #[must_use]
    pub fn description_key(&self) -> &'static str {
        self.description_key
    }
}

pub const GENERALS_QUARTERS: Room = Room {
    id: RoomId::new(1),
    name: "General's Quarters",
    description_key: "room-generals-quarters-description",
};

pub const MAJORS_SUITE: Room = Room {
    id: RoomId::new(2),
    name: "Major's Suite",
    description_key: "room-majors-suite-description",
};

/// All rooms in display order.
#[must_use]
pub fn catalog() -> &'static [Room] {
    &[GENERALS_QUARTERS, MAJORS_SUITE]
}

/// Looks up a room by its server-side id.
#[must_use]
pub fn by_id(id: RoomId) -> Option<Room> {
    catalog().iter().copied().find(|room| room.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_ids_match_server_contract() {
        assert_eq!(GENERALS_QUARTERS.id().value(), 1);
        assert_eq!(MAJORS_SUITE.id().value(), 2);
    }

    #[test]
    fn room_id_displays_as_decimal_string() {
        assert_eq!(RoomId::new(2).to_string(), "2");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let rooms = catalog();
        for (index, room) in rooms.iter().enumerate() {
            for other in &rooms[index + 1..] {
                assert_ne!(room.id(), other.id());
            }
        }
    }

    #[test]
    fn by_id_finds_known_rooms() {
        assert_eq!(by_id(RoomId::new(1)), Some(GENERALS_QUARTERS));
        assert_eq!(by_id(RoomId::new(2)), Some(MAJORS_SUITE));
        assert_eq!(by_id(RoomId::new(99)), None);
    }
}
