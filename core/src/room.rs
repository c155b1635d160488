//! Bookable rooms.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable room with a capacity bound.
///
/// Rooms have no separate id; two rooms are the same resource when their names
/// match. Rooms built through [`Room::new`] are always valid, while rooms that
/// arrive through deserialization are re-checked by the service with
/// [`Room::is_valid`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    name: String,
    capacity: u32,
}

impl Room {
    /// Creates a room.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRoom`] if the name is empty or the
    /// capacity is zero.
    pub fn new(name: impl Into<String>, capacity: u32) -> Result<Self, ValidationError> {
        let room = Self {
            name: name.into(),
            capacity,
        };
        if room.is_valid() {
            Ok(room)
        } else {
            Err(ValidationError::InvalidRoom)
        }
    }

    /// Room name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum party size.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Non-empty name and positive capacity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.capacity > 0
    }

    /// Whether `other` denotes the same bookable resource.
    #[must_use]
    pub fn same_resource(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Whether a party of `party_size` fits.
    #[must_use]
    pub const fn fits(&self, party_size: u32) -> bool {
        party_size <= self.capacity
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} seats)", self.name, self.capacity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room() {
        let room = Room::new("Sala 101", 6).unwrap();
        assert_eq!(room.name(), "Sala 101");
        assert_eq!(room.capacity(), 6);
        assert!(room.is_valid());
    }

    #[test]
    fn test_rejects_empty_name() {
        assert_eq!(Room::new("", 6), Err(ValidationError::InvalidRoom));
    }

    #[test]
    fn test_whitespace_name_is_still_a_name() {
        let room = Room::new("  ", 6).unwrap();
        assert!(room.is_valid());
        assert!(!room.same_resource(&Room::new(" ", 6).unwrap()));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert_eq!(Room::new("Sala 101", 0), Err(ValidationError::InvalidRoom));
    }

    #[test]
    fn test_deserialized_room_is_rechecked() {
        let room: Room = serde_json::from_str(r#"{"name":"","capacity":6}"#).unwrap();
        assert!(!room.is_valid());
    }

    #[test]
    fn test_same_resource_compares_names_only() {
        let a = Room::new("Sala 101", 6).unwrap();
        let b = Room::new("Sala 101", 12).unwrap();
        let c = Room::new("Sala 102", 6).unwrap();
        assert!(a.same_resource(&b));
        assert!(!a.same_resource(&c));
    }

    #[test]
    fn test_fits() {
        let room = Room::new("Sala 101", 6).unwrap();
        assert!(room.fits(6));
        assert!(!room.fits(7));
    }
}
