//! Room records owned by the room service.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A room as stored by the room service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Identifier assigned by the room service.
    pub room_id: RoomId,
    /// Number shown on the door, e.g. `"P1"`.
    pub room_number: String,
    /// Bed configuration, e.g. `"1Q"`.
    pub bed_info: String,
    /// Display name.
    pub name: String,
}

/// Room fields without an identifier.
///
/// Used as the body for creates and updates; the backend (create) or the
/// request path (update) supplies the identifier. A stray `roomId` in the
/// incoming JSON is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    /// Number shown on the door.
    pub room_number: String,
    /// Bed configuration.
    pub bed_info: String,
    /// Display name.
    pub name: String,
}

impl NewRoom {
    /// Attach an identifier, producing a full room record.
    #[must_use]
    pub fn with_id(self, room_id: RoomId) -> Room {
        Room {
            room_id,
            room_number: self.room_number,
            bed_info: self.bed_info,
            name: self.name,
        }
    }
}
