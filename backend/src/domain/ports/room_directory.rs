//! Driven port for the room service.

use async_trait::async_trait;

use super::BackendServiceError;
use crate::domain::{NewRoom, Room, RoomId};

/// Create/read/update/delete access to room records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// List every room, in the service's order.
    async fn list_rooms(&self) -> Result<Vec<Room>, BackendServiceError>;

    /// Fetch one room.
    async fn get_room(&self, room_id: RoomId) -> Result<Room, BackendServiceError>;

    /// Create a room and return it with its assigned identifier.
    async fn create_room(&self, room: &NewRoom) -> Result<Room, BackendServiceError>;

    /// Replace the fields of an existing room.
    async fn update_room(&self, room_id: RoomId, room: &NewRoom)
    -> Result<(), BackendServiceError>;

    /// Delete a room.
    async fn delete_room(&self, room_id: RoomId) -> Result<(), BackendServiceError>;
}
