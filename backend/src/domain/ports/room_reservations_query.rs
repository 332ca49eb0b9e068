//! Driving port for the combined room/reservation/guest view.
//!
//! The HTTP handler for `GET /roomReservations` depends on this trait only,
//! so its tests can swap in a double without wiring three backend fakes.

use async_trait::async_trait;

use crate::domain::{Error, RoomReservation};

/// Input for [`RoomReservationsQuery::list_room_reservations`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomReservationsRequest {
    /// Requested date; empty or absent means today.
    pub date: Option<String>,
}

/// Use-case port producing one [`RoomReservation`] per room.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomReservationsQuery: Send + Sync {
    /// Build the per-room view for the requested date.
    async fn list_room_reservations(
        &self,
        request: RoomReservationsRequest,
    ) -> Result<Vec<RoomReservation>, Error>;
}
