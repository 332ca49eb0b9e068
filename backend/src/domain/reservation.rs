//! Reservation records owned by the reservation service.

use serde::{Deserialize, Serialize};

use super::{GuestId, ReservationId, RoomId};

/// A booking of one room by one guest on one date.
///
/// The date is kept exactly as the reservation service wrote it, including
/// timestamps and `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Identifier assigned by the reservation service.
    pub reservation_id: ReservationId,
    /// Reserved room.
    pub room_id: RoomId,
    /// Guest holding the reservation.
    pub guest_id: GuestId,
    /// Night of the stay, opaque to the gateway.
    #[serde(default)]
    pub date: Option<String>,
}

/// Reservation fields without an identifier; see [`crate::domain::NewRoom`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    /// Reserved room.
    pub room_id: RoomId,
    /// Guest holding the reservation.
    pub guest_id: GuestId,
    /// Night of the stay, forwarded unchanged.
    #[serde(default)]
    pub date: Option<String>,
}

impl NewReservation {
    /// Attach an identifier, producing a full reservation record.
    #[must_use]
    pub fn with_id(self, reservation_id: ReservationId) -> Reservation {
        Reservation {
            reservation_id,
            room_id: self.room_id,
            guest_id: self.guest_id,
            date: self.date,
        }
    }
}

/// Optional filters forwarded to the reservation service's list call.
///
/// The default filter lists every reservation. The date is passed through
/// untouched; the reservation service decides how to interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    /// Only reservations on this date.
    pub date: Option<String>,
    /// Only reservations held by this guest.
    pub guest_id: Option<GuestId>,
}

impl ReservationFilter {
    /// Filter that matches every reservation.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter, treating blank dates as absent.
    ///
    /// # Examples
    /// ```
    /// use reservation_gateway::domain::{GuestId, ReservationFilter};
    ///
    /// let filter = ReservationFilter::new(Some("  ".to_owned()), Some(GuestId::new(3)));
    /// assert_eq!(filter.date, None);
    /// assert_eq!(filter.guest_id, Some(GuestId::new(3)));
    /// ```
    #[must_use]
    pub fn new(date: Option<String>, guest_id: Option<GuestId>) -> Self {
        Self {
            date: date.filter(|value| !value.trim().is_empty()),
            guest_id,
        }
    }
}
