//! Combined per-room view built by the aggregator.

use serde::{Deserialize, Serialize};

use super::{Guest, GuestId, Reservation, ReservationId, Room, RoomId};

/// One room together with the reservation and guest occupying it.
///
/// Request-scoped: built while answering `GET /roomReservations` and dropped
/// once the response is written. Vacant rooms keep `null` reservation and
/// guest fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomReservation {
    /// Room identifier.
    pub room_id: RoomId,
    /// Room number.
    pub room_number: String,
    /// Bed configuration.
    pub bed_info: String,
    /// Room display name.
    pub name: String,
    /// Date the view was requested for.
    pub date: String,
    /// Reservation holding the room.
    pub reservation_id: Option<ReservationId>,
    /// Guest holding the reservation.
    pub guest_id: Option<GuestId>,
    /// Guest's given name.
    pub first_name: Option<String>,
    /// Guest's family name.
    pub last_name: Option<String>,
}

impl RoomReservation {
    /// Start a vacant entry for `room` stamped with `date`.
    ///
    /// # Examples
    /// ```
    /// use reservation_gateway::domain::{Room, RoomId, RoomReservation};
    ///
    /// let room = Room {
    ///     room_id: RoomId::new(1),
    ///     room_number: "P1".to_owned(),
    ///     bed_info: "1Q".to_owned(),
    ///     name: "Piccadilly".to_owned(),
    /// };
    /// let entry = RoomReservation::vacant(&room, "2024-06-01");
    /// assert!(entry.reservation_id.is_none());
    /// ```
    #[must_use]
    pub fn vacant(room: &Room, date: &str) -> Self {
        Self {
            room_id: room.room_id,
            room_number: room.room_number.clone(),
            bed_info: room.bed_info.clone(),
            name: room.name.clone(),
            date: date.to_owned(),
            reservation_id: None,
            guest_id: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Record `reservation` as holding this room.
    ///
    /// A later reservation replaces an earlier one, including any guest name
    /// already attached.
    pub fn attach_reservation(&mut self, reservation: &Reservation) {
        self.reservation_id = Some(reservation.reservation_id);
        self.guest_id = Some(reservation.guest_id);
        self.first_name = None;
        self.last_name = None;
    }

    /// Copy the guest's name onto this entry.
    pub fn attach_guest(&mut self, guest: &Guest) {
        self.first_name = Some(guest.first_name.clone());
        self.last_name = Some(guest.last_name.clone());
    }

    /// Whether a reservation has been attached.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        self.reservation_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn room() -> Room {
        Room {
            room_id: RoomId::new(1),
            room_number: "P1".to_owned(),
            bed_info: "1Q".to_owned(),
            name: "Piccadilly".to_owned(),
        }
    }

    fn reservation(id: i64, guest: i64) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(id),
            room_id: RoomId::new(1),
            guest_id: GuestId::new(guest),
            date: Some("2024-06-01".to_owned()),
        }
    }

    #[test]
    fn vacant_entries_serialise_nulls() {
        let value = serde_json::to_value(RoomReservation::vacant(&room(), "2024-06-01"))
            .expect("serialise");
        assert_eq!(
            value,
            json!({
                "roomId": 1,
                "roomNumber": "P1",
                "bedInfo": "1Q",
                "name": "Piccadilly",
                "date": "2024-06-01",
                "reservationId": Value::Null,
                "guestId": Value::Null,
                "firstName": Value::Null,
                "lastName": Value::Null,
            })
        );
    }

    #[test]
    fn later_reservation_clears_the_previous_guest_name() {
        let mut entry = RoomReservation::vacant(&room(), "2024-06-01");
        entry.attach_reservation(&reservation(10, 100));
        entry.attach_guest(&Guest {
            guest_id: GuestId::new(100),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        });
        entry.attach_reservation(&reservation(11, 101));

        assert!(entry.is_reserved());
        assert_eq!(entry.reservation_id, Some(ReservationId::new(11)));
        assert_eq!(entry.guest_id, Some(GuestId::new(101)));
        assert!(entry.first_name.is_none());
    }
}
