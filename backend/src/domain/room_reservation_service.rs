//! Aggregation service joining rooms, reservations and guests.
//!
//! Implements the [`RoomReservationsQuery`] driving port on top of the three
//! backend directories. The join runs sequentially inside one request: rooms
//! are indexed first, reservations are folded into the index, then guest
//! names are resolved with one lookup per distinct guest.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, error};

use crate::domain::ports::{
    GuestDirectory, ReservationLedger, RoomDirectory, RoomReservationsQuery,
    RoomReservationsRequest,
};
use crate::domain::{Error, Guest, GuestId, ReservationFilter, RoomId, RoomReservation};

/// Format used when stamping the requested date onto each row.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Service producing the combined per-room view.
#[derive(Clone)]
pub struct RoomReservationService {
    rooms: Arc<dyn RoomDirectory>,
    guests: Arc<dyn GuestDirectory>,
    reservations: Arc<dyn ReservationLedger>,
    clock: Arc<dyn Clock>,
}

impl RoomReservationService {
    /// Create the service from its backend collaborators and a clock.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use std::time::Duration;
    /// # use mockable::DefaultClock;
    /// # use url::Url;
    /// # use reservation_gateway::domain::RoomReservationService;
    /// # use reservation_gateway::outbound::backend_http::{
    /// #     HttpGuestDirectory, HttpReservationLedger, HttpRoomDirectory,
    /// # };
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let timeout = Duration::from_secs(10);
    /// let service = RoomReservationService::new(
    ///     Arc::new(HttpRoomDirectory::new(Url::parse("http://localhost:8081")?, timeout)?),
    ///     Arc::new(HttpGuestDirectory::new(Url::parse("http://localhost:8082")?, timeout)?),
    ///     Arc::new(HttpReservationLedger::new(Url::parse("http://localhost:8083")?, timeout)?),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        rooms: Arc<dyn RoomDirectory>,
        guests: Arc<dyn GuestDirectory>,
        reservations: Arc<dyn ReservationLedger>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            rooms,
            guests,
            reservations,
            clock,
        }
    }

    /// Resolve the date to stamp on each row.
    ///
    /// Empty or absent input becomes today's local date; anything else,
    /// whitespace included, is stamped as given.
    fn resolve_date(&self, requested: Option<String>) -> String {
        match requested {
            Some(date) if !date.is_empty() => date,
            _ => self.clock.local().format(DATE_FORMAT).to_string(),
        }
    }

    async fn resolve_guest(
        &self,
        cache: &mut HashMap<GuestId, Guest>,
        guest_id: GuestId,
    ) -> Result<Guest, Error> {
        if let Some(guest) = cache.get(&guest_id) {
            return Ok(guest.clone());
        }
        let guest = self.guests.get_guest(guest_id).await?;
        cache.insert(guest_id, guest.clone());
        Ok(guest)
    }
}

#[async_trait]
impl RoomReservationsQuery for RoomReservationService {
    async fn list_room_reservations(
        &self,
        request: RoomReservationsRequest,
    ) -> Result<Vec<RoomReservation>, Error> {
        let date = self.resolve_date(request.date);

        let rooms = self.rooms.list_rooms().await?;
        let mut entries: Vec<RoomReservation> = rooms
            .iter()
            .map(|room| RoomReservation::vacant(room, &date))
            .collect();
        let index: HashMap<RoomId, usize> = entries
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.room_id, position))
            .collect();

        let reservations = self
            .reservations
            .list_reservations(&ReservationFilter::all())
            .await?;

        for reservation in &reservations {
            let Some(entry) = index
                .get(&reservation.room_id)
                .and_then(|&position| entries.get_mut(position))
            else {
                error!(
                    reservation_id = %reservation.reservation_id,
                    room_id = %reservation.room_id,
                    "reservation references a room the room service did not return"
                );
                return Err(Error::internal(format!(
                    "reservation {} references unknown room {}",
                    reservation.reservation_id, reservation.room_id
                ))
                .with_details(json!({
                    "reservationId": reservation.reservation_id,
                    "roomId": reservation.room_id,
                })));
            };
            entry.attach_reservation(reservation);
        }

        let mut guests = HashMap::new();
        for entry in &mut entries {
            let Some(guest_id) = entry.guest_id else {
                continue;
            };
            let guest = self.resolve_guest(&mut guests, guest_id).await?;
            entry.attach_guest(&guest);
        }

        debug!(
            date = %date,
            rooms = entries.len(),
            reserved = entries.iter().filter(|entry| entry.is_reserved()).count(),
            "room reservations assembled"
        );
        Ok(entries)
    }
}

#[cfg(test)]
#[path = "room_reservation_service_tests.rs"]
mod tests;
