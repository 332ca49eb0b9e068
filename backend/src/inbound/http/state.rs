//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend on
//! domain ports only and stay testable without network I/O.

use std::sync::Arc;

use crate::domain::ports::{GuestDirectory, ReservationLedger, RoomDirectory, RoomReservationsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Room service pass-through.
    pub rooms: Arc<dyn RoomDirectory>,
    /// Guest service pass-through.
    pub guests: Arc<dyn GuestDirectory>,
    /// Reservation service pass-through.
    pub reservations: Arc<dyn ReservationLedger>,
    /// Aggregated per-room view.
    pub room_reservations: Arc<dyn RoomReservationsQuery>,
}

impl HttpState {
    /// Construct state from its ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use mockable::DefaultClock;
    /// use reservation_gateway::domain::RoomReservationService;
    /// use reservation_gateway::inbound::http::state::HttpState;
    /// use reservation_gateway::outbound::backend_http::{
    ///     HttpGuestDirectory, HttpReservationLedger, HttpRoomDirectory,
    /// };
    /// use url::Url;
    ///
    /// # fn build() -> Result<HttpState, Box<dyn std::error::Error>> {
    /// let timeout = Duration::from_secs(10);
    /// let rooms = Arc::new(HttpRoomDirectory::new(Url::parse("http://localhost:8081")?, timeout)?);
    /// let guests = Arc::new(HttpGuestDirectory::new(Url::parse("http://localhost:8082")?, timeout)?);
    /// let reservations =
    ///     Arc::new(HttpReservationLedger::new(Url::parse("http://localhost:8083")?, timeout)?);
    /// let query = Arc::new(RoomReservationService::new(
    ///     rooms.clone(),
    ///     guests.clone(),
    ///     reservations.clone(),
    ///     Arc::new(DefaultClock),
    /// ));
    /// Ok(HttpState::new(rooms, guests, reservations, query))
    /// # }
    /// ```
    pub fn new(
        rooms: Arc<dyn RoomDirectory>,
        guests: Arc<dyn GuestDirectory>,
        reservations: Arc<dyn ReservationLedger>,
        room_reservations: Arc<dyn RoomReservationsQuery>,
    ) -> Self {
        Self {
            rooms,
            guests,
            reservations,
            room_reservations,
        }
    }
}
