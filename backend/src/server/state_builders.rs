//! Builders wiring backend adapters into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use reservation_gateway::domain::RoomReservationService;
use reservation_gateway::inbound::http::state::HttpState;
use reservation_gateway::outbound::backend_http::{
    HttpGuestDirectory, HttpReservationLedger, HttpRoomDirectory,
};

use super::ServerConfig;

/// Build the shared handler state from the resolved configuration.
///
/// The adapters are created once and shared by every worker.
pub(super) fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let timeout = config.request_timeout;
    let rooms = Arc::new(
        HttpRoomDirectory::new(config.backends.rooms.clone(), timeout)
            .map_err(|e| std::io::Error::other(format!("room service client: {e}")))?,
    );
    let guests = Arc::new(
        HttpGuestDirectory::new(config.backends.guests.clone(), timeout)
            .map_err(|e| std::io::Error::other(format!("guest service client: {e}")))?,
    );
    let reservations = Arc::new(
        HttpReservationLedger::new(config.backends.reservations.clone(), timeout)
            .map_err(|e| std::io::Error::other(format!("reservation service client: {e}")))?,
    );
    let room_reservations = Arc::new(RoomReservationService::new(
        rooms.clone(),
        guests.clone(),
        reservations.clone(),
        Arc::new(DefaultClock),
    ));

    Ok(web::Data::new(HttpState::new(
        rooms,
        guests,
        reservations,
        room_reservations,
    )))
}
