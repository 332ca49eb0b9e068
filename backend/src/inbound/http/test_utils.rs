//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{
    MockGuestDirectory, MockReservationLedger, MockRoomDirectory, MockRoomReservationsQuery,
};
use crate::domain::{Guest, GuestId, Reservation, ReservationId, Room, RoomId};
use crate::inbound::http::state::HttpState;

/// Port doubles for handler tests; unset expectations fail on use.
#[derive(Default)]
pub struct MockPorts {
    pub rooms: MockRoomDirectory,
    pub guests: MockGuestDirectory,
    pub reservations: MockReservationLedger,
    pub room_reservations: MockRoomReservationsQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState::new(
            Arc::new(self.rooms),
            Arc::new(self.guests),
            Arc::new(self.reservations),
            Arc::new(self.room_reservations),
        )
    }
}

/// Build the gateway routes over `state`, wrapped in the trace middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(super::configure)
}

pub fn sample_room(id: i64) -> Room {
    Room {
        room_id: RoomId::new(id),
        room_number: format!("P{id}"),
        bed_info: "1Q".to_owned(),
        name: "Piccadilly".to_owned(),
    }
}

pub fn sample_guest(id: i64) -> Guest {
    Guest {
        guest_id: GuestId::new(id),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    }
}

pub fn sample_reservation(id: i64, room_id: i64, guest_id: i64) -> Reservation {
    Reservation {
        reservation_id: ReservationId::new(id),
        room_id: RoomId::new(room_id),
        guest_id: GuestId::new(guest_id),
        date: Some("2024-06-01".to_owned()),
    }
}
