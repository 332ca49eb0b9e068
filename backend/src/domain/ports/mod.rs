//! Domain ports for the hexagonal boundary.
//!
//! Driven ports describe the three backend services the gateway composes;
//! the driving port describes the aggregation use-case the HTTP layer calls.

mod macros;
pub(crate) use macros::define_port_error;

mod backend_service_error;
mod guest_directory;
mod reservation_ledger;
mod room_directory;
mod room_reservations_query;

pub use backend_service_error::BackendServiceError;
#[cfg(test)]
pub use guest_directory::MockGuestDirectory;
pub use guest_directory::GuestDirectory;
#[cfg(test)]
pub use reservation_ledger::MockReservationLedger;
pub use reservation_ledger::ReservationLedger;
#[cfg(test)]
pub use room_directory::MockRoomDirectory;
pub use room_directory::RoomDirectory;
#[cfg(test)]
pub use room_reservations_query::MockRoomReservationsQuery;
pub use room_reservations_query::{RoomReservationsQuery, RoomReservationsRequest};
