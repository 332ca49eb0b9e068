//! Reqwest adapters for the room, guest and reservation services.
//!
//! Each adapter is stateless apart from its pooled client and is shared
//! across requests behind an `Arc`.

mod client;
mod guests;
mod reservations;
mod rooms;

pub use guests::HttpGuestDirectory;
pub use reservations::HttpReservationLedger;
pub use rooms::HttpRoomDirectory;
