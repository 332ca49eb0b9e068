//! Domain records, errors and the aggregation service.
//!
//! Purpose: describe the records owned by the room, guest and reservation
//! services, the combined per-room view the gateway builds from them, and
//! the ports through which the gateway reaches those services.
//!
//! Public surface:
//! - Error / ErrorCode: gateway error payload and its stable code.
//! - TraceId: request-scoped correlation identifier.
//! - Room, Guest, Reservation and their `New*` drafts.
//! - RoomReservation: one room joined with its reservation and guest.
//! - RoomReservationService: the aggregation use-case.

pub mod error;
mod guest;
mod ids;
pub mod ports;
mod reservation;
mod room;
mod room_reservation;
mod room_reservation_service;
mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::guest::{Guest, NewGuest};
pub use self::ids::{GuestId, ReservationId, RoomId};
pub use self::reservation::{NewReservation, Reservation, ReservationFilter};
pub use self::room::{NewRoom, Room};
pub use self::room_reservation::RoomReservation;
pub use self::room_reservation_service::{DATE_FORMAT, RoomReservationService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use reservation_gateway::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("room 7 not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
