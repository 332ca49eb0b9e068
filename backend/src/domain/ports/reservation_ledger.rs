//! Driven port for the reservation service.

use async_trait::async_trait;

use super::BackendServiceError;
use crate::domain::{NewReservation, Reservation, ReservationFilter, ReservationId};

/// Create/read/update/delete access to reservation records.
///
/// Passing [`ReservationFilter::all`] lists every reservation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationLedger: Send + Sync {
    /// List reservations matching `filter`, in the service's order.
    async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, BackendServiceError>;

    /// Fetch one reservation.
    async fn get_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Reservation, BackendServiceError>;

    /// Create a reservation and return it with its assigned identifier.
    async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, BackendServiceError>;

    /// Replace the fields of an existing reservation.
    async fn update_reservation(
        &self,
        reservation_id: ReservationId,
        reservation: &NewReservation,
    ) -> Result<(), BackendServiceError>;

    /// Delete a reservation.
    async fn delete_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<(), BackendServiceError>;
}
