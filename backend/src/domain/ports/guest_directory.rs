//! Driven port for the guest service.

use async_trait::async_trait;

use super::BackendServiceError;
use crate::domain::{Guest, GuestId, NewGuest};

/// Create/read/update/delete access to guest records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestDirectory: Send + Sync {
    /// List every guest.
    async fn list_guests(&self) -> Result<Vec<Guest>, BackendServiceError>;

    /// Fetch one guest.
    async fn get_guest(&self, guest_id: GuestId) -> Result<Guest, BackendServiceError>;

    /// Create a guest and return it with its assigned identifier.
    async fn create_guest(&self, guest: &NewGuest) -> Result<Guest, BackendServiceError>;

    /// Replace the fields of an existing guest.
    async fn update_guest(
        &self,
        guest_id: GuestId,
        guest: &NewGuest,
    ) -> Result<(), BackendServiceError>;

    /// Delete a guest.
    async fn delete_guest(&self, guest_id: GuestId) -> Result<(), BackendServiceError>;
}
