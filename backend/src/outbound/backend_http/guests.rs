//! Guest service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::client::BackendHttpClient;
use crate::domain::ports::{BackendServiceError, GuestDirectory};
use crate::domain::{Guest, GuestId, NewGuest};

const GUESTS: &str = "guests";

/// [`GuestDirectory`] backed by the guest service's REST API.
pub struct HttpGuestDirectory {
    http: BackendHttpClient,
}

impl HttpGuestDirectory {
    /// Build an adapter for the guest service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: BackendHttpClient::new(base_url, timeout, "guest")?,
        })
    }
}

#[async_trait]
impl GuestDirectory for HttpGuestDirectory {
    async fn list_guests(&self) -> Result<Vec<Guest>, BackendServiceError> {
        self.http.get_json(self.http.endpoint(&[GUESTS])?).await
    }

    async fn get_guest(&self, guest_id: GuestId) -> Result<Guest, BackendServiceError> {
        let url = self.http.endpoint(&[GUESTS, &guest_id.to_string()])?;
        self.http.get_json(url).await
    }

    async fn create_guest(&self, guest: &NewGuest) -> Result<Guest, BackendServiceError> {
        self.http
            .post_json(self.http.endpoint(&[GUESTS])?, guest)
            .await
    }

    async fn update_guest(
        &self,
        guest_id: GuestId,
        guest: &NewGuest,
    ) -> Result<(), BackendServiceError> {
        let url = self.http.endpoint(&[GUESTS, &guest_id.to_string()])?;
        self.http
            .put_json(url, &guest.clone().with_id(guest_id))
            .await
    }

    async fn delete_guest(&self, guest_id: GuestId) -> Result<(), BackendServiceError> {
        let url = self.http.endpoint(&[GUESTS, &guest_id.to_string()])?;
        self.http.delete(url).await
    }
}
