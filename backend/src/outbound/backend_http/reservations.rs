//! Reservation service adapter.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::client::BackendHttpClient;
use crate::domain::ports::{BackendServiceError, ReservationLedger};
use crate::domain::{NewReservation, Reservation, ReservationFilter, ReservationId};

const RESERVATIONS: &str = "reservations";

/// [`ReservationLedger`] backed by the reservation service's REST API.
pub struct HttpReservationLedger {
    http: BackendHttpClient,
}

impl HttpReservationLedger {
    /// Build an adapter for the reservation service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: BackendHttpClient::new(base_url, timeout, "reservation")?,
        })
    }

    fn list_url(&self, filter: &ReservationFilter) -> Result<Url, BackendServiceError> {
        let mut url = self.http.endpoint(&[RESERVATIONS])?;
        if filter.date.is_some() || filter.guest_id.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(date) = &filter.date {
                pairs.append_pair("date", date);
            }
            if let Some(guest_id) = filter.guest_id {
                pairs.append_pair("guestId", &guest_id.to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ReservationLedger for HttpReservationLedger {
    async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<Reservation>, BackendServiceError> {
        self.http.get_json(self.list_url(filter)?).await
    }

    async fn get_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<Reservation, BackendServiceError> {
        let url = self
            .http
            .endpoint(&[RESERVATIONS, &reservation_id.to_string()])?;
        self.http.get_json(url).await
    }

    async fn create_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, BackendServiceError> {
        self.http
            .post_json(self.http.endpoint(&[RESERVATIONS])?, reservation)
            .await
    }

    async fn update_reservation(
        &self,
        reservation_id: ReservationId,
        reservation: &NewReservation,
    ) -> Result<(), BackendServiceError> {
        let url = self
            .http
            .endpoint(&[RESERVATIONS, &reservation_id.to_string()])?;
        self.http
            .put_json(url, &reservation.clone().with_id(reservation_id))
            .await
    }

    async fn delete_reservation(
        &self,
        reservation_id: ReservationId,
    ) -> Result<(), BackendServiceError> {
        let url = self
            .http
            .endpoint(&[RESERVATIONS, &reservation_id.to_string()])?;
        self.http.delete(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GuestId;
    use httpmock::prelude::*;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn ledger(base: &str) -> HttpReservationLedger {
        HttpReservationLedger::new(
            Url::parse(base).expect("valid base URL"),
            Duration::from_secs(5),
        )
        .expect("adapter builds")
    }

    #[rstest]
    #[case::unfiltered(ReservationFilter::all(), "http://ledger.test/reservations")]
    #[case::date(
        ReservationFilter::new(Some("2024-06-01".to_owned()), None),
        "http://ledger.test/reservations?date=2024-06-01"
    )]
    #[case::guest(
        ReservationFilter::new(None, Some(GuestId::new(4))),
        "http://ledger.test/reservations?guestId=4"
    )]
    #[case::both(
        ReservationFilter::new(Some("2024-06-01".to_owned()), Some(GuestId::new(4))),
        "http://ledger.test/reservations?date=2024-06-01&guestId=4"
    )]
    fn list_url_carries_only_present_filters(
        #[case] filter: ReservationFilter,
        #[case] expected: &str,
    ) {
        let url = ledger("http://ledger.test")
            .list_url(&filter)
            .expect("url builds");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case::calendar_date(json!("2024-06-01"))]
    #[case::timestamp(json!("2024-06-01T00:00:00.000+00:00"))]
    #[case::null(Value::Null)]
    #[tokio::test]
    async fn list_echoes_dates_unchanged(#[case] date: Value) {
        let server = MockServer::start_async().await;
        let body = json!([
            {"reservationId": 10, "roomId": 1, "guestId": 4, "date": date}
        ]);
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/reservations")
                    .query_param("guestId", "4");
                then.status(200).json_body(body.clone());
            })
            .await;

        let reservations = ledger(&server.base_url())
            .list_reservations(&ReservationFilter::new(None, Some(GuestId::new(4))))
            .await
            .expect("list succeeds");

        mock.assert_async().await;
        assert_eq!(serde_json::to_value(&reservations).expect("serialise"), body);
    }

    #[tokio::test]
    async fn client_rejection_keeps_the_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/reservations");
                then.status(409).body("room already booked");
            })
            .await;

        let draft = NewReservation {
            room_id: crate::domain::RoomId::new(1),
            guest_id: GuestId::new(4),
            date: Some("2024-06-01".to_owned()),
        };
        let error = ledger(&server.base_url())
            .create_reservation(&draft)
            .await
            .expect_err("rejected");

        assert!(matches!(
            error,
            BackendServiceError::Rejected { status: 409, .. }
        ));
        assert!(!error.is_unavailable());
    }
}
