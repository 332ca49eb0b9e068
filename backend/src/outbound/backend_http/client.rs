//! Shared reqwest plumbing for the backend service adapters.
//!
//! Owns transport details only: URL building, trace propagation, timeout and
//! status mapping, and JSON decoding. The per-service adapters decide which
//! paths to call.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::ports::BackendServiceError;
use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Thin client bound to one backend service's base URL.
pub(super) struct BackendHttpClient {
    client: Client,
    base_url: Url,
    service: &'static str,
}

impl BackendHttpClient {
    /// Build a client with an explicit per-request timeout.
    pub(super) fn new(
        base_url: Url,
        timeout: Duration,
        service: &'static str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            service,
        })
    }

    /// Join `segments` onto the base URL, keeping any base path prefix.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendServiceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                BackendServiceError::transport(format!(
                    "{} service base URL {} cannot carry a path",
                    self.service, self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, BackendServiceError> {
        let body = self.send(self.request(Method::GET, url)).await?;
        self.decode(&body)
    }

    pub(super) async fn post_json<B, T>(&self, url: Url, payload: &B) -> Result<T, BackendServiceError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let body = self
            .send(self.request(Method::POST, url).json(payload))
            .await?;
        self.decode(&body)
    }

    /// PUT `payload`; the response body is ignored.
    pub(super) async fn put_json<B>(&self, url: Url, payload: &B) -> Result<(), BackendServiceError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.send(self.request(Method::PUT, url).json(payload))
            .await
            .map(drop)
    }

    pub(super) async fn delete(&self, url: Url) -> Result<(), BackendServiceError> {
        self.send(self.request(Method::DELETE, url)).await.map(drop)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(service = self.service, %method, %url, "calling backend service");
        let builder = self
            .client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        match TraceId::current() {
            Some(trace_id) => builder.header(TRACE_ID_HEADER, trace_id.to_string()),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>, BackendServiceError> {
        let response: Response = builder
            .send()
            .await
            .map_err(|error| self.map_transport_error(&error))?;
        let status = response.status();
        let path = response.url().path().to_owned();
        let body = response
            .bytes()
            .await
            .map_err(|error| self.map_transport_error(&error))?;
        if !status.is_success() {
            return Err(self.map_status_error(status, &path, body.as_ref()));
        }
        Ok(body.to_vec())
    }

    fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, BackendServiceError> {
        serde_json::from_slice(body).map_err(|error| {
            BackendServiceError::decode(format!(
                "invalid {} service JSON payload: {error}",
                self.service
            ))
        })
    }

    fn map_transport_error(&self, error: &reqwest::Error) -> BackendServiceError {
        let message = format!("{} service: {error}", self.service);
        if error.is_timeout() {
            BackendServiceError::timeout(message)
        } else if error.is_decode() {
            BackendServiceError::decode(message)
        } else {
            BackendServiceError::transport(message)
        }
    }

    fn map_status_error(&self, status: StatusCode, path: &str, body: &[u8]) -> BackendServiceError {
        let preview = body_preview(body);
        let message = if preview.is_empty() {
            format!("{} service {path}", self.service)
        } else {
            format!("{} service {path}: {preview}", self.service)
        };

        match status {
            StatusCode::NOT_FOUND => BackendServiceError::not_found(message),
            StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
                BackendServiceError::timeout(message)
            }
            _ => BackendServiceError::rejected(status.as_u16(), message),
        }
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
