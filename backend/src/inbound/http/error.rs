//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP-agnostic; this module picks the status code
//! and strips backend internals from the payload before it leaves the
//! gateway.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNAVAILABLE_MESSAGE: &str = "Backend service unavailable";
const UPSTREAM_STATUS: &str = "upstreamStatus";

/// Status the failing backend answered with, when one was recorded.
fn upstream_status(error: &Error) -> Option<u64> {
    error
        .details()
        .and_then(|details| details.get(UPSTREAM_STATUS))
        .and_then(Value::as_u64)
}

/// Copy of `error` safe to hand to the caller.
///
/// Internal failures lose their message and details. Unavailable backends
/// keep only the upstream status, as transport messages name internal hosts.
fn public_payload(error: &Error) -> Error {
    let payload = match error.code() {
        ErrorCode::InternalError => Error::internal(INTERNAL_MESSAGE),
        ErrorCode::ServiceUnavailable => {
            let unavailable = Error::service_unavailable(UNAVAILABLE_MESSAGE);
            match upstream_status(error) {
                Some(status) => unavailable.with_details(json!({ UPSTREAM_STATUS: status })),
                None => unavailable,
            }
        }
        ErrorCode::InvalidRequest | ErrorCode::NotFound => return error.clone(),
    };
    match error.trace_id() {
        Some(id) => payload.with_trace_id(id.to_owned()),
        None => payload,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(public_payload(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "actix error promoted to domain error");
        Self::internal(INTERNAL_MESSAGE)
    }
}
