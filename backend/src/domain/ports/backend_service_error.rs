//! Failures shared by the room, guest, and reservation service ports.

use serde_json::json;
use tracing::warn;

use super::define_port_error;
use crate::domain::Error;

define_port_error! {
    /// Errors surfaced while calling a backend service.
    pub enum BackendServiceError {
        /// The service does not know the requested identifier.
        NotFound { message: String } =>
            "backend record not found: {message}",
        /// The request never produced a response.
        Transport { message: String } =>
            "backend transport failed: {message}",
        /// The service did not answer in time.
        Timeout { message: String } =>
            "backend timed out: {message}",
        /// The service answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "backend rejected request with status {status}: {message}",
        /// The response body did not match the expected record shape.
        Decode { message: String } =>
            "backend response decode failed: {message}",
    }
}

impl BackendServiceError {
    /// Whether the failure means the service itself is unreachable or broken.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        match self {
            Self::Transport { .. } | Self::Timeout { .. } => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::NotFound { .. } | Self::Decode { .. } => false,
        }
    }
}

impl From<BackendServiceError> for Error {
    fn from(error: BackendServiceError) -> Self {
        let message = error.to_string();
        match error {
            BackendServiceError::NotFound { .. } => Self::not_found(message),
            BackendServiceError::Rejected { status, .. } if status < 500 => {
                Self::invalid_request(message).with_details(json!({ "upstreamStatus": status }))
            }
            BackendServiceError::Rejected { status, .. } => {
                warn!(error = %message, status, "backend service failed");
                Self::service_unavailable(message).with_details(json!({ "upstreamStatus": status }))
            }
            BackendServiceError::Transport { .. } | BackendServiceError::Timeout { .. } => {
                warn!(error = %message, "backend service unavailable");
                Self::service_unavailable(message)
            }
            BackendServiceError::Decode { .. } => {
                warn!(error = %message, "backend response could not be decoded");
                Self::internal(message)
            }
        }
    }
}
