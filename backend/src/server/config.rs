//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use reservation_gateway::settings::{GatewaySettings, SettingsError};
use url::Url;

/// Base URLs of the three backend services.
#[derive(Debug, Clone)]
pub struct BackendUrls {
    pub(crate) rooms: Url,
    pub(crate) guests: Url,
    pub(crate) reservations: Url,
}

/// Resolved configuration for creating the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) backends: BackendUrls,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Validate loaded settings into a server configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when any configured value is malformed.
    pub fn from_settings(settings: &GatewaySettings) -> Result<Self, SettingsError> {
        Ok(Self {
            bind_addr: settings.bind_addr()?,
            backends: BackendUrls {
                rooms: settings.room_service_url()?,
                guests: settings.guest_service_url()?,
                reservations: settings.reservation_service_url()?,
            },
            request_timeout: settings.request_timeout()?,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
