//! Gateway configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `GATEWAY_*` environment variables or a config
//! file, with defaults suitable for running all four processes on one host.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ROOM_SERVICE_URL: &str = "http://localhost:8081";
const DEFAULT_GUEST_SERVICE_URL: &str = "http://localhost:8082";
const DEFAULT_RESERVATION_SERVICE_URL: &str = "http://localhost:8083";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The bind address is not `host:port`.
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parse failure.
        source: std::net::AddrParseError,
    },
    /// A backend base URL does not parse.
    #[error("invalid {service} service URL {value:?}: {source}")]
    InvalidServiceUrl {
        /// Which backend the URL belongs to.
        service: &'static str,
        /// Raw configured value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },
    /// Outbound timeout of zero seconds.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Runtime settings for the gateway process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GATEWAY")]
pub struct GatewaySettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Base URL of the room service.
    pub room_service_url: Option<String>,
    /// Base URL of the guest service.
    pub guest_service_url: Option<String>,
    /// Base URL of the reservation service.
    pub reservation_service_url: Option<String>,
    /// Per-request timeout for backend calls, in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl GatewaySettings {
    /// Return the bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: value.to_owned(),
                source,
            })
    }

    /// Return the room service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidServiceUrl`] when the value does not parse.
    pub fn room_service_url(&self) -> Result<Url, SettingsError> {
        parse_service_url(
            "room",
            self.room_service_url.as_deref(),
            DEFAULT_ROOM_SERVICE_URL,
        )
    }

    /// Return the guest service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidServiceUrl`] when the value does not parse.
    pub fn guest_service_url(&self) -> Result<Url, SettingsError> {
        parse_service_url(
            "guest",
            self.guest_service_url.as_deref(),
            DEFAULT_GUEST_SERVICE_URL,
        )
    }

    /// Return the reservation service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidServiceUrl`] when the value does not parse.
    pub fn reservation_service_url(&self) -> Result<Url, SettingsError> {
        parse_service_url(
            "reservation",
            self.reservation_service_url.as_deref(),
            DEFAULT_RESERVATION_SERVICE_URL,
        )
    }

    /// Return the outbound request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::ZeroTimeout`] when configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}

fn parse_service_url(
    service: &'static str,
    configured: Option<&str>,
    default: &str,
) -> Result<Url, SettingsError> {
    let value = configured.unwrap_or(default);
    Url::parse(value).map_err(|source| SettingsError::InvalidServiceUrl {
        service,
        value: value.to_owned(),
        source,
    })
}
