//! Gateway entry-point: loads settings, wires backend adapters and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::eyre;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use reservation_gateway::inbound::http::health::HealthState;
use reservation_gateway::settings::GatewaySettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        GatewaySettings::load().map_err(|e| eyre!("failed to load gateway settings: {e}"))?;
    let config = ServerConfig::from_settings(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), &config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result?;
    Ok(())
}
