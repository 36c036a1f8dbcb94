//! HTTP server for the trailer booking engine.
//!
//! Environment:
//! - `BOOKING_CONFIG_DIR`: configuration directory (default `./config/default`)
//! - `BOOKING_LISTEN_ADDR`: address to bind (default `0.0.0.0:3000`)
//! - `RUST_LOG`: log filter (default `info`)

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trailer_booking_engine::api::{AppState, create_router};
use trailer_booking_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_dir =
        std::env::var("BOOKING_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let listen_addr =
        std::env::var("BOOKING_LISTEN_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        config_dir = %config_dir,
        business = %config.business().name,
        weekday_rate = %config.pricing().rates.weekday_rate,
        weekend_rate = %config.pricing().rates.weekend_rate,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = TcpListener::bind(&listen_addr).await?;
    info!(listen_addr = %listen_addr, "Booking engine listening");

    axum::serve(listener, router).await?;
    Ok(())
}
