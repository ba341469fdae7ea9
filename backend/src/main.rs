//! Backend entry-point: parses configuration and starts the HTTP server.

use actix_web::web;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use jobboard::inbound::http::health::HealthState;
use jobboard::outbound::persistence::{DbPool, PoolConfig};
use jobboard::server::{AppConfig, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::parse();

    let mut server_config =
        ServerConfig::new(config.token_secret, config.cookie_secure, config.bind_addr);
    match config.database_url {
        Some(url) => {
            let pool = DbPool::new(PoolConfig::new(url))
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            server_config = server_config.with_db_pool(pool);
        }
        None => {
            warn!("no DATABASE_URL configured; using in-memory stores");
        }
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, server_config)?;
    info!(addr = %config.bind_addr, "listening");
    server.await
}
