//! Service entry-point: wires REST endpoints, persistence, and OpenAPI docs.

mod server;

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use server::ServerConfig;
use user_service::inbound::http::health::HealthState;
use user_service::outbound::persistence::{DbPool, PoolConfig};

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

    let raw_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let bind_addr: SocketAddr = raw_addr.parse().map_err(|e| {
        std::io::Error::other(format!("invalid BIND_ADDR {raw_addr}: {e}"))
    })?;

    let mut config = ServerConfig::new(bind_addr);
    match env::var("DATABASE_URL") {
        Ok(url) => {
            let pool = DbPool::new(PoolConfig::new(url)).await.map_err(|e| {
                std::io::Error::other(format!("database pool setup failed: {e}"))
            })?;
            config = config.with_db_pool(pool);
        }
        Err(_) => warn!("DATABASE_URL not set; using the in-memory user store"),
    }

    let health_state = web::Data::new(HealthState::new());
    let addr = config.bind_addr();
    let server = server::create_server(health_state, config)?;
    info!(addr = %addr, "user service listening");
    server.await
}
