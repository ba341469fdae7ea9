//! Runtime configuration and HTTP server configuration objects.

use std::net::SocketAddr;

use clap::Parser;

use crate::outbound::persistence::DbPool;

/// Command-line and environment configuration for the server process.
#[derive(Debug, Clone, Parser)]
#[command(name = "jobboard", about = "Job board backend server", version)]
pub struct AppConfig {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: SocketAddr,

    /// PostgreSQL connection string. In-memory stores are used when absent.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Shared secret used to sign and verify identity tokens.
    #[arg(long, env = "TOKEN_SECRET", hide_env_values = true)]
    pub token_secret: String,

    /// Whether issued token cookies carry the `Secure` attribute.
    ///
    /// Disable only for plain-HTTP development.
    #[arg(
        long,
        env = "COOKIE_SECURE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub cookie_secure: bool,
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) token_secret: Vec<u8>,
    pub(crate) cookie_secure: bool,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration using application preferences.
    #[must_use]
    pub fn new(token_secret: impl Into<Vec<u8>>, cookie_secure: bool, bind_addr: SocketAddr) -> Self {
        Self {
            token_secret: token_secret.into(),
            cookie_secure,
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// When provided, the server uses the PostgreSQL-backed repositories;
    /// otherwise every store is in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
