//! Server settings from environment.

use std::env;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
}

impl Settings {
    /// Loads `.env` if present, then reads env vars with defaults
    /// suitable for local development.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/roster".into());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
        let max_connections = env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);
        Settings {
            database_url,
            bind_addr,
            max_connections,
        }
    }
}
