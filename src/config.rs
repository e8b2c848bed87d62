use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::storage::PoolSettings;

/// TeacherHub record service
#[derive(Parser, Debug, Clone)]
#[command(name = "teacherhub-server")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Postgres connection string, or `memory://` for a process-local store
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Database name, overrides the one in the connection string
    #[arg(long, env = "DB_NAME", default_value = "teacherhub")]
    pub db_name: String,

    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub max_connections: u32,

    /// Deadline for acquiring a storage connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub acquire_timeout_secs: u64,
}

impl Config {
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }
}
