//! Command-line flags with environment fallbacks.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Args;
use db::PoolConfig;

/// Where the store lives and how the pool is sized.
#[derive(Debug, Args)]
pub struct DatabaseArgs {
    #[arg(long, env = "PG_HOST", default_value = "localhost")]
    pub pg_host: String,

    #[arg(long, env = "PG_PORT", default_value_t = 5432)]
    pub pg_port: u16,

    #[arg(long, env = "PG_USERNAME", default_value = "admin")]
    pub pg_username: String,

    #[arg(long, env = "PG_PASSWORD", default_value = "admin", hide_env_values = true)]
    pub pg_password: String,

    #[arg(long, env = "PG_DBNAME", default_value = "expense_tracker")]
    pub pg_dbname: String,

    /// Full Postgres URL; overrides the individual --pg-* flags.
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    #[arg(long, env = "PG_MAX_CONNS", default_value_t = 10)]
    pub max_connections: u32,

    #[arg(long, env = "PG_MIN_CONNS", default_value_t = 2)]
    pub min_connections: u32,

    #[arg(long, env = "PG_MAX_CONN_LIFETIME_SECS", default_value_t = 30 * 60)]
    pub max_lifetime_secs: u64,

    #[arg(long, env = "PG_MAX_CONN_IDLE_SECS", default_value_t = 10 * 60)]
    pub max_idle_secs: u64,

    #[arg(long, env = "PG_HEALTH_CHECK_SECS", default_value_t = 2 * 60)]
    pub health_check_secs: u64,
}

impl DatabaseArgs {
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            host: self.pg_host.clone(),
            port: self.pg_port,
            username: self.pg_username.clone(),
            password: self.pg_password.clone(),
            database: self.pg_dbname.clone(),
            database_url: self.database_url.clone(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            max_lifetime: Duration::from_secs(self.max_lifetime_secs),
            max_idle_time: Duration::from_secs(self.max_idle_secs),
            health_check_interval: Duration::from_secs(self.health_check_secs),
        }
    }
}

/// Listener settings for `serve`.
#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Origin allowed by CORS. Repeat the flag for several.
    #[arg(
        long = "allowed-origin",
        env = "CORS_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

impl ServerArgs {
    pub fn server_config(&self) -> api::ServerConfig {
        api::ServerConfig {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], self.port)),
            allowed_origins: self.allowed_origins.clone(),
        }
    }
}
