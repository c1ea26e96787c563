//! Postgres connection pool.
//!
//! [`DbPool`] is an explicit handle built once at startup and cloned into
//! whatever needs it. Cloning is cheap; every clone shares the same
//! connections and the same background health check.

use std::sync::Arc;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgPool, Postgres};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::DbError;

/// Everything needed to reach the store and size the pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Full `postgres://` URL. When present it replaces the five fields above.
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: Duration,
    pub max_idle_time: Duration,
    pub health_check_interval: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            username: "admin".to_string(),
            password: "admin".to_string(),
            database: "expense_tracker".to_string(),
            database_url: None,
            max_connections: 10,
            min_connections: 2,
            max_lifetime: Duration::from_secs(30 * 60),
            max_idle_time: Duration::from_secs(10 * 60),
            health_check_interval: Duration::from_secs(2 * 60),
        }
    }
}

impl PoolConfig {
    /// Resolve the connection target, rejecting sizing that can never work.
    pub fn connect_options(&self) -> Result<PgConnectOptions, DbError> {
        if self.max_connections == 0 {
            return Err(DbError::InvalidTarget(
                "max_connections must be at least 1".to_string(),
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(DbError::InvalidTarget(format!(
                "min_connections ({}) exceeds max_connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.health_check_interval.is_zero() {
            return Err(DbError::InvalidTarget(
                "health_check_interval must be non-zero".to_string(),
            ));
        }

        match &self.database_url {
            Some(url) => url
                .parse::<PgConnectOptions>()
                .map_err(|e| DbError::InvalidTarget(e.to_string())),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.username)
                .password(&self.password)
                .database(&self.database)),
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .max_lifetime(self.max_lifetime)
            .idle_timeout(self.max_idle_time)
            .test_before_acquire(true)
    }
}

/// Shared handle to the bounded Postgres pool.
#[derive(Clone)]
pub struct DbPool {
    pool: PgPool,
    monitor: Arc<HealthMonitor>,
}

impl DbPool {
    /// Connect, ping once, and start the background health check.
    pub async fn open(config: &PoolConfig) -> Result<Self, DbError> {
        let options = config.connect_options()?;
        info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting to database"
        );

        let pool = config
            .pool_options()
            .connect_with(options)
            .await
            .map_err(DbError::Connectivity)?;

        let mut conn = pool.acquire().await.map_err(DbError::Connectivity)?;
        conn.ping().await.map_err(DbError::Connectivity)?;
        drop(conn);
        info!("Successfully connected to database");

        Ok(Self::with_monitor(pool, config.health_check_interval))
    }

    /// Build the pool without connecting. Connections open on first use.
    pub fn open_lazy(config: &PoolConfig) -> Result<Self, DbError> {
        let options = config.connect_options()?;
        let pool = config.pool_options().connect_lazy_with(options);
        Ok(Self::with_monitor(pool, config.health_check_interval))
    }

    fn with_monitor(pool: PgPool, interval: Duration) -> Self {
        let handle = tokio::spawn(health_check(pool.clone(), interval));
        Self {
            pool,
            monitor: Arc::new(HealthMonitor(handle)),
        }
    }

    /// Check out a connection for one unit of work.
    ///
    /// The connection goes back to the pool when the guard is dropped, on
    /// success and failure paths alike.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, DbError> {
        Ok(self.pool.acquire().await?)
    }

    /// Stop the health check and close every connection. Safe to call twice.
    pub async fn close(&self) {
        self.monitor.0.abort();
        if !self.pool.is_closed() {
            info!("Closing database pool");
        }
        self.pool.close().await;
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Underlying sqlx pool, for callers that want to run ad-hoc statements.
    pub fn inner(&self) -> &PgPool {
        &self.pool
    }
}

struct HealthMonitor(JoinHandle<()>);

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Ping every idle connection once per `interval`; a connection that fails
/// its ping is closed instead of being returned.
async fn health_check(pool: PgPool, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    ticker.tick().await;

    loop {
        ticker.tick().await;
        if pool.is_closed() {
            break;
        }

        let mut evicted = 0usize;
        for _ in 0..pool.num_idle() {
            let Some(mut conn) = pool.try_acquire() else {
                break;
            };
            if let Err(e) = conn.ping().await {
                warn!(error = %e, "Evicting unhealthy connection");
                conn.close_on_drop();
                evicted += 1;
            }
        }
        debug!(size = pool.size(), evicted, "Pool health check complete");
    }
}
