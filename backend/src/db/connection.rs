use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::Config;

pub type DbPool = PgPool;

#[derive(Debug, Clone, Copy)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&Config> for PoolConfig {
    fn from(config: &Config) -> Self {
        Self {
            max_connections: config.database.max_connections.max(1),
            acquire_timeout: Duration::from_secs(config.database.acquire_timeout_secs),
        }
    }
}

const SET_TIME_ZONE_SQL: &str = "SELECT set_config('TimeZone', $1, false)";

/// Opens the shared pool. Connections are checked out per statement and
/// returned to the pool when the guard drops, on success and error alike.
/// Every new session switches to the plant time zone so `NOW()` and
/// `CURRENT_DATE` follow local time.
pub async fn create_pool(config: &Config) -> anyhow::Result<DbPool> {
    let options = config.database.connect_options()?;
    let pool_config = PoolConfig::from(config);
    let time_zone = config.time_zone.name();
    let pool = PgPoolOptions::new()
        .max_connections(pool_config.max_connections)
        .acquire_timeout(pool_config.acquire_timeout)
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                sqlx::query(SET_TIME_ZONE_SQL)
                    .bind(time_zone)
                    .execute(conn)
                    .await
                    .map(|_| ())
            })
        })
        .connect_with(options)
        .await?;
    tracing::info!(
        target = %config.database.display_target(),
        time_zone,
        max_connections = pool_config.max_connections,
        "Database pool ready"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_config_never_drops_below_one_connection() {
        let mut config = crate::test_support::sample_config();
        config.database.max_connections = 0;
        config.database.acquire_timeout_secs = 3;
        let pool_config = PoolConfig::from(&config);
        assert_eq!(pool_config.max_connections, 1);
        assert_eq!(pool_config.acquire_timeout, Duration::from_secs(3));
    }
}
