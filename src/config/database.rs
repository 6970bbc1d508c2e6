use crate::core::{AppError, Result};
use crate::persistence::{MemoryStore, Store};
use sqlx::mysql::MySqlPoolOptions;
use std::env;
use std::time::Duration;

/// Persistence settings. Without a URL the service runs on the in-memory store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub pool_size: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            pool_size: env::var("DATABASE_POOL_SIZE")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_POOL_SIZE"))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_MAX_CONNECTIONS"))?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.pool_size == 0 || self.max_connections == 0 {
            return Err(AppError::configuration(
                "Database pool sizes must be greater than 0",
            ));
        }
        if self.pool_size > self.max_connections {
            return Err(AppError::configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS",
            ));
        }
        Ok(())
    }

    /// Open the configured store, running pending migrations against MySQL
    pub async fn connect(&self) -> Result<Store> {
        let Some(url) = &self.url else {
            return Ok(Store::Memory(MemoryStore::new()));
        };

        let pool = MySqlPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.pool_size)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600)) // 10 minutes
            .max_lifetime(Duration::from_secs(1800)) // 30 minutes
            .test_before_acquire(true)
            .connect(url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Store::MySql(pool))
    }
}
