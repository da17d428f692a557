//! Database connection pool management

use anyhow::{Context, Result};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool,
};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::config::Settings;
use crate::domain::{auth_users, users};

struct CachedPool {
    url: String,
    pool: PgPool,
}

// One pool per process, built on first use. Guarded so concurrent first
// callers cannot race two pools into existence.
static CONNECTOR: Mutex<Option<CachedPool>> = Mutex::const_new(None);

/// Returns the process-wide connection pool, constructing it lazily.
///
/// The pool is cached by database URL; asking for a different URL tears the
/// cache down and connects anew.
pub async fn pool(settings: &Settings) -> Result<PgPool> {
    let mut slot = CONNECTOR.lock().await;
    if let Some(cached) = slot.as_ref() {
        if cached.url == settings.database_url {
            return Ok(cached.pool.clone());
        }
    }

    let pool = create_pool(settings).await?;
    *slot = Some(CachedPool {
        url: settings.database_url.clone(),
        pool: pool.clone(),
    });
    Ok(pool)
}

/// Create a PostgreSQL connection pool with optimized settings
pub async fn create_pool(settings: &Settings) -> Result<PgPool> {
    let connect_options = PgConnectOptions::from_str(&settings.database_url)
        .context("Invalid DATABASE_URL")?
        .application_name("addressbook-backend");

    let pool = PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .connect_with(connect_options)
        .await
        .context("Failed to connect to PostgreSQL")?;

    tracing::info!(
        max_connections = settings.database_max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}

/// Auto-creates the mapped tables at startup when they do not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for ddl in [users::create_table_sql(), auth_users::create_table_sql()] {
        sqlx::query(&ddl)
            .execute(pool)
            .await
            .context("Failed to create table")?;
    }

    tracing::info!("Database schema ensured");
    Ok(())
}

/// Lightweight health check for database connectivity
pub async fn health_check(pool: &PgPool) -> bool {
    sqlx::query("SELECT 1").fetch_one(pool).await.is_ok()
}
