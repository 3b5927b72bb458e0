//! Connection pool lifecycle
//!
//! The pool is built once by [`connect`] before the listener binds, cloned
//! into every repository, and closed by the caller after `run_server`
//! returns. Connections go back to the pool when each query's future
//! completes or is dropped, so a timed-out request cannot leak one.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::schema;

/// Pool size used when the operator does not pick one.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a handler waits for a free connection before failing with a
/// storage error.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Open the pool and create any missing tables.
///
/// Either failure is fatal for startup; nothing is served on a pool that
/// could not bootstrap the schema.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections.max(1))
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;

    tracing::info!(max_connections, "Database pool ready");

    if let Err(e) = schema::bootstrap(&pool).await {
        pool.close().await;
        return Err(e);
    }

    Ok(pool)
}
