//! Postgres-backed repository implementations.

mod detached;
mod posts;
mod translations;
mod util;

pub use detached::DetachedStore;
pub use util::map_sqlx_error;

use std::{sync::Arc, time::Duration};

use sqlx::postgres::{PgPool, PgPoolOptions};

#[derive(Clone)]
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Build a pool without touching the network.
    ///
    /// Connections open on first use, so an unreachable store surfaces as a
    /// per-query error that callers degrade instead of a startup failure.
    pub fn connect_lazy(
        url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<PgPool, sqlx::Error> {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_lazy(url)
    }
}
