//! Database connection resolution
//!
//! Two candidate PostgreSQL stores back the application. Exactly one is
//! selected per process lifetime by probing the primary candidate; the
//! resolved handle is cached and injected into application state, never
//! read through a global by the operations that use it.
//!
//! Selection policy (applied uniformly):
//! - probe `SELECT 1` on the primary candidate
//! - non-empty result: use primary
//! - empty result: primary is not serving, fall back to secondary
//! - any error: resolution fails and the process must not serve requests
//!
//! There is no retry and no re-probe after resolution. A connection that
//! drops later surfaces as a per-statement database error, not as a new
//! resolution attempt.

use crate::config::DatabaseConfig;
use crate::{Error, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tracing::info;

pub mod init;
pub mod models;
pub mod seed;

pub use init::init_schema;
pub use seed::seed_database;

/// Which candidate store was selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedStore {
    Primary,
    Secondary,
}

impl SelectedStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectedStore::Primary => "primary",
            SelectedStore::Secondary => "secondary",
        }
    }
}

/// The resolved connection handle
///
/// Wraps the pool for whichever store was selected. Cloning is cheap
/// (pool handles are reference-counted) and the handle is never mutated
/// after resolution, so it is shared freely across concurrent requests.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
    selected: SelectedStore,
}

impl Db {
    pub fn new(pool: PgPool, selected: SelectedStore) -> Self {
        Self { pool, selected }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn selected(&self) -> SelectedStore {
        self.selected
    }
}

static RESOLVED: OnceCell<Db> = OnceCell::const_new();

/// Resolve which backing store to use, once per process
///
/// The first caller performs the probe; later callers receive the cached
/// handle. The bootstrap calls this once and passes the handle into
/// application state.
pub async fn resolve_connection(config: &DatabaseConfig) -> Result<Db> {
    RESOLVED
        .get_or_try_init(|| resolve(config))
        .await
        .map(Clone::clone)
}

/// Interpret the liveness probe result
///
/// A non-empty row set means the primary store answered usefully; an empty
/// row set means it is reachable but not serving and the secondary takes
/// over. Probe errors are handled by the caller as fatal.
pub fn choose_store(probe_rows: usize) -> SelectedStore {
    if probe_rows == 0 {
        SelectedStore::Secondary
    } else {
        SelectedStore::Primary
    }
}

async fn resolve(config: &DatabaseConfig) -> Result<Db> {
    let primary = connect(&config.primary_url, "primary").await?;

    // Liveness probe against the primary candidate
    let rows = sqlx::query("SELECT 1")
        .fetch_all(&primary)
        .await
        .map_err(|e| {
            Error::ConnectionResolution(format!("liveness probe failed on primary: {}", e))
        })?;

    match choose_store(rows.len()) {
        SelectedStore::Primary => {
            info!("Using primary database connection");
            Ok(Db::new(primary, SelectedStore::Primary))
        }
        SelectedStore::Secondary => {
            info!("Primary probe returned no rows, using secondary database connection");
            let secondary = connect(&config.secondary_url, "secondary").await?;
            Ok(Db::new(secondary, SelectedStore::Secondary))
        }
    }
}

async fn connect(url: &str, label: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(url)
        .await
        .map_err(|e| Error::ConnectionResolution(format!("failed to connect to {}: {}", label, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_probe_selects_primary() {
        assert_eq!(choose_store(1), SelectedStore::Primary);
        assert_eq!(choose_store(5), SelectedStore::Primary);
    }

    #[test]
    fn test_empty_probe_selects_secondary() {
        assert_eq!(choose_store(0), SelectedStore::Secondary);
    }

    #[test]
    fn test_selected_store_labels() {
        assert_eq!(SelectedStore::Primary.as_str(), "primary");
        assert_eq!(SelectedStore::Secondary.as_str(), "secondary");
    }

    /// Live resolution test; requires a reachable postgres instance.
    /// Skips when the environment provides no database.
    #[tokio::test]
    async fn test_resolve_against_live_store() {
        let Ok(url) = std::env::var("LEDGER_TEST_DATABASE_URL") else {
            eprintln!("Skipping test: LEDGER_TEST_DATABASE_URL not set");
            return;
        };

        let config = DatabaseConfig {
            primary_url: url.clone(),
            secondary_url: url,
        };

        let db = resolve_connection(&config)
            .await
            .expect("Should resolve against live store");

        // SELECT 1 returns one row, so a live primary is always selected
        assert_eq!(db.selected(), SelectedStore::Primary);
    }
}
