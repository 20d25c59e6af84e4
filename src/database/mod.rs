//! Record store for planet facts.
//!
//! The HTTP layer only ever reads through [`PlanetStore::find_by_id`]; the
//! seeding tool is the single writer and goes through
//! [`PlanetStore::replace_all`].

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::PlanetRecord;
use crate::settings::Settings;

mod memory;
mod postgres;
mod sql;
mod sqlite;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use sqlite::SqliteStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Unsupported database URL '{0}'")]
    UnsupportedUrl(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Create the planets table if it does not exist yet
    async fn ensure_schema(&self) -> StoreResult<()>;

    /// First record whose `id` matches exactly
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<PlanetRecord>>;

    /// Delete every record, then insert `records` in one statement.
    ///
    /// The two steps are not wrapped in a transaction: a failure after the
    /// delete leaves the collection empty.
    async fn replace_all(&self, records: &[PlanetRecord]) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<u64>;

    fn backend(&self) -> Backend;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
    Memory,
}

impl Backend {
    pub fn from_url(url: &str) -> Option<Self> {
        let scheme = url.split(':').next()?;
        match scheme {
            "sqlite" => Some(Backend::Sqlite),
            "postgres" | "postgresql" => Some(Backend::Postgres),
            "memory" => Some(Backend::Memory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Sqlite => "sqlite",
            Backend::Postgres => "postgres",
            Backend::Memory => "memory",
        }
    }
}

/// Open the store named by `settings.database_url`.
///
/// SQL pools connect lazily, so an unreachable database does not stop the
/// server from starting; lookups fail individually instead.
pub fn connect(settings: &Settings) -> StoreResult<Arc<dyn PlanetStore>> {
    let url = settings.database_url.as_str();
    let backend =
        Backend::from_url(url).ok_or_else(|| StoreError::UnsupportedUrl(url.to_string()))?;

    if backend != Backend::Postgres && settings.credentials().is_some() {
        warn!("Database credentials are ignored by the {} backend", backend.as_str());
    }

    let store: Arc<dyn PlanetStore> = match backend {
        Backend::Sqlite => Arc::new(SqliteStore::connect_lazy(
            url,
            settings.database_max_connections,
        )?),
        Backend::Postgres => Arc::new(PostgresStore::connect_lazy(
            url,
            settings.credentials(),
            settings.database_max_connections,
        )?),
        Backend::Memory => Arc::new(MemoryStore::new()),
    };

    info!("Record store configured with {} backend", backend.as_str());
    Ok(store)
}
