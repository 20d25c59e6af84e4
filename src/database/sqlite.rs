use async_trait::async_trait;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use std::str::FromStr;

use super::{sql, Backend, PlanetStore, StoreResult};
use crate::models::PlanetRecord;

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn connect_lazy(url: &str, max_connections: u32) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(options);

        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetStore for SqliteStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(&sql::create_planets_table("INTEGER"))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<PlanetRecord>> {
        let planet = sqlx::query_as::<_, PlanetRecord>(
            "SELECT id, name, description, image, velocity, distance
             FROM planets WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(planet)
    }

    async fn replace_all(&self, records: &[PlanetRecord]) -> StoreResult<()> {
        sqlx::query(sql::DELETE_PLANETS).execute(&self.pool).await?;

        if records.is_empty() {
            return Ok(());
        }

        let mut insert = sql::insert_planets::<Sqlite>(records);
        insert.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar(sql::COUNT_PLANETS)
            .fetch_one(&self.pool)
            .await?;

        Ok(sql::row_count(count))
    }

    fn backend(&self) -> Backend {
        Backend::Sqlite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    // A single long-lived connection keeps the in-memory database alive
    async fn memory_store() -> SqliteStore {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        SqliteStore::from_pool(pool)
    }

    fn mars() -> PlanetRecord {
        PlanetRecord::new(3, "Mars", "The Red Planet", "", "24.1 km/s", "227.9 million km")
    }

    #[tokio::test]
    async fn lookup_before_schema_is_an_error() {
        let store = memory_store().await;
        assert_err!(store.find_by_id(3).await);
    }

    #[tokio::test]
    async fn replace_all_then_find() {
        let store = memory_store().await;
        assert_ok!(store.ensure_schema().await);
        assert_ok!(store.replace_all(&[mars()]).await);

        let found = store.find_by_id(3).await.unwrap();
        assert_eq!(found, Some(mars()));
        assert_eq!(store.find_by_id(4).await.unwrap(), None);
    }

    #[tokio::test]
    async fn replace_all_discards_previous_rows() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();

        let pluto = PlanetRecord::new(8, "Pluto", "Dwarf planet", "", "4.7 km/s", "5.9 billion km");
        store.replace_all(&[mars(), pluto]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 2);

        store.replace_all(&[mars()]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.find_by_id(8).await.unwrap(), None);

        store.replace_all(&[]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ensure_schema_is_repeatable() {
        let store = memory_store().await;
        assert_ok!(store.ensure_schema().await);
        assert_ok!(store.ensure_schema().await);
    }

    #[tokio::test]
    async fn duplicate_ids_are_rejected() {
        let store = memory_store().await;
        store.ensure_schema().await.unwrap();
        assert_err!(store.replace_all(&[mars(), mars()]).await);
    }
}
