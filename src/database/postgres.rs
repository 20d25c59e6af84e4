use async_trait::async_trait;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    PgPool, Postgres,
};
use std::str::FromStr;

use super::{sql, Backend, PlanetStore, StoreResult};
use crate::models::PlanetRecord;

#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn connect_lazy(
        url: &str,
        credentials: Option<(&str, &str)>,
        max_connections: u32,
    ) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy_with(connect_options(url, credentials)?);

        Ok(Self { pool })
    }
}

/// Parse `url`; credentials, when given, replace any user info in it
fn connect_options(url: &str, credentials: Option<(&str, &str)>) -> StoreResult<PgConnectOptions> {
    let options = PgConnectOptions::from_str(url)?;

    Ok(match credentials {
        Some((username, password)) => options.username(username).password(password),
        None => options,
    })
}

#[async_trait]
impl PlanetStore for PostgresStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(&sql::create_planets_table("BIGINT"))
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<PlanetRecord>> {
        let planet = sqlx::query_as::<_, PlanetRecord>(
            "SELECT id, name, description, image, velocity, distance
             FROM planets WHERE id = $1 LIMIT 1",
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

        let mut insert = sql::insert_planets::<Postgres>(records);
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
        Backend::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_set_the_user() {
        let options =
            connect_options("postgres://localhost:5432/solar-system", Some(("admin", "secret")))
                .unwrap();
        assert_eq!(options.get_username(), "admin");
        assert_eq!(options.get_database(), Some("solar-system"));
        assert_eq!(options.get_port(), 5432);
    }

    #[test]
    fn credentials_replace_url_user() {
        let options =
            connect_options("postgres://guest:guest@db:5432/solar-system", Some(("admin", "secret")))
                .unwrap();
        assert_eq!(options.get_username(), "admin");
    }

    #[test]
    fn url_user_kept_without_credentials() {
        let options = connect_options("postgres://guest@db/solar-system", None).unwrap();
        assert_eq!(options.get_username(), "guest");
        assert_eq!(options.get_host(), "db");
    }

    #[test]
    fn malformed_url_is_an_error() {
        assert!(connect_options("postgres://db:not-a-port/x", None).is_err());
    }

    #[tokio::test]
    async fn lazy_pool_needs_no_server() {
        let store = PostgresStore::connect_lazy(
            "postgres://localhost:1/solar-system",
            Some(("admin", "secret")),
            2,
        )
        .unwrap();
        assert_eq!(store.backend(), Backend::Postgres);
    }
}
