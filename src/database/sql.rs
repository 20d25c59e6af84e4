//! Statements shared by the SQL backends.

use sqlx::{database::HasArguments, Database, Encode, QueryBuilder, Type};

use crate::models::PlanetRecord;

pub(super) const DELETE_PLANETS: &str = "DELETE FROM planets";
pub(super) const COUNT_PLANETS: &str = "SELECT COUNT(*) FROM planets";

/// `CREATE TABLE` for the planets table; only the id column type differs
/// between backends.
pub(super) fn create_planets_table(id_type: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS planets (
            id {id_type} PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            image TEXT NOT NULL DEFAULT '',
            velocity TEXT NOT NULL,
            distance TEXT NOT NULL
        )"
    )
}

/// One multi-row `INSERT` for all of `records`. Callers must skip the
/// insert when `records` is empty.
pub(super) fn insert_planets<'args, DB>(records: &[PlanetRecord]) -> QueryBuilder<'args, DB>
where
    DB: Database,
    <DB as HasArguments<'args>>::Arguments: Default,
    i64: Encode<'args, DB> + Type<DB>,
    String: Encode<'args, DB> + Type<DB>,
{
    let mut insert = QueryBuilder::new(
        "INSERT INTO planets (id, name, description, image, velocity, distance) ",
    );
    insert.push_values(records, |mut row, planet| {
        row.push_bind(planet.id)
            .push_bind(planet.name.clone())
            .push_bind(planet.description.clone())
            .push_bind(planet.image.clone())
            .push_bind(planet.velocity.clone())
            .push_bind(planet.distance.clone());
    });
    insert
}

/// `COUNT(*)` comes back as a signed integer from both backends
pub(super) fn row_count(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}
