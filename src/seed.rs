//! Reference dataset and the full-replace seeding operation.

use tracing::info;

use crate::database::{PlanetStore, StoreResult};
use crate::models::PlanetRecord;

// id, name, description, velocity, distance
const REFERENCE_TABLE: [(i64, &str, &str, &str, &str); 10] = [
    (0, "Mercury", "Closest planet to the Sun", "47.9 km/s", "57.9 million km"),
    (1, "Venus", "Second planet", "35.0 km/s", "108.2 million km"),
    (2, "Earth", "Our home", "29.8 km/s", "149.6 million km"),
    (3, "Mars", "The Red Planet", "24.1 km/s", "227.9 million km"),
    (4, "Jupiter", "Gas giant", "13.1 km/s", "778.5 million km"),
    (5, "Saturn", "Has rings", "9.7 km/s", "1.43 billion km"),
    (6, "Uranus", "Ice giant", "6.8 km/s", "2.87 billion km"),
    (7, "Neptune", "Furthest planet", "5.4 km/s", "4.5 billion km"),
    (8, "Pluto", "Dwarf planet", "4.7 km/s", "5.9 billion km"),
    (9, "Sun", "Our star", "0", "0"),
];

/// The ten records written by [`seed`], ids 0 through 9.
pub fn reference_planets() -> Vec<PlanetRecord> {
    REFERENCE_TABLE
        .iter()
        .map(|&(id, name, description, velocity, distance)| {
            PlanetRecord::new(id, name, description, "", velocity, distance)
        })
        .collect()
}

/// Reset the store to exactly the reference dataset.
///
/// Not safe to run concurrently with itself. If the insert fails after the
/// delete went through, the store is left empty.
pub async fn seed(store: &dyn PlanetStore) -> StoreResult<usize> {
    info!("Seeding {} store with reference planets", store.backend().as_str());

    let planets = reference_planets();
    store.ensure_schema().await?;
    store.replace_all(&planets).await?;

    info!("Planet data seeded: {} records", planets.len());
    Ok(planets.len())
}
