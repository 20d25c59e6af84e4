use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::database::{PlanetStore, StoreError};
use crate::models::PlanetRecord;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Planet {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Keyed reads against the record store. Every call goes to the store.
#[derive(Clone)]
pub struct LookupService {
    store: Arc<dyn PlanetStore>,
}

impl LookupService {
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self { store }
    }

    pub async fn find_planet(&self, id: i64) -> Result<PlanetRecord, LookupError> {
        debug!(planet_id = id, "Looking up planet");

        self.store
            .find_by_id(id)
            .await?
            .ok_or(LookupError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::seed::reference_planets;

    async fn seeded() -> (Arc<MemoryStore>, LookupService) {
        let store = Arc::new(MemoryStore::new());
        store.replace_all(&reference_planets()).await.unwrap();
        let service = LookupService::new(store.clone());
        (store, service)
    }

    #[tokio::test]
    async fn finds_seeded_planet() {
        let (_, service) = seeded().await;

        let mars = service.find_planet(3).await.unwrap();
        assert_eq!(mars.name, "Mars");
        assert_eq!(mars.id, 3);
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let (_, service) = seeded().await;

        let err = service.find_planet(99).await.unwrap_err();
        assert!(matches!(err, LookupError::NotFound(99)));
    }

    #[tokio::test]
    async fn store_failure_is_distinct_from_not_found() {
        let (store, service) = seeded().await;
        store.set_unavailable(true);

        let err = service.find_planet(0).await.unwrap_err();
        assert!(matches!(err, LookupError::Store(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn repeated_lookups_return_the_same_record() {
        let (_, service) = seeded().await;

        let first = service.find_planet(8).await.unwrap();
        let second = service.find_planet(8).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.name, "Pluto");
    }
}
