use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::{Backend, PlanetStore, StoreError, StoreResult};
use crate::models::PlanetRecord;

/// Process-local store keyed by planet id.
///
/// `set_unavailable(true)` makes every call fail with
/// [`StoreError::Unavailable`], which is how the HTTP tests exercise the
/// 500 path.
#[derive(Default)]
pub struct MemoryStore {
    planets: RwLock<BTreeMap<i64, PlanetRecord>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store is offline".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlanetStore for MemoryStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.check_available()
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<PlanetRecord>> {
        self.check_available()?;
        Ok(self.planets.read().await.get(&id).cloned())
    }

    async fn replace_all(&self, records: &[PlanetRecord]) -> StoreResult<()> {
        self.check_available()?;

        let mut planets = self.planets.write().await;
        planets.clear();
        for planet in records {
            // Keep the first record for a repeated id, like a first-match lookup would
            planets.entry(planet.id).or_insert_with(|| planet.clone());
        }
        Ok(())
    }

    async fn count(&self) -> StoreResult<u64> {
        self.check_available()?;
        Ok(self.planets.read().await.len() as u64)
    }

    fn backend(&self) -> Backend {
        Backend::Memory
    }
}
