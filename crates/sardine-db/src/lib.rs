pub mod error;
pub mod migrations;
pub mod queries;
pub mod seed;
pub mod store;

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;

pub use error::{Result, StoreError};
pub use queries::CanFilter;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

pub const CANS_KEY: &str = "subway_sardine_cans_v1";
pub const RELEASED_KEY: &str = "subway_sardine_released_v1";

/// Repository over two append-only collections: sealed cans and the
/// sardines released in response to them.
///
/// Nothing is cached. Every call re-reads the backing store. Writes hold
/// `writer` across the whole read-prepend-write so concurrent saves cannot
/// overwrite each other.
pub struct SardineDb {
    store: Box<dyn KeyValueStore>,
    writer: Mutex<()>,
}

impl SardineDb {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            writer: Mutex::new(()),
        }
    }

    /// Seed the can collection if it has never been written.
    /// Returns `true` when seeding happened.
    pub fn init(&self) -> Result<bool> {
        let _writer = self.lock_writer()?;
        self.seed_if_empty()
    }

    fn lock_writer(&self) -> Result<MutexGuard<'_, ()>> {
        self.writer.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Caller must hold `writer`.
    fn seed_if_empty(&self) -> Result<bool> {
        if self.store.get(CANS_KEY)?.is_some() {
            return Ok(false);
        }

        let seeds = seed::seed_cans();
        self.write_collection(CANS_KEY, &seeds)?;
        info!("Seeded {} example cans", seeds.len());
        Ok(true)
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Vec<T>>> {
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.store.set(key, &raw)
    }

    /// Put `record` in front of the stored collection and write it back.
    /// Caller must hold `writer`.
    fn prepend<T: Serialize + DeserializeOwned>(&self, key: &str, record: T) -> Result<usize> {
        let existing: Vec<T> = self.read_collection(key)?.unwrap_or_default();
        let mut updated = Vec::with_capacity(existing.len() + 1);
        updated.push(record);
        updated.extend(existing);
        self.write_collection(key, &updated)?;
        Ok(updated.len())
    }
}
