use arena_core::store::Result;
use arena_core::{Fighter, FighterEdit, FighterName, FighterStore, StorageError};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory storage entry for a fighter.
#[derive(Debug, Clone)]
struct Entry {
    /// Insertion sequence number, used to keep `list` in creation order.
    seq: u64,
    fighter: Fighter,
}

/// In-memory implementation of [`FighterStore`] using DashMap.
///
/// Records are keyed by name. DashMap's sharded locks serialize mutations
/// on the same name while letting unrelated names proceed concurrently, and
/// readers only ever see a record before or after a mutation.
#[derive(Debug)]
pub struct InMemoryStore {
    storage: DashMap<String, Entry>,
    next_seq: AtomicU64,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_seq: AtomicU64::new(0),
        }
    }

    /// Returns the number of stored fighters.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FighterStore for InMemoryStore {
    async fn list(&self) -> Result<Vec<Fighter>> {
        let mut entries: Vec<Entry> = self
            .storage
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|entry| entry.seq);

        Ok(entries.into_iter().map(|entry| entry.fighter).collect())
    }

    async fn get(&self, name: &FighterName) -> Result<Option<Fighter>> {
        Ok(self
            .storage
            .get(name.as_str())
            .map(|entry| entry.fighter.clone()))
    }

    async fn insert(&self, fighter: Fighter) -> Result<()> {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.storage.entry(fighter.name.as_str().to_owned()) {
            MapEntry::Occupied(_) => Err(StorageError::Conflict(fighter.name.to_string())),
            MapEntry::Vacant(slot) => {
                let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
                slot.insert(Entry { seq, fighter });
                Ok(())
            }
        }
    }

    async fn modify(&self, name: &FighterName, edit: FighterEdit) -> Result<Option<Fighter>> {
        let Some(mut entry) = self.storage.get_mut(name.as_str()) else {
            return Ok(None);
        };

        entry.fighter.apply_edit(edit);
        Ok(Some(entry.fighter.clone()))
    }

    async fn remove(&self, name: &FighterName) -> Result<Option<Fighter>> {
        Ok(self
            .storage
            .remove(name.as_str())
            .map(|(_, entry)| entry.fighter))
    }
}
