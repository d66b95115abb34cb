use serde::Deserialize;
use shared_types::{AppError, Collection, RawRecord};
use std::collections::HashMap;
use std::path::Path;

use super::RecordStore;

/// Collections held in process memory.
///
/// Backs local development (seeded from a JSON file) and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, Vec<RawRecord>>,
}

/// Seed file layout: one array of documents per collection.
#[derive(Debug, Deserialize)]
struct Seed {
    #[serde(default)]
    schools: Vec<RawRecord>,
    #[serde(default)]
    users: Vec<RawRecord>,
    #[serde(default)]
    agencies: Vec<RawRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents of `collection`.
    pub fn with_records(mut self, collection: Collection, records: Vec<RawRecord>) -> Self {
        self.collections.insert(collection, records);
        self
    }

    pub fn insert(&mut self, collection: Collection, record: RawRecord) {
        self.collections.entry(collection).or_default().push(record);
    }

    pub fn len(&self, collection: Collection) -> usize {
        self.collections.get(&collection).map_or(0, Vec::len)
    }

    /// Parse a seed document such as `{"schools": [{"city": "Riyadh"}]}`.
    /// Missing collections are empty.
    pub fn from_seed_json(json: &str) -> Result<Self, AppError> {
        let seed: Seed = serde_json::from_str(json)
            .map_err(|e| AppError::store_unavailable(format!("Invalid seed data: {e}")))?;
        Ok(Self::new()
            .with_records(Collection::Schools, seed.schools)
            .with_records(Collection::Users, seed.users)
            .with_records(Collection::Agencies, seed.agencies))
    }

    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            AppError::store_unavailable(format!("Cannot read seed file {}: {e}", path.display()))
        })?;
        let store = Self::from_seed_json(&json)?;
        tracing::info!(
            path = %path.display(),
            schools = store.len(Collection::Schools),
            users = store.len(Collection::Users),
            agencies = store.len(Collection::Agencies),
            "seeded memory store"
        );
        Ok(store)
    }
}

impl RecordStore for MemoryStore {
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError> {
        Ok(self.collections.get(&collection).cloned().unwrap_or_default())
    }
}
