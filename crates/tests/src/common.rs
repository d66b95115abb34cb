use serde_json::{json, Value};
use server::store::{MemoryStore, RecordStore};
use shared_types::{AppError, Collection, RawRecord};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Turn a JSON object literal into a record.
pub fn record(value: Value) -> RawRecord {
    value.as_object().cloned().unwrap_or_default()
}

/// School records with the given `city` fields; `None` omits the field.
pub fn schools(cities: &[Option<&str>]) -> Vec<RawRecord> {
    cities
        .iter()
        .enumerate()
        .map(|(i, city)| match city {
            Some(city) => record(json!({ "name": format!("School {i}"), "city": city })),
            None => record(json!({ "name": format!("School {i}") })),
        })
        .collect()
}

/// `count` placeholder records for collections where only the size matters.
pub fn anonymous(count: usize) -> Vec<RawRecord> {
    (0..count).map(|i| record(json!({ "id": i }))).collect()
}

pub fn seeded_store(
    schools: Vec<RawRecord>,
    users: Vec<RawRecord>,
    agencies: Vec<RawRecord>,
) -> MemoryStore {
    MemoryStore::new()
        .with_records(Collection::Schools, schools)
        .with_records(Collection::Users, users)
        .with_records(Collection::Agencies, agencies)
}

/// Wraps a [`MemoryStore`] and holds one collection's listing until
/// [`GatedStore::release`] is called. Records every request made.
pub struct GatedStore {
    inner: MemoryStore,
    gated: Collection,
    gate: Notify,
    requested: Mutex<Vec<Collection>>,
    answered: Mutex<Vec<Collection>>,
}

impl GatedStore {
    pub fn new(inner: MemoryStore, gated: Collection) -> Self {
        Self {
            inner,
            gated,
            gate: Notify::new(),
            requested: Mutex::new(Vec::new()),
            answered: Mutex::new(Vec::new()),
        }
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn requested(&self) -> Vec<Collection> {
        self.requested.lock().unwrap().clone()
    }

    pub fn answered(&self) -> Vec<Collection> {
        self.answered.lock().unwrap().clone()
    }
}

impl RecordStore for GatedStore {
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError> {
        self.requested.lock().unwrap().push(collection);
        if collection == self.gated {
            self.gate.notified().await;
        }
        let result = self.inner.list_records(collection).await;
        self.answered.lock().unwrap().push(collection);
        result
    }
}

/// Fails one collection and never answers the others.
pub struct FailingStore {
    pub failing: Collection,
}

impl RecordStore for FailingStore {
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError> {
        if collection == self.failing {
            return Err(AppError::fetch_failure(format!("Loading {collection} failed")));
        }
        std::future::pending().await
    }
}
