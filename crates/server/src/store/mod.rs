mod firestore;
mod memory;

pub use firestore::*;
pub use memory::*;

use shared_types::{AppError, Collection, RawRecord, StoreBackend, StoreConfig};
use std::sync::OnceLock;

// ── Trait ────────────────────────────────────────────────────────────

/// Read access to the remote document store.
#[allow(async_fn_in_trait)]
pub trait RecordStore: Send + Sync {
    /// List every record in `collection`, in store order.
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError>;
}

// ── Configured store ─────────────────────────────────────────────────

/// The store selected by `[store] backend` in `config.toml`.
pub enum ConfiguredStore {
    Memory(MemoryStore),
    Firestore(FirestoreStore),
}

impl RecordStore for ConfiguredStore {
    async fn list_records(&self, collection: Collection) -> Result<Vec<RawRecord>, AppError> {
        match self {
            ConfiguredStore::Memory(store) => store.list_records(collection).await,
            ConfiguredStore::Firestore(store) => store.list_records(collection).await,
        }
    }
}

/// Build the store described by `config`.
pub fn build_store(config: &StoreConfig) -> Result<ConfiguredStore, AppError> {
    match config.backend {
        StoreBackend::Memory => {
            let store = match &config.seed_path {
                Some(path) => MemoryStore::from_seed_file(path)?,
                None => MemoryStore::new(),
            };
            Ok(ConfiguredStore::Memory(store))
        }
        StoreBackend::Firestore => FirestoreStore::from_config(config).map(ConfiguredStore::Firestore),
    }
}

static STORE: OnceLock<Result<ConfiguredStore, AppError>> = OnceLock::new();

/// The process-wide store, built on first use from the loaded configuration.
pub fn get_store() -> Result<&'static ConfiguredStore, AppError> {
    STORE
        .get_or_init(|| {
            let result = build_store(&crate::config::load_config().store);
            if let Err(e) = &result {
                tracing::error!(error = %e, "record store unavailable");
            }
            result
        })
        .as_ref()
        .map_err(Clone::clone)
}
