//! Local key-value storage backing the registration ledger.
//!
//! The ledger only ever needs the two primitives browsers expose on
//! `window.localStorage`: read a string by key and replace it wholesale.
//! Three backends implement that surface:
//!
//! - [`MemoryStore`] - process-local map, used by tests
//! - [`RedbStore`] - ACID file store for the desktop app
//! - [`WebStore`] - the browser's `localStorage` (feature `web`)

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::WaitlistError;

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// String key-value storage with whole-value replace semantics.
///
/// There is no partial update and no locking across writers: a
/// read-modify-write by two processes is last-writer-wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError>;

    /// Replace the value stored under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError>;
}

/// In-memory store. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Desktop store using redb for ACID-compliant persistence.
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<RwLock<Database>>,
}

impl RedbStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates the parent directory and the `local_storage` table if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WaitlistError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "Opened local storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for RedbStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// The browser's `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Default)]
pub struct WebStore;

#[cfg(feature = "web")]
impl KeyValueStore for WebStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, WaitlistError> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| WaitlistError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), WaitlistError> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| WaitlistError::StorageUnavailable(format!("{:?}", e)))
    }
}
