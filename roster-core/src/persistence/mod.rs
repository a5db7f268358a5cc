//! Sort state persistence
//!
//! The engine keeps two slots in an opaque string key-value store: the
//! active criteria and the field priority order, each as JSON.

mod adapter;
mod file;
mod memory;

pub use adapter::SortStatePersistence;
pub use file::FileStore;
pub use memory::MemoryStore;

use std::io;

use thiserror::Error;

/// Default key for the active sort criteria
pub const ACTIVE_SORTS_KEY: &str = "clientTableSorts";
/// Default key for the field priority order
pub const FIELD_ORDER_KEY: &str = "clientTableSortOptionsOrder";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),

    #[error("failed to read {key}: {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {key}: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("stored value for {key} is not valid JSON: {source}")]
    Corrupted {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stored value for {key} is invalid: {reason}")]
    InvalidState { key: String, reason: String },

    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// String key-value storage
pub trait KeyValueStore {
    /// Value stored under `key`, `None` when absent
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()>;

    /// Remove `key`; removing an absent key succeeds
    fn remove(&mut self, key: &str) -> PersistenceResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> PersistenceResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> PersistenceResult<()> {
        (**self).remove(key)
    }
}

/// The two persisted slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    ActiveSorts,
    FieldOrder,
}

/// Storage keys for each [`Slot`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotKeys {
    pub active_sorts: String,
    pub field_order: String,
}

impl SlotKeys {
    pub fn key(&self, slot: Slot) -> &str {
        match slot {
            Slot::ActiveSorts => &self.active_sorts,
            Slot::FieldOrder => &self.field_order,
        }
    }
}

impl Default for SlotKeys {
    fn default() -> Self {
        Self {
            active_sorts: ACTIVE_SORTS_KEY.to_string(),
            field_order: FIELD_ORDER_KEY.to_string(),
        }
    }
}
