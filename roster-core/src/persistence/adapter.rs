use roster_model::{ActiveSortList, FieldPriorityOrder, SortCriterion, SortField};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use super::{KeyValueStore, PersistenceError, PersistenceResult, Slot, SlotKeys};

/// Typed access to the two sort state slots of a [`KeyValueStore`].
///
/// Loads never fail: a slot that cannot be read or decoded is logged,
/// cleared and replaced by the default. Saves log and swallow errors.
#[derive(Debug)]
pub struct SortStatePersistence<S> {
    store: S,
    keys: SlotKeys,
}

impl<S: KeyValueStore> SortStatePersistence<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, SlotKeys::default())
    }

    pub fn with_keys(store: S, keys: SlotKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &SlotKeys {
        &self.keys
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Decode the JSON held in `slot`
    pub fn read<T: DeserializeOwned>(&self, slot: Slot) -> PersistenceResult<Option<T>> {
        let key = self.keys.key(slot);
        let Some(raw) = self.store.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| PersistenceError::Corrupted {
                key: key.to_string(),
                source,
            })
    }

    /// Encode `value` as JSON into `slot`
    pub fn write<T: Serialize + ?Sized>(&mut self, slot: Slot, value: &T) -> PersistenceResult<()> {
        let key = self.keys.key(slot);
        let json = serde_json::to_string(value).map_err(|source| PersistenceError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }

    pub fn clear(&mut self, slot: Slot) -> PersistenceResult<()> {
        let key = self.keys.key(slot);
        self.store.remove(key)
    }

    /// Saved active criteria, or an empty list
    pub fn load_active_sorts(&mut self) -> ActiveSortList {
        let loaded = self
            .read::<Vec<SortCriterion>>(Slot::ActiveSorts)
            .and_then(|saved| match saved {
                None => Ok(None),
                Some(criteria) => ActiveSortList::try_from(criteria).map(Some).map_err(|err| {
                    PersistenceError::InvalidState {
                        key: self.keys.active_sorts.clone(),
                        reason: err.to_string(),
                    }
                }),
            });
        self.recover(Slot::ActiveSorts, loaded).unwrap_or_default()
    }

    /// Saved priority order completed against `base`, or `base` itself
    pub fn load_field_order(&mut self, base: &FieldPriorityOrder) -> FieldPriorityOrder {
        let loaded = self
            .read::<Vec<SortField>>(Slot::FieldOrder)
            .and_then(|saved| match saved {
                None => Ok(None),
                Some(fields) => FieldPriorityOrder::from_partial(&fields, base)
                    .map(Some)
                    .map_err(|err| PersistenceError::InvalidState {
                        key: self.keys.field_order.clone(),
                        reason: err.to_string(),
                    }),
            });
        self.recover(Slot::FieldOrder, loaded)
            .unwrap_or_else(|| base.clone())
    }

    pub fn save_active_sorts(&mut self, active: &ActiveSortList) {
        if let Err(err) = self.write(Slot::ActiveSorts, active) {
            error!("failed to persist active sorts: {err}");
        }
    }

    pub fn save_field_order(&mut self, order: &FieldPriorityOrder) {
        if let Err(err) = self.write(Slot::FieldOrder, order) {
            error!("failed to persist field order: {err}");
        }
    }

    fn recover<T>(&mut self, slot: Slot, loaded: PersistenceResult<Option<T>>) -> Option<T> {
        match loaded {
            Ok(Some(value)) => {
                debug!(key = self.keys.key(slot), "restored sort state");
                Some(value)
            }
            Ok(None) => None,
            Err(err) => {
                warn!("discarding saved sort state: {err}");
                if let Err(err) = self.clear(slot) {
                    error!("failed to clear {}: {err}", self.keys.key(slot));
                }
                None
            }
        }
    }
}
