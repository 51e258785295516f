//! # Record Store
//!
//! Ordered in-memory collection of one record type, looked up by id with a
//! linear scan. Lookups are "first match wins": duplicate ids may coexist and
//! only the earliest is reachable through `get`, `replace` and `delete`.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::errors::{RecordError, RecordResult};
use super::types::Record;

/// In-memory record collection guarded by a per-collection lock
#[derive(Debug)]
pub struct RecordStore<T> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    // Every mutation is a single Vec operation, so a poisoned lock still
    // guards a consistent list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: i64) -> RecordError {
        RecordError::NotFound {
            label: T::LABEL,
            id,
        }
    }

    /// All records in current order
    pub fn list(&self) -> Vec<T> {
        self.read().clone()
    }

    /// First record with the given id
    pub fn get(&self, id: i64) -> RecordResult<T> {
        self.read()
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    /// Append a record. Ids are not checked for uniqueness.
    pub fn insert(&self, record: T) -> T {
        let mut records = self.write();
        records.push(record.clone());
        debug!(collection = T::LABEL, id = record.id(), len = records.len(), "record inserted");
        record
    }

    /// Overwrite the first record with the given id, keeping its position.
    ///
    /// The replacement's own id need not match `id`.
    pub fn replace(&self, id: i64, record: T) -> RecordResult<T> {
        let mut records = self.write();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        *slot = record.clone();
        debug!(collection = T::LABEL, id, new_id = record.id(), "record replaced");
        Ok(record)
    }

    /// Remove the first record with the given id
    pub fn delete(&self, id: i64) -> RecordResult<()> {
        let mut records = self.write();
        let idx = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Self::not_found(id))?;

        records.remove(idx);
        debug!(collection = T::LABEL, id, "record deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
