use serde::de::DeserializeOwned;

use super::{Record, Result};
use crate::errors::StoreError;

/// Array-backed store keyed by numeric identifier. Created identifiers are
/// `max(existing) + 1`, starting at 1.
#[derive(Debug, Clone)]
pub struct InMemoryStore<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Seeds the store with existing records, keeping their identifiers.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    /// Seeds the store from a JSON array of records.
    pub fn from_json(raw: &str) -> Result<Self>
    where
        T: DeserializeOwned,
    {
        let records: Vec<T> = serde_json::from_str(raw)?;
        Ok(Self { records })
    }

    /// Returns a snapshot of every record.
    pub fn get_all(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn get_by_id(&self, id: u32) -> Result<T> {
        self.records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })
    }

    /// Stores `record` under a freshly assigned identifier and returns the
    /// stored copy.
    pub fn create(&mut self, mut record: T) -> T {
        let next_id = self
            .records
            .iter()
            .map(Record::id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        record.assign_id(next_id);
        tracing::debug!(entity = T::ENTITY, id = next_id, "record created");
        self.records.push(record.clone());
        record
    }

    /// Updates the record identified by `id` via the provided mutator,
    /// returning the updated copy. The identifier itself is not mutable.
    pub fn update<F>(&mut self, id: u32, mutator: F) -> Result<T>
    where
        F: FnOnce(&mut T),
    {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        mutator(record);
        record.assign_id(id);
        tracing::debug!(entity = T::ENTITY, id, "record updated");
        Ok(record.clone())
    }

    /// Removes the record identified by `id`, returning the removed instance.
    pub fn delete(&mut self, id: u32) -> Result<T> {
        let index = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or(StoreError::NotFound {
                entity: T::ENTITY,
                id,
            })?;
        tracing::debug!(entity = T::ENTITY, id, "record deleted");
        Ok(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
