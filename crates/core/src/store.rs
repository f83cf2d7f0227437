//! Generic in-memory record store with copy-on-write snapshots.

use std::sync::Arc;

use crate::error::{DomainError, DomainResult};
use crate::id::RecordId;
use crate::record::StoredRecord;

/// Immutable, fully materialized view of a collection at one point in time.
///
/// Cloning is cheap (an `Arc` bump). A snapshot handed out before a mutation
/// keeps its contents forever; the store swaps in a fresh backing vector
/// instead of touching old ones.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    records: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }
}

impl<T> std::ops::Deref for Snapshot<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.records
    }
}

/// Ordered, keyed collection of one entity type.
///
/// Insertion order is enumeration order and stays stable across updates.
/// Ids are assigned from a sequence that only moves forward, so a deleted id
/// can never reappear from a later `add`. The store is owned by a single
/// caller; all operations are synchronous and none blocks.
#[derive(Debug, Clone)]
pub struct RecordStore<T: StoredRecord> {
    records: Arc<Vec<T>>,
    next_seq: u64,
}

impl<T: StoredRecord> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
            next_seq: 1,
        }
    }

    /// Create a record from `draft`, assigning the next id.
    ///
    /// Appends to the end of the collection and returns the full record.
    /// Fails with `Validation` if the draft is invalid or duplicates a
    /// unique field of an existing record.
    pub fn add(&mut self, draft: T::Draft) -> DomainResult<T> {
        let id = T::Id::from(RecordId::from_raw(self.next_seq));
        let record = T::from_draft(id, draft)?;
        self.check_unique(&record, None)?;

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(record.clone());
        self.records = Arc::new(next);
        self.next_seq += 1;

        tracing::debug!(id = ?record.id(), "record added");
        Ok(record)
    }

    /// Merge `patch` into the record with `id` and return the result.
    ///
    /// Only supplied fields change; the record keeps its position in the
    /// enumeration order. Fails with `NotFound` for an absent id and with
    /// `Validation` if the merged record is invalid.
    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> DomainResult<T> {
        let pos = self.position(id).ok_or_else(DomainError::not_found)?;

        let mut updated = self.records[pos].clone();
        updated.apply_patch(patch)?;
        self.check_unique(&updated, Some(pos))?;

        let mut next: Vec<T> = self.records.iter().cloned().collect();
        next[pos] = updated.clone();
        self.records = Arc::new(next);

        tracing::debug!(id = ?id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id` permanently.
    ///
    /// Terminal: there is no soft delete, and the id is never handed out
    /// again. Fails with `NotFound` for an absent id.
    pub fn delete(&mut self, id: T::Id) -> DomainResult<()> {
        let pos = self.position(id).ok_or_else(DomainError::not_found)?;

        let mut next: Vec<T> = self.records.iter().cloned().collect();
        next.remove(pos);
        self.records = Arc::new(next);

        tracing::debug!(id = ?id, "record deleted");
        Ok(())
    }

    pub fn get(&self, id: T::Id) -> DomainResult<T> {
        self.records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    /// Current snapshot, in insertion order.
    pub fn list(&self) -> Snapshot<T> {
        Snapshot {
            records: Arc::clone(&self.records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: T::Id) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn check_unique(&self, record: &T, skip: Option<usize>) -> DomainResult<()> {
        for (pos, existing) in self.records.iter().enumerate() {
            if Some(pos) == skip {
                continue;
            }
            if let Some(field) = record.duplicate_key(existing) {
                return Err(DomainError::validation(field));
            }
        }
        Ok(())
    }
}

impl<T: StoredRecord> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
