//! CatalogStore implementation
//!
//! Sorted Vec with a parking_lot RwLock for concurrency.

use parking_lot::RwLock;

use super::{seed_records, Record};
use crate::error::{CatalogError, Result};

/// Shared, ordered record store
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader (SWMR)
///
/// - **Reads** (`snapshot`/`get`/`find_index`): take the read lock, run in
///   parallel with each other
/// - **Writes** (`insert`/`reset`): take the write lock for the whole
///   search + splice, so readers see either none or all of an insert
pub struct CatalogStore {
    /// Records sorted ascending by id, no duplicates
    records: RwLock<Vec<Record>>,

    /// Contents restored by `reset`
    initial: Vec<Record>,
}

impl CatalogStore {
    /// Create a store holding `records`
    ///
    /// Input order does not matter; a repeated id fails with `AlreadyExists`.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        let mut records = records;
        records.sort_by(|a, b| a.id.cmp(&b.id));

        if let Some(pair) = records.windows(2).find(|pair| pair[0].id == pair[1].id) {
            return Err(CatalogError::AlreadyExists(pair[1].id.clone()));
        }

        Ok(Self {
            initial: records.clone(),
            records: RwLock::new(records),
        })
    }

    /// Create a store holding the built-in seed records
    pub fn seeded() -> Self {
        let records = seed_records();
        Self {
            initial: records.clone(),
            records: RwLock::new(records),
        }
    }

    /// Create an empty store
    pub fn empty() -> Self {
        Self {
            initial: Vec::new(),
            records: RwLock::new(Vec::new()),
        }
    }

    /// Copy of every record, in id order
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Position of `id`, or where it would be inserted to keep order
    pub fn find_index(&self, id: &str) -> usize {
        search(&self.records.read(), id)
    }

    /// Copy of the record with `id`
    pub fn get(&self, id: &str) -> Result<Record> {
        let records = self.records.read();
        let idx = search(&records, id);

        match records.get(idx) {
            Some(record) if record.id == id => Ok(record.clone()),
            _ => Err(CatalogError::NotFound(id.to_string())),
        }
    }

    /// Check whether a record with `id` exists
    pub fn contains(&self, id: &str) -> bool {
        let records = self.records.read();
        let idx = search(&records, id);
        records.get(idx).is_some_and(|record| record.id == id)
    }

    /// Insert `record` at its sorted position
    ///
    /// Fails with `AlreadyExists` and leaves the store untouched if the id is
    /// taken.
    pub fn insert(&self, record: Record) -> Result<()> {
        let mut records = self.records.write();
        let idx = search(&records, &record.id);

        if records.get(idx).is_some_and(|existing| existing.id == record.id) {
            return Err(CatalogError::AlreadyExists(record.id));
        }

        records.insert(idx, record);
        debug_assert!(is_strictly_sorted(&records), "catalog lost its ordering");

        Ok(())
    }

    /// Restore the records the store was created with
    pub fn reset(&self) {
        *self.records.write() = self.initial.clone();
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Binary search over a sorted slice (caller holds the lock)
fn search(records: &[Record], id: &str) -> usize {
    records.partition_point(|record| record.id.as_str() < id)
}

fn is_strictly_sorted(records: &[Record]) -> bool {
    records.windows(2).all(|pair| pair[0].id < pair[1].id)
}
