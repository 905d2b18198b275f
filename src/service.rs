//! Catalog Operations
//!
//! The three domain actions (list, get, add) on top of [`CatalogStore`].
//!
//! ## Responsibilities
//! - Validate candidates before they reach the store
//! - Translate store results into the crate's error vocabulary
//!
//! Everything here is synchronous and bounded; callers on an async runtime
//! may call straight in without `spawn_blocking`.

use std::sync::Arc;

use crate::catalog::{CatalogStore, Record};
use crate::error::{CatalogError, Result};

/// Handle to the catalog operations
///
/// Cheap to clone: every clone shares the same store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    /// Create a service over a shared store
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Every record, in id order
    pub fn list_all(&self) -> Vec<Record> {
        self.store.snapshot()
    }

    /// The record with `id`, or `NotFound`
    pub fn get_by_id(&self, id: &str) -> Result<Record> {
        self.store.get(id)
    }

    /// Add `candidate` to the catalog
    ///
    /// Steps:
    /// 1. Reject an empty id
    /// 2. Insert at the sorted position (`AlreadyExists` on collision)
    /// 3. Hand back the record exactly as supplied
    pub fn add_record(&self, candidate: Record) -> Result<Record> {
        if candidate.id.is_empty() {
            return Err(CatalogError::EmptyId);
        }

        self.store.insert(candidate.clone())?;

        Ok(candidate)
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Arc::new(CatalogStore::seeded()))
    }
}
