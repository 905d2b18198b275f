//! Catalog Module
//!
//! The ordered, uniquely-keyed in-memory collection of records.
//!
//! ## Responsibilities
//! - Keep records sorted ascending by `id` (byte-wise)
//! - Reject duplicate ids
//! - Single-writer/multi-reader access pattern
//! - Hand out copies, never the live sequence
//!
//! ## Data Structure Choice
//! A `Vec<Record>` wrapped in an RwLock:
//! - Sorted order is the storage order, so listing is a plain clone
//! - Binary search for lookup and insertion position
//! - Splice on insert is O(n), fine for a small catalog

mod store;

pub use store::CatalogStore;

use serde::{Deserialize, Serialize};

/// One catalog entry
///
/// Missing JSON fields decode to their zero values, so a body without an
/// `id` is reported as an empty id rather than a malformed payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Record {
    /// Create a record from its fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// The records every fresh catalog starts with
pub fn seed_records() -> Vec<Record> {
    vec![
        Record::new("1", "Shape of You", "Ed Sheeran", 1.29),
        Record::new("2", "Blinding Lights", "The Weeknd", 1.29),
        Record::new("3", "Dance Monkey", "Tones and I", 1.29),
    ]
}
