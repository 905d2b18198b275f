//! # RecordCat
//!
//! An in-memory record catalog served over HTTP with:
//! - Records kept sorted by id, ids unique
//! - Single-writer/multi-reader concurrency model
//! - Snapshot-on-read, so callers never see a half-finished insert
//! - JSON over HTTP (`/records`)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                (axum + tower layers)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                 Catalog Operations                           │
//! │         (list / get-by-id / add with validation)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ CatalogStore  │
//!               │ RwLock<Vec<_>>│
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod catalog;
pub mod service;
pub mod network;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use catalog::{CatalogStore, Record};
pub use config::{Config, SeedMode};
pub use error::{CatalogError, Result};
pub use service::CatalogService;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of RecordCat
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
