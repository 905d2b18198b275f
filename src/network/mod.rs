//! Network Module
//!
//! HTTP server and request routing.
//!
//! ## Architecture
//! - Tokio listener driven by `axum::serve`
//! - Router maps `/records` endpoints onto [`CatalogService`](crate::service::CatalogService)
//! - Tower layers for tracing, timeouts and concurrency limits

mod router;
mod server;

pub use router::router;
pub use server::{Server, ShutdownHandle};
