//! Configuration for RecordCat
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{CatalogError, Result};

/// Main configuration for a RecordCat instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Initial contents of the catalog
    pub seed: SeedMode,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Per-request timeout (milliseconds, 0 disables)
    pub request_timeout_ms: u64,

    /// Max in-flight requests (0 means unlimited)
    pub concurrency_limit: usize,
}

/// What the catalog holds at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// The three built-in records
    Default,

    /// No records
    Empty,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: SeedMode::Default,
            listen_addr: "0.0.0.0:8080".to_string(),
            request_timeout_ms: 10_000,
            concurrency_limit: 1024,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config before the server starts
    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        Ok(())
    }

    /// Parsed listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            CatalogError::Config(format!("invalid listen address {:?}: {}", self.listen_addr, e))
        })
    }

    /// Request timeout, if enabled
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    /// Concurrency limit, if enabled
    pub fn concurrency_limit(&self) -> Option<usize> {
        (self.concurrency_limit > 0).then_some(self.concurrency_limit)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the startup contents of the catalog
    pub fn seed(mut self, seed: SeedMode) -> Self {
        self.config.seed = seed;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the request timeout (in milliseconds, 0 disables)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    /// Set the maximum number of in-flight requests (0 means unlimited)
    pub fn concurrency_limit(mut self, limit: usize) -> Self {
        self.config.concurrency_limit = limit;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
