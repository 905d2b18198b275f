//! CatalogStore integration tests
