//! Catalog operations integration tests
