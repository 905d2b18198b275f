//! HTTP surface integration tests
