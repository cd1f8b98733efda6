//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Service tests run against these in-memory ports. Store and HTTP tests use
//! the real SeaORM adapter over in-memory SQLite instead.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
