//! Infrastructure ports for the order domain.
//!
//! The domain assumes two external capabilities it does not implement: a
//! repository to load/save aggregates and a publisher for drained events.
//! This crate defines the repository port, ships an in-memory implementation
//! with optimistic concurrency for tests/dev, and provides the unit-of-work
//! helper that encodes the save-drain-publish-clear contract.

pub mod repository;
pub mod unit_of_work;

pub use repository::{InMemoryOrderRepository, OrderRepository};
pub use unit_of_work::{CommitError, commit};
