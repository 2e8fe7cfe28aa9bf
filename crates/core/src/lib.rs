//! `orderflow-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the marker traits that separate value objects from entities and aggregate
//! roots, and the optimistic-concurrency vocabulary repositories use.

pub mod aggregate;
pub mod entity;
pub mod value_object;

pub use aggregate::{AggregateRoot, ExpectedVersion, VersionConflict};
pub use entity::Entity;
pub use value_object::ValueObject;
