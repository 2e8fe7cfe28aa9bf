//! Domain event mechanics (no transport, no storage).
//!
//! This crate defines what an event *is* and how a batch of drained events is
//! handed to the outside world. Concrete transports (message brokers, outbox
//! tables) live behind the [`EventPublisher`] abstraction; the in-memory
//! implementation here exists for tests and development.

pub mod event;
pub mod publisher;

pub use event::Event;
pub use publisher::{EventPublisher, InMemoryPublisher};
