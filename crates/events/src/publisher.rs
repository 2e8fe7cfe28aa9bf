//! Event publication abstraction.
//!
//! Aggregates buffer the events they emit; after a unit of work the caller
//! drains the buffer and hands the batch to a publisher. Delivery is
//! **at-least-once**: if publication fails the caller keeps the buffer and
//! retries, so consumers must tolerate duplicates.

use std::sync::{Arc, Mutex};

use crate::event::Event;

/// Destination for drained domain events.
///
/// Implementations may forward to a message broker, append to an outbox, or
/// simply record the batch (in-memory, below). A batch is published in order;
/// ordering *across* batches is only guaranteed per aggregate when the caller
/// serializes its units of work.
pub trait EventPublisher<E: Event>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    /// Publish a drained batch of events.
    fn publish(&self, events: &[E]) -> Result<(), Self::Error>;
}

impl<E, P> EventPublisher<E> for Arc<P>
where
    E: Event,
    P: EventPublisher<E> + ?Sized,
{
    type Error = P::Error;

    fn publish(&self, events: &[E]) -> Result<(), Self::Error> {
        (**self).publish(events)
    }
}

/// In-memory publisher for tests/dev: records every published event.
#[derive(Debug, Default)]
pub struct InMemoryPublisher<E> {
    published: Mutex<Vec<E>>,
}

impl<E> InMemoryPublisher<E> {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything published so far, in publication order.
    pub fn published(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.published.lock().expect("publisher lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.published.lock().expect("publisher lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: Event> EventPublisher<E> for InMemoryPublisher<E> {
    type Error = core::convert::Infallible;

    fn publish(&self, events: &[E]) -> Result<(), Self::Error> {
        let mut published = self.published.lock().expect("publisher lock poisoned");
        published.extend_from_slice(events);
        tracing::debug!(count = events.len(), "events published");
        Ok(())
    }
}
