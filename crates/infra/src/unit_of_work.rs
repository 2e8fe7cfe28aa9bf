//! Save-then-publish unit of work.

use thiserror::Error;

use orderflow_core::ExpectedVersion;
use orderflow_events::EventPublisher;
use orderflow_orders::{DomainError, Order, OrderEvent};

use crate::repository::OrderRepository;

/// Failure of a [`commit`].
#[derive(Debug, Error)]
pub enum CommitError<P>
where
    P: core::fmt::Debug + Send + Sync + 'static,
{
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The aggregate was saved but its events were not published; the buffer
    /// is left intact so the caller can retry (at-least-once delivery).
    #[error("event publish failed after save: {0:?}")]
    Publish(P),
}

/// Persist an aggregate, then drain and publish its buffered events.
///
/// Encodes the contract callers otherwise have to remember by hand: save
/// first, publish the drained batch, clear the buffer only once publication
/// succeeded. On a save conflict nothing is published; on a publish failure
/// the buffer survives for a retry.
pub fn commit<R, P>(
    repository: &R,
    publisher: &P,
    order: &mut Order,
    expected: ExpectedVersion,
) -> Result<(), CommitError<P::Error>>
where
    R: OrderRepository + ?Sized,
    P: EventPublisher<OrderEvent> + ?Sized,
{
    repository.save(order, expected)?;

    let events = order.domain_events();
    if events.is_empty() {
        return Ok(());
    }

    publisher.publish(&events).map_err(CommitError::Publish)?;
    order.clear_events();

    tracing::debug!(order_id = %order.id(), published = events.len(), "unit of work committed");
    Ok(())
}
