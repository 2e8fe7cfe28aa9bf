//! Order repository port + in-memory implementation.

use std::collections::HashMap;
use std::sync::Mutex;

use orderflow_core::{AggregateRoot, ExpectedVersion};
use orderflow_orders::{DomainError, DomainResult, Order, OrderId};

/// Persistence port for the order aggregate.
///
/// The domain assumes single-writer access per aggregate; implementations
/// enforce it through the [`ExpectedVersion`] passed to [`save`]. Two copies
/// of the same logical order loaded independently cannot both save against the
/// same expected version — the second writer gets [`DomainError::Conflict`]
/// instead of silently overwriting the first.
///
/// [`save`]: OrderRepository::save
pub trait OrderRepository: Send + Sync {
    /// Load an aggregate by identifier.
    fn load(&self, id: &OrderId) -> DomainResult<Order>;

    /// Persist an aggregate, checking `expected` against the stored version.
    ///
    /// For a brand-new aggregate pass `ExpectedVersion::Exact(0)`: that also
    /// rejects a generated [`OrderId`] that happens to collide with an
    /// existing order.
    fn save(&self, order: &Order, expected: ExpectedVersion) -> DomainResult<()>;
}

/// In-memory repository for tests/dev.
///
/// Stores snapshots keyed by order id. Snapshots never carry the event
/// buffer: persisting an aggregate must not smuggle unpublished events back
/// out of a later `load`.
#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    snapshots: Mutex<HashMap<OrderId, Order>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn load(&self, id: &OrderId) -> DomainResult<Order> {
        let snapshots = self.snapshots.lock().expect("repository lock poisoned");
        snapshots.get(id).cloned().ok_or(DomainError::NotFound)
    }

    fn save(&self, order: &Order, expected: ExpectedVersion) -> DomainResult<()> {
        let mut snapshots = self.snapshots.lock().expect("repository lock poisoned");

        let stored_version = snapshots
            .get(order.id())
            .map(AggregateRoot::version)
            .unwrap_or(0);
        expected
            .check(stored_version)
            .map_err(|e| DomainError::conflict(e.to_string()))?;

        let mut snapshot = order.clone();
        snapshot.clear_events();
        snapshots.insert(order.id().clone(), snapshot);

        tracing::debug!(order_id = %order.id(), version = order.version(), "order saved");
        Ok(())
    }
}
