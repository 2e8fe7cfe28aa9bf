//! Order aggregate root.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderflow_core::AggregateRoot;

use crate::address::Address;
use crate::error::{DomainError, DomainResult};
use crate::event::{
    OrderCancelled, OrderCompleted, OrderCreated, OrderEvent, OrderEventKind, OrderPaid,
    OrderShipped,
};
use crate::id::OrderId;
use crate::line_item::OrderLineItem;
use crate::money::Money;
use crate::status::{OrderCommandKind, OrderStatus};

/// The order aggregate.
///
/// Owns its line items, shipping address and event buffer exclusively; nothing
/// outside holds a mutable reference into the boundary. All mutation goes
/// through the command methods, each of which is atomic: every precondition is
/// checked before the first field is touched, so a failed command leaves both
/// state and event buffer exactly as they were.
///
/// The event buffer is transient (skipped on serialization). Callers drain it
/// via [`Order::domain_events`] after a unit of work, hand the batch to a
/// publisher, then call [`Order::clear_events`]; discarding an undrained
/// aggregate silently loses events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_id: String,
    items: Vec<OrderLineItem>,
    shipping_address: Address,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    payment_id: Option<String>,
    tracking_number: Option<String>,
    carrier: Option<String>,
    paid_at: Option<DateTime<Utc>>,
    shipped_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    version: u64,
    #[serde(skip)]
    events: Vec<OrderEvent>,
}

impl Order {
    /// Factory: the only way to bring a new order into existence.
    ///
    /// Validates the aggregate invariants (non-empty items, single currency,
    /// positive total), generates a fresh [`OrderId`], starts the lifecycle at
    /// [`OrderStatus::Pending`] and records an `OrderCreated` event.
    pub fn create(
        customer_id: impl Into<String>,
        items: Vec<OrderLineItem>,
        shipping_address: Address,
    ) -> DomainResult<Self> {
        let customer_id = customer_id.into();
        let now = Utc::now();
        let mut order = Self {
            id: OrderId::generate(),
            customer_id: customer_id.clone(),
            items,
            shipping_address,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            payment_id: None,
            tracking_number: None,
            carrier: None,
            paid_at: None,
            shipped_at: None,
            completed_at: None,
            version: 1,
            events: Vec::new(),
        };
        order.check_invariants()?;

        let total_amount = order.total_amount()?;
        let items_count = order.items.len();
        order.record(OrderEventKind::Created(OrderCreated {
            order_id: order.id.clone(),
            customer_id,
            total_amount,
            items_count,
        }));
        Ok(order)
    }

    fn check_invariants(&self) -> DomainResult<()> {
        let Some(first) = self.items.first() else {
            return Err(DomainError::EmptyItemList);
        };
        let currency = first.unit_price().currency();
        if self
            .items
            .iter()
            .any(|item| item.unit_price().currency() != currency)
        {
            return Err(DomainError::MixedCurrencyItems);
        }
        if self.total_amount()?.amount() <= Decimal::ZERO {
            return Err(DomainError::NonPositiveTotal);
        }
        Ok(())
    }

    /// Order total, recomputed on demand so it always reflects the current
    /// line items: a fold of every subtotal starting from zero in the order's
    /// currency.
    pub fn total_amount(&self) -> DomainResult<Money> {
        let first = self.items.first().ok_or(DomainError::EmptyItemList)?;
        let zero = Money::zero(first.unit_price().currency());
        self.items
            .iter()
            .try_fold(zero, |acc, item| acc.add(&item.subtotal()))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Pay the order. Pending -> Paid; records payment id and paid timestamp.
    pub fn pay(&mut self, payment_id: impl Into<String>) -> DomainResult<()> {
        let next = self.status.next(OrderCommandKind::Pay)?;
        let paid_amount = self.total_amount()?;
        let payment_id = payment_id.into();
        let now = Utc::now();

        self.status = next;
        self.payment_id = Some(payment_id.clone());
        self.paid_at = Some(now);
        self.touch(now);

        self.record(OrderEventKind::Paid(OrderPaid {
            order_id: self.id.clone(),
            payment_id,
            paid_amount,
        }));
        Ok(())
    }

    /// Cancel the order.
    ///
    /// Allowed while Pending or Paid-but-not-shipped. Once the order has
    /// shipped, cancellation fails with
    /// [`DomainError::AlreadyShippedCancelAttempt`]; a return flow would be a
    /// different process entirely.
    pub fn cancel(
        &mut self,
        reason: impl Into<String>,
        cancelled_by: impl Into<String>,
    ) -> DomainResult<()> {
        if self.shipped_at.is_some() {
            return Err(DomainError::AlreadyShippedCancelAttempt);
        }
        let next = self.status.next(OrderCommandKind::Cancel)?;
        let now = Utc::now();

        self.status = next;
        self.touch(now);

        self.record(OrderEventKind::Cancelled(OrderCancelled {
            order_id: self.id.clone(),
            reason: reason.into(),
            cancelled_by: cancelled_by.into(),
        }));
        Ok(())
    }

    /// Hand the order to a carrier. Paid -> Shipped; records tracking data.
    pub fn ship(
        &mut self,
        tracking_number: impl Into<String>,
        carrier: impl Into<String>,
    ) -> DomainResult<()> {
        let next = self.status.next(OrderCommandKind::Ship)?;
        let tracking_number = tracking_number.into();
        let carrier = carrier.into();
        let now = Utc::now();

        self.status = next;
        self.tracking_number = Some(tracking_number.clone());
        self.carrier = Some(carrier.clone());
        self.shipped_at = Some(now);
        self.touch(now);

        self.record(OrderEventKind::Shipped(OrderShipped {
            order_id: self.id.clone(),
            tracking_number,
            carrier,
        }));
        Ok(())
    }

    /// Mark the order delivered (carrier callback). Shipped -> Delivered.
    ///
    /// No event is recorded for this transition.
    pub fn mark_delivered(&mut self) -> DomainResult<()> {
        let next = self.status.next(OrderCommandKind::MarkDelivered)?;
        self.status = next;
        self.touch(Utc::now());
        Ok(())
    }

    /// Complete the order (receipt confirmed). Delivered -> Completed.
    pub fn complete(&mut self) -> DomainResult<()> {
        let next = self.status.next(OrderCommandKind::Complete)?;
        let now = Utc::now();

        self.status = next;
        self.completed_at = Some(now);
        self.touch(now);

        self.record(OrderEventKind::Completed(OrderCompleted {
            order_id: self.id.clone(),
        }));
        Ok(())
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
        self.version += 1;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn can_be_cancelled(&self) -> bool {
        matches!(self.status, OrderStatus::Pending | OrderStatus::Paid)
            && self.shipped_at.is_none()
    }

    pub fn can_be_paid(&self) -> bool {
        self.status == OrderStatus::Pending
    }

    pub fn is_final_state(&self) -> bool {
        self.status.is_terminal()
    }

    // ------------------------------------------------------------------
    // Event buffer
    // ------------------------------------------------------------------

    /// Snapshot of the buffered events, in the order they were recorded.
    ///
    /// Returns a copy: mutating the returned sequence cannot reach the
    /// internal buffer.
    pub fn domain_events(&self) -> Vec<OrderEvent> {
        self.events.clone()
    }

    /// Empty the buffer. Call after the drained batch has been published.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, kind: OrderEventKind) {
        self.events.push(OrderEvent::record(kind));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderLineItem] {
        &self.items
    }

    pub fn shipping_address(&self) -> &Address {
        &self.shipping_address
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn payment_id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    pub fn tracking_number(&self) -> Option<&str> {
        self.tracking_number.as_deref()
    }

    pub fn carrier(&self) -> Option<&str> {
        self.carrier.as_deref()
    }

    pub fn paid_at(&self) -> Option<DateTime<Utc>> {
        self.paid_at
    }

    pub fn shipped_at(&self) -> Option<DateTime<Utc>> {
        self.shipped_at
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
