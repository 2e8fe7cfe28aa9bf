//! Domain events emitted by the order aggregate.
//!
//! One envelope (event id + occurrence time), one closed payload enum. Events
//! are facts: immutable once recorded, appended to the aggregate's buffer and
//! removed only when the caller drains it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use orderflow_events::Event;

use crate::id::OrderId;
use crate::money::Money;

/// Payload: an order was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub customer_id: String,
    pub total_amount: Money,
    pub items_count: usize,
}

/// Payload: an order was paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPaid {
    pub order_id: OrderId,
    pub payment_id: String,
    pub paid_amount: Money,
}

/// Payload: an order was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCancelled {
    pub order_id: OrderId,
    pub reason: String,
    pub cancelled_by: String,
}

/// Payload: an order was handed to a carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderShipped {
    pub order_id: OrderId,
    pub tracking_number: String,
    pub carrier: String,
}

/// Payload: an order was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCompleted {
    pub order_id: OrderId,
}

/// Closed sum of the order event payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEventKind {
    Created(OrderCreated),
    Paid(OrderPaid),
    Cancelled(OrderCancelled),
    Shipped(OrderShipped),
    Completed(OrderCompleted),
}

/// Envelope shared by every order event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEvent {
    event_id: Uuid,
    occurred_at: DateTime<Utc>,
    kind: OrderEventKind,
}

impl OrderEvent {
    /// Record a fact now, under a fresh event id.
    pub(crate) fn record(kind: OrderEventKind) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_at: Utc::now(),
            kind,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn kind(&self) -> &OrderEventKind {
        &self.kind
    }
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match &self.kind {
            OrderEventKind::Created(_) => "orders.order.created",
            OrderEventKind::Paid(_) => "orders.order.paid",
            OrderEventKind::Cancelled(_) => "orders.order.cancelled",
            OrderEventKind::Shipped(_) => "orders.order.shipped",
            OrderEventKind::Completed(_) => "orders.order.completed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
