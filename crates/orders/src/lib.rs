//! Order lifecycle domain module.
//!
//! This crate contains the business rules for the order aggregate, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//!
//! - value objects: [`Money`], [`Address`], [`OrderId`]
//! - entity: [`OrderLineItem`] (identity-based equality, mutable quantity)
//! - aggregate root: [`Order`] with its status state machine and buffered
//!   domain events
//! - stateless domain services: [`OrderValidationService`],
//!   [`OrderPricingService`]
//!
//! Persistence and event transport are external capabilities; callers drain
//! the aggregate's event buffer after each unit of work and hand the batch to
//! a publisher.

pub mod address;
pub mod error;
pub mod event;
pub mod id;
pub mod line_item;
pub mod money;
pub mod order;
pub mod service;
pub mod status;

pub use address::Address;
pub use error::{DomainError, DomainResult};
pub use event::{
    OrderCancelled, OrderCompleted, OrderCreated, OrderEvent, OrderEventKind, OrderPaid,
    OrderShipped,
};
pub use id::{LineItemId, OrderId};
pub use line_item::OrderLineItem;
pub use money::{Currency, Money};
pub use order::Order;
pub use service::{MAX_LINE_QUANTITY, OrderPricingService, OrderValidationService};
pub use status::{OrderCommandKind, OrderStatus};
