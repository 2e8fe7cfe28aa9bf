//! Domain error model.
//!
//! Every failure here is a synchronous validation error raised at the point of
//! violation. Nothing is retried or recovered internally; errors propagate to
//! the caller and leave all domain objects in their prior valid state.

use thiserror::Error;

use crate::money::Currency;
use crate::status::{OrderCommandKind, OrderStatus};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, state-machine violations). Infrastructure concerns belong
/// elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A money amount was negative at construction.
    #[error("money amount must not be negative")]
    NegativeAmount,

    /// Arithmetic across two different currencies.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: Currency, right: Currency },

    /// A subtraction would have produced a negative money value.
    #[error("subtraction result must not be negative")]
    NegativeResult,

    /// A required address field was empty.
    #[error("address field must not be empty: {0}")]
    InvalidAddressField(&'static str),

    /// The recipient phone is not all digits after stripping separators.
    #[error("recipient phone format is invalid")]
    InvalidPhoneFormat,

    /// A line-item quantity was zero or above the allowed ceiling.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// A line-item unit price was not strictly positive.
    #[error("unit price must be greater than zero")]
    InvalidUnitPrice,

    /// An order was assembled without any line item.
    #[error("order must contain at least one line item")]
    EmptyItemList,

    /// The computed order total was not strictly positive.
    #[error("order total must be greater than zero")]
    NonPositiveTotal,

    /// Line items in one order carried more than one currency.
    #[error("all line items must share a single currency")]
    MixedCurrencyItems,

    /// A command was issued against a status that does not permit it.
    #[error("cannot {command} an order in status {current}")]
    InvalidStateTransition {
        current: OrderStatus,
        command: OrderCommandKind,
    },

    /// Cancellation was attempted after the order had already shipped.
    #[error("order has already shipped and can no longer be cancelled")]
    AlreadyShippedCancelAttempt,

    /// An order identifier string did not match `ORD-<date>-<suffix>`.
    #[error("invalid order id: {0}")]
    InvalidOrderId(String),

    /// An order was requested for an empty customer id.
    #[error("customer id must not be empty")]
    EmptyCustomerId,

    /// A discount rate outside `[0, 1)` was passed to the pricing service.
    #[error("discount rate must be within [0, 1)")]
    InvalidDiscountRate,

    /// A conflict occurred (e.g. stale version / optimistic concurrency).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A requested aggregate was not found (domain-level).
    #[error("order not found")]
    NotFound,
}

impl DomainError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
