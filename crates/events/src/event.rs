use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are **facts**: immutable records of something that already happened
/// inside an aggregate. They are versioned for schema evolution and carry the
/// business time at which they occurred.
///
/// Payloads are snapshots — an event must carry everything a downstream
/// consumer needs to react without loading the aggregate back.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "orders.order.created").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
