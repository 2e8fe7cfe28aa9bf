//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object is **immutable** and **compared by its attribute values**.
/// Two value objects carrying the same values are interchangeable; there is no
/// notion of "which one" you hold.
///
/// Contrast with [`crate::Entity`]:
/// - `Money { amount: 100, currency: TWD }` is a value object — any other
///   `Money` with the same amount and currency is the same value.
/// - an order line item is an entity — two line items with identical product,
///   quantity and price are still *different* line items.
///
/// To "modify" a value object, construct a new one. Every arithmetic or
/// derivation method on a value object returns a fresh value and leaves the
/// receiver untouched.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
