//! Order line item: an identity-bearing entity with a mutable quantity.

use core::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use orderflow_core::Entity;

use crate::error::{DomainError, DomainResult};
use crate::id::LineItemId;
use crate::money::Money;

/// One line of an order.
///
/// Unlike the value objects around it, a line item has identity: equality and
/// hashing use only [`LineItemId`], so two items with identical product,
/// quantity and price are still distinct lines. The product name is a snapshot
/// taken at assembly time to avoid cross-context lookups later.
///
/// Quantity is the only mutable field, and only the owning order may reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineItem {
    item_id: LineItemId,
    product_id: String,
    product_name: String,
    quantity: u32,
    unit_price: Money,
}

impl OrderLineItem {
    /// Assemble a line item with a freshly generated identifier.
    ///
    /// Fails with [`DomainError::InvalidQuantity`] when `quantity == 0` and
    /// [`DomainError::InvalidUnitPrice`] when the unit price is not positive.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> DomainResult<Self> {
        Self::with_id(LineItemId::new(), product_id, product_name, quantity, unit_price)
    }

    /// Assemble a line item under an explicit identifier (rehydration, tests).
    pub fn with_id(
        item_id: LineItemId,
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        if unit_price.amount() <= Decimal::ZERO {
            return Err(DomainError::InvalidUnitPrice);
        }
        Ok(Self {
            item_id,
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        })
    }

    pub fn item_id(&self) -> LineItemId {
        self.item_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Line subtotal: unit price scaled by quantity.
    pub fn subtotal(&self) -> Money {
        // Quantity is positive by construction, so the product cannot go
        // negative and the unchecked normalizing constructor is safe.
        Money::normalized(
            self.unit_price.amount() * Decimal::from(self.quantity),
            self.unit_price.currency(),
        )
    }

    /// Change the quantity in place.
    ///
    /// Fails with [`DomainError::InvalidQuantity`] when `quantity == 0`.
    pub fn update_quantity(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        self.quantity = quantity;
        Ok(())
    }
}

impl Entity for OrderLineItem {
    type Id = LineItemId;

    fn id(&self) -> &LineItemId {
        &self.item_id
    }
}

impl PartialEq for OrderLineItem {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

impl Eq for OrderLineItem {}

impl Hash for OrderLineItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item_id.hash(state);
    }
}
