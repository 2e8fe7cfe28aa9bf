//! Stateless domain services layered above the aggregate.
//!
//! These hold logic that does not belong to any single aggregate: creation
//! checks that would consult other bounded contexts (inventory, catalog,
//! identity) in a full system, and discount-aware total computation.

use rust_decimal::Decimal;

use crate::address::Address;
use crate::error::{DomainError, DomainResult};
use crate::line_item::OrderLineItem;
use crate::money::{Currency, Money};

/// Per-item quantity ceiling enforced at creation.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Creation-time validation independent of aggregate state.
pub struct OrderValidationService;

impl OrderValidationService {
    /// Validate an order request before the aggregate factory runs.
    ///
    /// The address needs no checking here: an [`Address`] is valid by
    /// construction. In a full system this is also where inventory and
    /// catalog contexts would be consulted.
    pub fn validate_order_creation(
        customer_id: &str,
        items: &[OrderLineItem],
        _address: &Address,
    ) -> DomainResult<()> {
        if customer_id.trim().is_empty() {
            return Err(DomainError::EmptyCustomerId);
        }
        if items.is_empty() {
            return Err(DomainError::EmptyItemList);
        }
        for item in items {
            if item.quantity() > MAX_LINE_QUANTITY {
                return Err(DomainError::InvalidQuantity(item.quantity()));
            }
        }
        Ok(())
    }
}

/// Discount-aware total computation.
pub struct OrderPricingService;

impl OrderPricingService {
    /// Sum the item subtotals, then apply a multiplicative discount.
    ///
    /// `discount_rate` must lie in `[0, 1)`. Mutates nothing; returns a new
    /// [`Money`]. An empty item list totals zero (TWD by convention, matching
    /// the aggregate's default market).
    pub fn calculate_total(
        items: &[OrderLineItem],
        discount_rate: Decimal,
    ) -> DomainResult<Money> {
        if discount_rate < Decimal::ZERO || discount_rate >= Decimal::ONE {
            return Err(DomainError::InvalidDiscountRate);
        }

        let Some(first) = items.first() else {
            return Ok(Money::zero(Currency::TWD));
        };

        let zero = Money::zero(first.unit_price().currency());
        let total = items
            .iter()
            .try_fold(zero, |acc, item| acc.add(&item.subtotal()))?;

        if discount_rate > Decimal::ZERO {
            let discount = total.multiply(discount_rate)?;
            return total.subtract(&discount);
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;
    use rust_decimal_macros::dec;

    fn twd(amount: Decimal) -> Money {
        Money::new(amount, Currency::TWD).unwrap()
    }

    fn address() -> Address {
        Address::new(
            "Taiwan", "Taipei", "Xinyi", "", "Street 1", "110", "Someone", "0912345678",
        )
        .unwrap()
    }

    fn items() -> Vec<OrderLineItem> {
        vec![
            OrderLineItem::new("PROD-001", "iPhone 15 Pro", 1, twd(dec!(35900))).unwrap(),
            OrderLineItem::new("PROD-002", "AirPods Pro", 2, twd(dec!(7490))).unwrap(),
        ]
    }

    #[test]
    fn validation_rejects_blank_customer_id() {
        let err = OrderValidationService::validate_order_creation("  ", &items(), &address())
            .unwrap_err();
        assert_eq!(err, DomainError::EmptyCustomerId);
    }

    #[test]
    fn validation_rejects_empty_items() {
        let err =
            OrderValidationService::validate_order_creation("CUST-1", &[], &address()).unwrap_err();
        assert_eq!(err, DomainError::EmptyItemList);
    }

    #[test]
    fn validation_enforces_the_quantity_ceiling() {
        let mut items = items();
        items[1].update_quantity(1000).unwrap();
        let err = OrderValidationService::validate_order_creation("CUST-1", &items, &address())
            .unwrap_err();
        assert_eq!(err, DomainError::InvalidQuantity(1000));

        items[1].update_quantity(999).unwrap();
        assert!(
            OrderValidationService::validate_order_creation("CUST-1", &items, &address()).is_ok()
        );
    }

    #[test]
    fn pricing_sums_subtotals_without_discount() {
        let total = OrderPricingService::calculate_total(&items(), Decimal::ZERO).unwrap();
        assert_eq!(total, twd(dec!(50880)));
    }

    #[test]
    fn pricing_applies_a_multiplicative_discount() {
        let total = OrderPricingService::calculate_total(&items(), dec!(0.1)).unwrap();
        assert_eq!(total, twd(dec!(45792)));
    }

    #[test]
    fn pricing_rejects_discounts_outside_the_unit_interval() {
        for rate in [dec!(-0.1), dec!(1), dec!(1.5)] {
            let err = OrderPricingService::calculate_total(&items(), rate).unwrap_err();
            assert_eq!(err, DomainError::InvalidDiscountRate);
        }
    }

    #[test]
    fn pricing_of_no_items_is_zero() {
        let total = OrderPricingService::calculate_total(&[], Decimal::ZERO).unwrap();
        assert_eq!(total, Money::zero(Currency::TWD));
    }
}
