//! Money value object: currency-tagged exact decimal amount.

use core::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use orderflow_core::ValueObject;

use crate::error::{DomainError, DomainResult};

/// Supported currencies (closed enumeration).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    TWD,
    CNY,
    EUR,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Currency::USD => "USD",
            Currency::TWD => "TWD",
            Currency::CNY => "CNY",
            Currency::EUR => "EUR",
        };
        f.write_str(code)
    }
}

/// An exact, non-negative decimal amount in one currency.
///
/// Amounts are normalized to exactly two fractional digits on construction
/// (standard midpoint-away-from-zero rounding, never truncation) and every
/// operation returns a new normalized value. Two `Money` values with equal
/// normalized amount and currency are interchangeable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Construct a money value.
    ///
    /// Fails with [`DomainError::NegativeAmount`] when `amount < 0`.
    pub fn new(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeAmount);
        }
        Ok(Self::normalized(amount, currency))
    }

    /// The zero amount in `currency` (fold seed for totals).
    pub fn zero(currency: Currency) -> Self {
        Self::normalized(Decimal::ZERO, currency)
    }

    /// Normalize without the sign check. Callers must guarantee `amount >= 0`.
    pub(crate) fn normalized(amount: Decimal, currency: Currency) -> Self {
        Self {
            amount: amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            });
        }
        Ok(())
    }

    /// Returns `self + other`.
    ///
    /// Fails with [`DomainError::CurrencyMismatch`] when currencies differ.
    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        Ok(Self::normalized(self.amount + other.amount, self.currency))
    }

    /// Returns `self - other`.
    ///
    /// Fails with [`DomainError::CurrencyMismatch`] when currencies differ and
    /// with [`DomainError::NegativeResult`] when the result would be negative;
    /// money values are never negative.
    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let result = self.amount - other.amount;
        if result < Decimal::ZERO {
            return Err(DomainError::NegativeResult);
        }
        Ok(Self::normalized(result, self.currency))
    }

    /// Returns `self * factor` for a non-negative decimal scalar.
    pub fn multiply(&self, factor: Decimal) -> DomainResult<Money> {
        Money::new(self.amount * factor, self.currency)
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.2}", self.currency, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn twd(amount: Decimal) -> Money {
        Money::new(amount, Currency::TWD).unwrap()
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = Money::new(dec!(-0.01), Currency::TWD).unwrap_err();
        assert_eq!(err, DomainError::NegativeAmount);
    }

    #[test]
    fn construction_normalizes_to_two_decimals() {
        assert_eq!(twd(dec!(12.345)).amount(), dec!(12.35));
        assert_eq!(twd(dec!(12.344)).amount(), dec!(12.34));
        assert_eq!(twd(dec!(12)).amount(), dec!(12.00));
    }

    #[test]
    fn equality_is_structural_after_normalization() {
        assert_eq!(twd(dec!(10.5)), twd(dec!(10.50)));
        assert_ne!(
            twd(dec!(10.50)),
            Money::new(dec!(10.50), Currency::USD).unwrap()
        );
    }

    #[test]
    fn add_and_subtract_require_matching_currency() {
        let a = twd(dec!(100));
        let b = Money::new(dec!(100), Currency::USD).unwrap();

        assert_eq!(
            a.add(&b).unwrap_err(),
            DomainError::CurrencyMismatch {
                left: Currency::TWD,
                right: Currency::USD,
            }
        );
        assert!(matches!(
            a.subtract(&b).unwrap_err(),
            DomainError::CurrencyMismatch { .. }
        ));
    }

    #[test]
    fn subtract_never_goes_negative() {
        let err = twd(dec!(5)).subtract(&twd(dec!(6))).unwrap_err();
        assert_eq!(err, DomainError::NegativeResult);
    }

    #[test]
    fn multiply_scales_and_normalizes() {
        let price = twd(dec!(19.99));
        assert_eq!(price.multiply(dec!(3)).unwrap(), twd(dec!(59.97)));
        assert_eq!(price.multiply(dec!(0.1)).unwrap(), twd(dec!(2.00)));
        assert_eq!(
            price.multiply(dec!(-1)).unwrap_err(),
            DomainError::NegativeAmount
        );
    }

    #[test]
    fn display_renders_currency_and_two_decimals() {
        assert_eq!(twd(dec!(35900)).to_string(), "TWD 35900.00");
    }

    fn money_strategy() -> impl Strategy<Value = Money> {
        // Amounts in cents keep the values exactly representable at 2 dp.
        (0i64..1_000_000_000).prop_map(|cents| twd(Decimal::new(cents, 2)))
    }

    proptest! {
        #[test]
        fn add_then_subtract_is_identity(a in money_strategy(), b in money_strategy()) {
            let round_trip = a.add(&b).unwrap().subtract(&b).unwrap();
            prop_assert_eq!(round_trip, a);
        }

        #[test]
        fn normalization_is_idempotent(a in money_strategy()) {
            let renormalized = Money::new(a.amount(), a.currency()).unwrap();
            prop_assert_eq!(renormalized, a);
        }
    }
}
