//! Fixed-point monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Scale of every derived amount (sums, differences, products).
const MONEY_SCALE: u32 = 2;

/// Monetary amount backed by an exact decimal.
///
/// Comparison is numeric (`5 == 5.00`). Amounts supplied by callers keep their
/// scale for display; amounts produced by arithmetic are rounded half-to-even
/// and carry exactly two decimal places. Arithmetic that leaves the decimal
/// range is a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: &Money) -> bool {
        self.0 > other.0
    }

    pub fn add(&self, other: &Money) -> DomainResult<Money> {
        let sum = self
            .0
            .checked_add(other.0)
            .ok_or_else(|| DomainError::new("Money amount overflow on add"))?;
        Ok(Money(scaled(sum)))
    }

    pub fn subtract(&self, other: &Money) -> DomainResult<Money> {
        let difference = self
            .0
            .checked_sub(other.0)
            .ok_or_else(|| DomainError::new("Money amount overflow on subtract"))?;
        Ok(Money(scaled(difference)))
    }

    pub fn multiply(&self, quantity: u32) -> DomainResult<Money> {
        let product = self
            .0
            .checked_mul(Decimal::from(quantity))
            .ok_or_else(|| DomainError::new("Money amount overflow on multiply"))?;
        Ok(Money(scaled(product)))
    }

    /// Sum of `amounts`, starting from zero.
    pub fn total<I>(amounts: I) -> DomainResult<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.add(&amount))
    }
}

fn scaled(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(MONEY_SCALE);
    rounded
}

impl ValueObject for Money {}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
