//! Currency amounts.

use core::iter::Sum;
use core::ops::{Add, AddAssign, Neg, Sub};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A signed currency amount with exact decimal arithmetic.
///
/// Amounts are single-currency; localisation and symbols are a presentation
/// concern. Negative values are meaningful (a "saving" that costs more).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Build an amount from minor units (e.g. cents).
    pub fn from_minor(minor: i64) -> Self {
        Self(Decimal::new(minor, 2))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Scale a per-unit amount by a unit count. `None` when the product is
    /// out of the representable range.
    pub fn checked_times(&self, units: u64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(units)).map(Self)
    }

    /// Like [`Money::checked_times`], clamped at the representable bounds.
    pub fn saturating_times(&self, units: u64) -> Self {
        Self(self.0.saturating_mul(Decimal::from(units)))
    }

    pub fn checked_add(&self, rhs: Money) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Addition clamped at the representable bounds.
    pub fn saturating_add(&self, rhs: Money) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// `self / whole` as a whole-number percentage, rounded half away from
    /// zero. `None` for a zero `whole` or an unrepresentable result.
    pub fn percent_of(&self, whole: Money) -> Option<Decimal> {
        if whole.is_zero() {
            return None;
        }
        self.0
            .checked_div(whole.0)?
            .checked_mul(Decimal::ONE_HUNDRED)
            .map(|p| p.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }

    /// Even share of this amount over `parts`, rounded to cents (banker's
    /// rounding). `None` for zero parts.
    pub fn divided_by(&self, parts: u64) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        Some(Self((self.0 / Decimal::from(parts)).round_dp(2)))
    }

    /// Negative amounts become zero; others are unchanged.
    pub fn clamp_non_negative(&self) -> Self {
        if self.is_negative() { Self::ZERO } else { *self }
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + *m)
    }
}
