use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Sub, SubAssign},
};

/// Number of decimal places every money value is kept at.
pub const MONEY_SCALE: u32 = 2;

/// Currency amount backed by an exact decimal.
///
/// Addition and subtraction saturate at the decimal range instead of panicking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_sign_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn is_sign_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Rounds to two decimal places, midpoints away from zero.
    pub fn round2(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Div<usize> for Money {
    type Output = Self;

    fn div(self, rhs: usize) -> Self::Output {
        Self(self.0 / Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A participant and what they paid. Names are labels, not keys: duplicates are
/// kept as separate entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub amount: Money,
}

impl Member {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Signed deviation from the equal share.
///
/// Positive: overpaid (creditor). Negative: underpaid (debtor).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementDetail {
    pub name: String,
    pub diff: Money,
}

impl SettlementDetail {
    pub fn new(name: impl Into<String>, diff: Money) -> Self {
        Self {
            name: name.into(),
            diff,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferDetail {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub total_amount: Money,
    pub average_amount: Money,
    pub settlement_details: Vec<SettlementDetail>,
    pub transfer_details: Vec<TransferDetail>,
}

impl Settlement {
    pub fn empty() -> Self {
        Self {
            total_amount: Money::ZERO,
            average_amount: Money::ZERO,
            settlement_details: Vec::new(),
            transfer_details: Vec::new(),
        }
    }
}
