//! Rounding rules shared by the settlement services.
//!
//! Every value that leaves a subtraction, division or accumulation is rounded back
//! to [`MONEY_SCALE`] places. Balances whose magnitude is below one cent count as
//! settled.

use crate::model::{MONEY_SCALE, Money};

/// Smallest amount that still needs a transfer (one cent).
pub fn settled_tolerance() -> Money {
    Money::new(1, MONEY_SCALE)
}

pub fn is_settled(amount: Money) -> bool {
    amount.abs() < settled_tolerance()
}

/// Adds `amounts` one by one, rounding after each step.
pub fn accumulate(amounts: impl IntoIterator<Item = Money>) -> Money {
    amounts
        .into_iter()
        .fold(Money::ZERO, |acc, amount| (acc + amount).round2())
}
