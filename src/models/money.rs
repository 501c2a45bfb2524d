//! The money module holds the Money model, which pairs an amount with a
//! [`Currency`] and implements the arithmetic you'd expect, with the caveat
//! that combining two amounts of different currencies is an error rather
//! than a silent nonsense value.
//!
//! Amounts are plain `f64`. Whatever precision artifacts come with floating
//! point come with `Money` too, and division by zero yields the usual
//! infinities/NaN instead of an error.

use crate::{
    error::{Error, Result},
    models::currency::Currency,
};
use getset::{CopyGetters, Getters};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// An amount of some currency.
///
/// Every operation leaves its operands untouched and hands back a freshly
/// constructed `Money`. Two values are equal when both the amount and the
/// currency are equal.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
#[cfg_attr(feature = "with_serde", derive(serde_derive::Serialize, serde_derive::Deserialize))]
pub struct Money {
    /// Quantity of currency
    #[getset(get_copy = "pub")]
    amount: f64,
    /// The denomination the amount is expressed in
    #[getset(get = "pub")]
    currency: Currency,
}

impl Money {
    /// Create a new money value. No validation, negative and non-finite
    /// amounts are accepted as given.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
        }
    }
}

impl fmt::Display for Money {
    /// Renders the amount with the currency's symbol if it has one
    /// (`"$12.50"`), otherwise prefixed by the currency code (`"USD 12.50"`).
    /// The amount is always fixed-point with exactly `currency.digits()`
    /// fractional digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.digits() as usize;
        match self.currency.symbol() {
            Some(symbol) => write!(f, "{}{:.*}", symbol, digits, self.amount),
            None => write!(f, "{} {:.*}", self.currency.code(), digits, self.amount),
        }
    }
}

impl Add for Money {
    type Output = Result<Money>;

    /// Add two money values of the same currency. If the currencies differ,
    /// nothing is computed and we error out.
    fn add(self, other: Money) -> Self::Output {
        if self.currency != other.currency {
            Err(Error::DifferentCurrency)?;
        }
        Ok(Money::new(self.amount + other.amount, self.currency))
    }
}

impl Sub for Money {
    type Output = Result<Money>;

    /// Subtract two money values of the same currency. Same contract as
    /// addition: mismatched currencies are refused.
    fn sub(self, other: Money) -> Self::Output {
        if self.currency != other.currency {
            Err(Error::DifferentCurrency)?;
        }
        Ok(Money::new(self.amount - other.amount, self.currency))
    }
}

impl Mul<f64> for Money {
    type Output = Money;

    /// Scale an amount by a bare number. A scalar has no currency, so this
    /// cannot fail.
    fn mul(self, rhs: f64) -> Self::Output {
        Money::new(self.amount * rhs, self.currency)
    }
}

impl Div<f64> for Money {
    type Output = Money;

    /// Divide an amount by a bare number. Division by zero follows `f64`
    /// semantics (infinity or NaN), on purpose.
    fn div(self, rhs: f64) -> Self::Output {
        Money::new(self.amount / rhs, self.currency)
    }
}
