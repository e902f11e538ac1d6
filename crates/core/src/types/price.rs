//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing or updating a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be positive, got {amount}")]
    NotPositive {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A validated price.
///
/// The amount is always strictly positive: construction rejects zero and
/// negative amounts, so an invalid price cannot exist. Callers that mutate a
/// price go through [`Product::set_price`](crate::Product::set_price), which
/// re-validates and leaves the old price in place on failure.
///
/// Amounts use [`Decimal`] in the currency's standard unit (dollars, not
/// cents) - never floats.
///
/// Deserialization goes through the same validation as [`Price::new`], so
/// a non-positive amount cannot enter through serde either.
///
/// ## Examples
///
/// ```
/// use cartwheel_core::Price;
/// use rust_decimal::Decimal;
///
/// let price = Price::new(Decimal::from(1000)).unwrap();
/// assert_eq!(price.to_string(), "$1000");
///
/// assert!(Price::new(Decimal::ZERO).is_err());
/// assert!(Price::new(Decimal::from(-5)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a `Price` from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `amount <= 0`.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive { amount });
        }
        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}
