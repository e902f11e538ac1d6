//! A purchasable item.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, PriceError};

/// A product available for purchase.
///
/// The name is the product's identity for its lifetime; carts key their
/// entries by it. `quantity` is the stock on hand as listed by the store -
/// it is informational and is not decremented by cart operations.
///
/// The price invariant (strictly positive) holds from construction onward:
/// both [`Product::new`] and [`Product::set_price`] reject non-positive
/// amounts, and a failed update leaves the old price in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Price,
    quantity: u32,
}

impl Product {
    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `price <= 0`.
    pub fn new(
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
    ) -> Result<Self, PriceError> {
        Ok(Self {
            name: name.into(),
            price: Price::new(price)?,
            quantity,
        })
    }

    /// The product's name (its identity key).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The current price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }

    /// Stock on hand as listed by the store.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Replace the price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if `price <= 0`; the stored
    /// price is unchanged in that case.
    pub fn set_price(&mut self, price: Decimal) -> Result<(), PriceError> {
        self.price = Price::new(price)?;
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }
}
