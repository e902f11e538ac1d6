//! Structured outcomes of cart actions.
//!
//! The domain never prints. Every [`User`](crate::User) action returns one
//! of these values and the presentation layer decides how to word it. All
//! variants describe recoverable conditions - the caller reports them and
//! moves on to the next instruction.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartError};

/// Outcome of an add/update/remove action on a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CartReport {
    /// Units were added; `quantity` is what the shopper asked for.
    Added {
        /// Product name.
        name: String,
        /// Units added in this action.
        quantity: u32,
    },
    /// The stored quantity was set to a new value.
    Updated {
        /// Product name.
        name: String,
        /// The new stored quantity.
        quantity: u32,
    },
    /// The entry was removed from the cart.
    Removed {
        /// Product name.
        name: String,
    },
    /// The named product was not in the cart; nothing changed.
    NotFound {
        /// The name that was looked up.
        name: String,
    },
    /// The action was rejected; nothing changed.
    Rejected {
        /// Why the cart refused the action.
        reason: String,
    },
}

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CheckoutReport {
    /// The cart was finalized and cleared.
    Completed {
        /// Total cost of the purchase.
        total: Decimal,
    },
    /// The cart was empty; nothing changed.
    EmptyCart,
}

/// One row of a [`CartView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineView {
    /// Product name.
    pub name: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Units in the cart.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub line_total: Decimal,
}

/// A read-only snapshot of a cart for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartView {
    /// Name of the cart's owner.
    pub owner: String,
    /// Rows in insertion order; empty when the cart is empty.
    pub lines: Vec<LineView>,
    /// Total cost across all rows.
    pub total: Decimal,
}

impl CartView {
    pub(crate) fn snapshot(owner: &str, cart: &Cart) -> Self {
        Self {
            owner: owner.to_owned(),
            lines: cart
                .entries()
                .map(|entry| LineView {
                    name: entry.product().name().to_owned(),
                    unit_price: entry.product().price().amount(),
                    quantity: entry.quantity(),
                    line_total: entry.line_total(),
                })
                .collect(),
            total: cart.total(),
        }
    }

    /// Whether the snapshot holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<CartError> for CartReport {
    fn from(err: CartError) -> Self {
        match err {
            CartError::NotFound { name } => Self::NotFound { name },
            reason => Self::Rejected {
                reason: reason.to_string(),
            },
        }
    }
}
