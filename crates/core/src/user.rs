//! A customer and their cart.

use serde::{Deserialize, Serialize};

use crate::cart::{Cart, UpdateOutcome};
use crate::product::Product;
use crate::report::{CartReport, CartView, CheckoutReport};

/// A customer who owns exactly one cart.
///
/// The cart is created empty with the user and dropped with them; it is
/// never shared. `User` is a thin routing layer: each method forwards to
/// the cart and translates its outcome into a [`CartReport`] or
/// [`CheckoutReport`]. Cart-level errors are recovered here - no method
/// returns `Err`, so a rejected action never propagates as a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    name: String,
    cart: Cart,
}

impl User {
    /// Create a user with an empty cart.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cart: Cart::new(),
        }
    }

    /// The user's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read access to the owned cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// An invalid quantity is surfaced as [`CartReport::Rejected`] rather
    /// than an error.
    pub fn add_to_cart(&mut self, product: Product, quantity: u32) -> CartReport {
        let name = product.name().to_owned();
        match self.cart.add_product(product, quantity) {
            Ok(_) => CartReport::Added { name, quantity },
            Err(err) => err.into(),
        }
    }

    /// Set the cart quantity for `name`; zero removes the entry.
    pub fn update_cart_item(&mut self, name: &str, quantity: u32) -> CartReport {
        match self.cart.update_quantity(name, quantity) {
            Ok(UpdateOutcome::Set) => CartReport::Updated {
                name: name.to_owned(),
                quantity,
            },
            Ok(UpdateOutcome::Removed) => CartReport::Removed {
                name: name.to_owned(),
            },
            Err(err) => err.into(),
        }
    }

    /// Remove the entry for `name` from the cart.
    pub fn remove_from_cart(&mut self, name: &str) -> CartReport {
        match self.cart.remove_product(name) {
            Ok(product) => CartReport::Removed {
                name: product.name().to_owned(),
            },
            Err(err) => err.into(),
        }
    }

    /// Snapshot the cart for presentation.
    #[must_use]
    pub fn view_cart(&self) -> CartView {
        CartView::snapshot(&self.name, &self.cart)
    }

    /// Finalize the cart.
    #[must_use]
    pub fn checkout(&mut self) -> CheckoutReport {
        match self.cart.checkout() {
            Ok(total) => CheckoutReport::Completed { total },
            // The only error checkout reports is the empty-cart condition.
            Err(_) => CheckoutReport::EmptyCart,
        }
    }
}
