//! Demonstration shopping session.
//!
//! Runs a fixed sequence against one user's cart:
//!
//! 1. Stock three products (Laptop, Phone, Headphones)
//! 2. Add 1 Laptop, 2 Phones, 1 Headphones and view the cart
//! 3. Update the Phone quantity to 1 and view again
//! 4. Remove the Headphones and view again
//! 5. Check out, then attempt to view the emptied cart
//!
//! Every cart-level rejection is rendered as a message; the sequence always
//! runs to completion.

use cartwheel_core::{PriceError, Product, User};
use rust_decimal::Decimal;
use tracing::debug;

use crate::render;

/// Run the demonstration session.
///
/// # Errors
///
/// Returns a [`PriceError`] if a catalog product carries a non-positive
/// price, which would indicate a bad catalog definition.
pub fn run() -> Result<(), PriceError> {
    // Sample products available in the store.
    let laptop = Product::new("Laptop", Decimal::from(1000), 10)?;
    let phone = Product::new("Phone", Decimal::from(500), 20)?;
    let headphones = Product::new("Headphones", Decimal::from(100), 15)?;

    let mut user = User::new("Alice");
    debug!(user = user.name(), "starting shopping session");

    // Fill the cart.
    render::report(&user.add_to_cart(laptop, 1));
    render::report(&user.add_to_cart(phone, 2));
    render::report(&user.add_to_cart(headphones, 1));
    render::view(&user.view_cart());

    // Adjust quantities.
    render::report(&user.update_cart_item("Phone", 1));
    render::view(&user.view_cart());

    render::report(&user.remove_from_cart("Headphones"));
    render::view(&user.view_cart());

    // Complete the purchase.
    render::checkout(&user.checkout());

    // The cart is empty now; the view says so.
    render::view(&user.view_cart());

    debug!(user = user.name(), "shopping session finished");
    Ok(())
}
