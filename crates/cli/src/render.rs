//! Console rendering of cart outcomes.
//!
//! The core crate returns structured reports; this module is the one place
//! that turns them into storefront text on stdout.

#![allow(clippy::print_stdout)]

use cartwheel_core::{CartReport, CartView, CheckoutReport};

/// Render the outcome of an add/update/remove action.
pub fn report(report: &CartReport) {
    match report {
        CartReport::Added { name, quantity } => {
            println!("Added {quantity} of {name} to cart.");
        }
        CartReport::Updated { name, quantity } => {
            println!("Updated {name} to quantity {quantity}.");
        }
        CartReport::Removed { name } => {
            println!("Removed {name} from cart.");
        }
        CartReport::NotFound { .. } => {
            println!("Product not found in cart.");
        }
        CartReport::Rejected { reason } => {
            println!("{reason}");
        }
    }
}

/// Render a cart snapshot.
pub fn view(view: &CartView) {
    println!("{}'s Cart:", view.owner);
    if view.is_empty() {
        println!("Your cart is empty.");
        return;
    }
    for line in &view.lines {
        println!(
            "Product: {}, Price: ${}, Quantity: {}",
            line.name, line.unit_price, line.quantity
        );
    }
}

/// Render a checkout outcome.
pub fn checkout(report: &CheckoutReport) {
    match report {
        CheckoutReport::Completed { total } => {
            println!("Total amount: ${total}");
            println!("Proceeding to checkout...");
            println!("Thank you for your purchase!");
        }
        CheckoutReport::EmptyCart => {
            println!("Cannot proceed to checkout. Your cart is empty.");
        }
    }
}
