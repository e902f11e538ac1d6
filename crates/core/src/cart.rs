//! Per-user collection of selected products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Errors reported by cart operations.
///
/// All of these are recoverable: callers translate them into user-facing
/// messages and continue. Nothing in the cart layer aborts the program.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// A quantity of zero was supplied where a positive one is required.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// An addition would push a stored quantity past `u32::MAX`.
    #[error("quantity exceeds the representable maximum")]
    QuantityOverflow,

    /// The named product is not in the cart.
    #[error("product not found in cart: {name}")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },

    /// Checkout was attempted on an empty cart.
    #[error("cannot proceed to checkout, cart is empty")]
    EmptyCart,
}

/// A product selected into a cart, bound to the selected quantity.
///
/// The entry quantity is how many units the shopper wants; it is distinct
/// from the product's own stock quantity. Invariant: always > 0 - an entry
/// that would drop to zero is removed instead. Deserialization enforces the
/// same rule, so a zero-quantity entry cannot enter through serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCartEntry")]
pub struct CartEntry {
    product: Product,
    quantity: u32,
}

/// Unvalidated wire shape of a [`CartEntry`].
#[derive(Deserialize)]
struct RawCartEntry {
    product: Product,
    quantity: u32,
}

impl TryFrom<RawCartEntry> for CartEntry {
    type Error = CartError;

    fn try_from(raw: RawCartEntry) -> Result<Self, Self::Error> {
        if raw.quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(Self {
            product: raw.product,
            quantity: raw.quantity,
        })
    }
}

impl CartEntry {
    /// The selected product.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// How many units are in the cart.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// The entry's contribution to the cart total.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price().amount() * Decimal::from(self.quantity)
    }
}

/// How [`Cart::update_quantity`] resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The stored quantity was set to the requested value.
    Set,
    /// The requested quantity was zero, so the entry was removed.
    Removed,
}

/// A shopping cart: unique product names mapped to selected quantities.
///
/// Entries iterate in insertion order. The backing store is a `Vec` with
/// name lookup - carts hold a handful of entries, and a hash map would lose
/// the ordering the presentation layer relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|e| e.product.name() == name)
    }

    /// Add `quantity` units of `product` to the cart.
    ///
    /// If a product with the same name is already present, its stored
    /// quantity is incremented; the incoming product's other fields are
    /// ignored. Otherwise the product is inserted bound to `quantity`
    /// (its own stock quantity field is not consulted).
    ///
    /// Returns the stored quantity after the addition.
    ///
    /// Stored quantities cap at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `quantity` is zero (both
    /// the insert and the accumulate path enforce this), or
    /// [`CartError::QuantityOverflow`] if the addition would exceed the
    /// cap. The cart is left unchanged on failure.
    pub fn add_product(&mut self, product: Product, quantity: u32) -> Result<u32, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let existing = self
            .items
            .iter_mut()
            .find(|e| e.product.name() == product.name());
        if let Some(entry) = existing {
            entry.quantity = entry
                .quantity
                .checked_add(quantity)
                .ok_or(CartError::QuantityOverflow)?;
            Ok(entry.quantity)
        } else {
            self.items.push(CartEntry { product, quantity });
            Ok(quantity)
        }
    }

    /// Set the stored quantity for `name`.
    ///
    /// A quantity of zero is treated as removal.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no entry with `name` exists; the
    /// cart is unchanged.
    pub fn update_quantity(&mut self, name: &str, quantity: u32) -> Result<UpdateOutcome, CartError> {
        let pos = self.position(name).ok_or_else(|| CartError::NotFound {
            name: name.to_owned(),
        })?;
        if quantity == 0 {
            self.items.remove(pos);
            return Ok(UpdateOutcome::Removed);
        }
        if let Some(entry) = self.items.get_mut(pos) {
            entry.quantity = quantity;
        }
        Ok(UpdateOutcome::Set)
    }

    /// Remove the entry for `name`, returning its product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if no entry with `name` exists.
    pub fn remove_product(&mut self, name: &str) -> Result<Product, CartError> {
        let pos = self.position(name).ok_or_else(|| CartError::NotFound {
            name: name.to_owned(),
        })?;
        Ok(self.items.remove(pos).product)
    }

    /// Total cost of the cart: Σ(price × quantity). Zero when empty.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartEntry::line_total).sum()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> {
        self.items.iter()
    }

    /// Whether the cart holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Finalize the cart: compute the total and clear all entries.
    ///
    /// Clearing happens in one step - no entry survives a successful
    /// checkout. Checking out an already-empty cart is a no-op that
    /// reports the empty condition again.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] if the cart is empty; no state
    /// changes in that case.
    pub fn checkout(&mut self) -> Result<Decimal, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let total = self.total();
        self.items.clear();
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(name: &str, price: i64) -> Product {
        Product::new(name, Decimal::from(price), 10).unwrap()
    }

    #[test]
    fn test_add_new_entry() {
        let mut cart = Cart::new();
        let stored = cart.add_product(product("Laptop", 1000), 2).unwrap();
        assert_eq!(stored, 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_ignores_product_stock_quantity() {
        let mut cart = Cart::new();
        // Stock says 10, but the shopper asked for 3.
        cart.add_product(product("Laptop", 1000), 3).unwrap();
        let entry = cart.entries().next().unwrap();
        assert_eq!(entry.quantity(), 3);
    }

    #[test]
    fn test_add_accumulates_quantity() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), 2).unwrap();
        let stored = cart.add_product(product("Laptop", 1000), 3).unwrap();
        assert_eq!(stored, 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_zero_quantity_rejected_on_new_name() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_product(product("Laptop", 1000), 0),
            Err(CartError::InvalidQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_rejected_on_existing_name() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), 2).unwrap();
        assert_eq!(
            cart.add_product(product("Laptop", 1000), 0),
            Err(CartError::InvalidQuantity)
        );
        assert_eq!(cart.entries().next().unwrap().quantity(), 2);
    }

    #[test]
    fn test_update_sets_quantity() {
        let mut cart = Cart::new();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let outcome = cart.update_quantity("Phone", 1).unwrap();
        assert_eq!(outcome, UpdateOutcome::Set);
        assert_eq!(cart.entries().next().unwrap().quantity(), 1);
    }

    #[test]
    fn test_update_zero_removes_entry() {
        let mut cart = Cart::new();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let outcome = cart.update_quantity("Phone", 0).unwrap();
        assert_eq!(outcome, UpdateOutcome::Removed);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_absent_name_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let before = cart.clone();
        assert!(matches!(
            cart.update_quantity("Tablet", 1),
            Err(CartError::NotFound { .. })
        ));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let removed = cart.remove_product("Phone").unwrap();
        assert_eq!(removed.name(), "Phone");
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_name() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.remove_product("Phone"),
            Err(CartError::NotFound {
                name: "Phone".to_owned()
            })
        );
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::new();
        cart.add_product(product("A", 1000), 1).unwrap();
        cart.add_product(product("B", 500), 2).unwrap();
        assert_eq!(cart.total(), Decimal::from(2000));
    }

    #[test]
    fn test_total_empty_cart_is_zero() {
        assert_eq!(Cart::new().total(), Decimal::ZERO);
    }

    #[test]
    fn test_entries_in_insertion_order() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), 1).unwrap();
        cart.add_product(product("Phone", 500), 2).unwrap();
        cart.add_product(product("Headphones", 100), 1).unwrap();
        let names: Vec<_> = cart.entries().map(|e| e.product().name()).collect();
        assert_eq!(names, ["Laptop", "Phone", "Headphones"]);
    }

    #[test]
    fn test_checkout_reports_total_and_clears() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), 1).unwrap();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let expected = cart.total();
        let total = cart.checkout().unwrap();
        assert_eq!(total, expected);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_overflowing_quantity_rejected() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), u32::MAX).unwrap();
        assert_eq!(
            cart.add_product(product("Laptop", 1000), 1),
            Err(CartError::QuantityOverflow)
        );
        assert_eq!(cart.entries().next().unwrap().quantity(), u32::MAX);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add_product(product("Laptop", 1000), 1).unwrap();
        cart.add_product(product("Phone", 500), 2).unwrap();
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }

    #[test]
    fn test_deserialize_rejects_zero_quantity_entry() {
        let json = concat!(
            r#"{"items":[{"product":"#,
            r#"{"name":"Laptop","price":"1000","quantity":10},"#,
            r#""quantity":0}]}"#
        );
        assert!(serde_json::from_str::<Cart>(json).is_err());

        // The same shape with a positive quantity is accepted.
        let valid = json.replace("\"quantity\":0", "\"quantity\":1");
        assert!(serde_json::from_str::<Cart>(&valid).is_ok());
    }

    #[test]
    fn test_checkout_empty_cart_is_repeatable_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout(), Err(CartError::EmptyCart));
        assert_eq!(cart.checkout(), Err(CartError::EmptyCart));
        assert!(cart.is_empty());
    }
}
